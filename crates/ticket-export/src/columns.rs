//! Column layouts and ticket-to-record conversion.

use chrono::{NaiveDate, NaiveDateTime};
use ticket_core::Ticket;

/// `Created`, `Updated`, `Resolved`
pub const JIRA_DATETIME_FORMAT: &str = "%d/%m/%Y %H:%M";
/// `Created Date`, `Resolved Date`
pub const ISO_DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
/// `Due Date`
pub const JIRA_DATE_FORMAT: &str = "%d/%m/%Y";
/// `Дата` in the daily statistics
pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

pub const ISSUE_KEY: &str = "Issue Key";
pub const SUMMARY: &str = "Summary";
pub const STATUS: &str = "Status";
pub const PRIORITY: &str = "Priority";
pub const CREATED: &str = "Created";
pub const CLASSROOM: &str = "Аудитория";
pub const GROUP: &str = "Группа A/B теста";
pub const CATEGORY: &str = "Категория проблемы";
pub const COMPONENT: &str = "Component/s";
pub const RESOLUTION_HOURS: &str = "Время решения (часы)";
pub const DEPARTMENT: &str = "Кафедра";
pub const IMPACT: &str = "Влияние на процесс";
pub const TICKET_COUNT: &str = "Количество заявок";
pub const MEAN_RESOLUTION: &str = "Среднее время решения";
pub const DATE: &str = "Дата";

/// Every column of the full export, in order.
pub const FULL_COLUMNS: [&str; 38] = [
    ISSUE_KEY,
    "Issue Type",
    SUMMARY,
    "Description",
    STATUS,
    PRIORITY,
    "Resolution",
    CREATED,
    "Updated",
    "Resolved",
    COMPONENT,
    "Affects Version/s",
    "Fix Version/s",
    "Reporter",
    "Assignee",
    "Votes",
    "Watchers",
    "Original Estimate",
    "Remaining Estimate",
    "Time Spent",
    "Work Ratio",
    CLASSROOM,
    GROUP,
    CATEGORY,
    DEPARTMENT,
    IMPACT,
    "Источник заявки",
    RESOLUTION_HOURS,
    "Комментарии",
    "Labels",
    "Environment",
    "Linked Issues",
    "Created Date",
    "Resolved Date",
    "Due Date",
    "Количество повторов",
    "Сложность решения",
    "Тип вмешательства",
];

/// Analysis columns of `jira_simple_export.csv`.
pub const SIMPLE_COLUMNS: [&str; 12] = [
    ISSUE_KEY,
    SUMMARY,
    STATUS,
    PRIORITY,
    CREATED,
    CLASSROOM,
    GROUP,
    CATEGORY,
    COMPONENT,
    RESOLUTION_HOURS,
    DEPARTMENT,
    IMPACT,
];

/// Columns of the simple-only `jira_export.csv`.
pub const SIMPLE_ONLY_COLUMNS: [&str; 8] = [
    ISSUE_KEY, SUMMARY, STATUS, PRIORITY, CREATED, CLASSROOM, GROUP, CATEGORY,
];

pub const AGGREGATED_COLUMNS: [&str; 4] = [CLASSROOM, GROUP, TICKET_COUNT, MEAN_RESOLUTION];

/// Format one-decimal hours, keeping the decimal for whole values (`2.0`).
pub fn format_hours(hours: f64) -> String {
    format!("{hours:.1}")
}

fn format_datetime(value: NaiveDateTime, format: &str) -> String {
    value.format(format).to_string()
}

fn format_optional<T, F: FnOnce(T) -> String>(value: Option<T>, render: F) -> String {
    value.map(render).unwrap_or_default()
}

/// Convert a ticket to a full-export record.
pub fn full_record(ticket: &Ticket) -> Vec<String> {
    vec![
        ticket.key.to_string(),
        ticket.issue_type.to_string(),
        ticket.summary.clone(),
        ticket.description.clone(),
        ticket.status.to_string(),
        ticket.priority.to_string(),
        ticket.resolution().to_string(),
        format_datetime(ticket.created_at, JIRA_DATETIME_FORMAT),
        format_datetime(ticket.updated_at, JIRA_DATETIME_FORMAT),
        format_optional(ticket.resolved_at, |t| {
            format_datetime(t, JIRA_DATETIME_FORMAT)
        }),
        ticket.component.to_string(),
        ticket.affects_version.to_string(),
        format_optional(ticket.fix_version, |v| v.to_string()),
        ticket.reporter.clone(),
        ticket.assignee.unwrap_or_default().to_string(),
        ticket.votes.to_string(),
        ticket.watchers.to_string(),
        format_optional(ticket.original_estimate_hours, |h| format!("{h}h")),
        String::new(),
        format_optional(ticket.time_spent_hours, |h| format!("{h}h")),
        format_optional(ticket.work_ratio, |r| r.to_string()),
        ticket.classroom.to_string(),
        ticket.group.to_string(),
        ticket.category.to_string(),
        ticket.department.to_string(),
        ticket.impact.to_string(),
        ticket.source.to_string(),
        format_optional(ticket.resolution_hours, format_hours),
        ticket.comment.unwrap_or_default().to_string(),
        ticket.label.to_string(),
        ticket.environment.to_string(),
        format_optional(ticket.linked_issue, |k| k.to_string()),
        format_datetime(ticket.created_at, ISO_DATETIME_FORMAT),
        format_optional(ticket.resolved_at, |t| {
            format_datetime(t, ISO_DATETIME_FORMAT)
        }),
        format_optional(ticket.due_date, |d: NaiveDate| {
            d.format(JIRA_DATE_FORMAT).to_string()
        }),
        ticket.repeat_count.to_string(),
        ticket.complexity.to_string(),
        ticket.intervention.to_string(),
    ]
}

/// Convert a ticket to a `jira_simple_export.csv` record.
pub fn simple_record(ticket: &Ticket) -> Vec<String> {
    vec![
        ticket.key.to_string(),
        ticket.summary.clone(),
        ticket.status.to_string(),
        ticket.priority.to_string(),
        format_datetime(ticket.created_at, JIRA_DATETIME_FORMAT),
        ticket.classroom.to_string(),
        ticket.group.to_string(),
        ticket.category.to_string(),
        ticket.component.to_string(),
        format_optional(ticket.resolution_hours, format_hours),
        ticket.department.to_string(),
        ticket.impact.to_string(),
    ]
}

/// Convert a ticket to a `jira_export.csv` record.
pub fn simple_only_record(ticket: &Ticket) -> Vec<String> {
    let mut record = simple_record(ticket);
    record.truncate(SIMPLE_ONLY_COLUMNS.len());
    record
}
