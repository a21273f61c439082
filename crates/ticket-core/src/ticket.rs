//! The synthetic ticket record.

use crate::catalog::RESOLUTION_LABEL;
use crate::types::{
    Category, Classroom, Complexity, Component, CpuVendor, Group, Impact, Intervention, IssueType,
    Label, Priority, Source, Status, Watchers,
};
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Serialize, Serializer};
use std::fmt;

/// Sequential ticket identifier rendered as `MMC-1001`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TicketKey(pub u32);

impl TicketKey {
    pub const PREFIX: &'static str = "MMC";
}

impl fmt::Display for TicketKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{:04}", Self::PREFIX, self.0)
    }
}

impl Serialize for TicketKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Product version such as `MMC v2.7`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Version {
    pub major: u8,
    pub minor: u8,
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} v{}.{}", TicketKey::PREFIX, self.major, self.minor)
    }
}

impl Serialize for Version {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Workstation environment such as `Windows 10 / AMD CPU`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Environment {
    pub windows: u8,
    pub cpu: CpuVendor,
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Windows {} / {} CPU", self.windows, self.cpu)
    }
}

impl Serialize for Environment {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// One synthetic support record.
///
/// Built once by the generator and never mutated. `resolved_at`,
/// `resolution_hours`, `fix_version`, `time_spent_hours` and `work_ratio` are
/// present exactly when the status is resolved or closed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Ticket {
    pub key: TicketKey,
    pub issue_type: IssueType,
    pub summary: String,
    pub description: String,
    pub status: Status,
    pub priority: Priority,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    pub resolved_at: Option<NaiveDateTime>,
    pub component: Component,
    pub affects_version: Version,
    pub fix_version: Option<Version>,
    pub reporter: String,
    pub assignee: Option<&'static str>,
    pub votes: u8,
    pub watchers: Watchers,
    pub original_estimate_hours: Option<u8>,
    pub time_spent_hours: Option<u8>,
    pub work_ratio: Option<u16>,
    pub classroom: Classroom,
    pub group: Group,
    pub category: Category,
    pub department: &'static str,
    pub impact: Impact,
    pub source: Source,
    /// Hours between creation and resolution, one decimal. `None` when the
    /// ticket is unresolved, which is distinct from `Some(0.0)`.
    pub resolution_hours: Option<f64>,
    pub comment: Option<&'static str>,
    pub label: Label,
    pub environment: Environment,
    pub linked_issue: Option<TicketKey>,
    pub due_date: Option<NaiveDate>,
    pub repeat_count: u8,
    pub complexity: Complexity,
    pub intervention: Intervention,
}

impl Ticket {
    pub fn is_resolved(&self) -> bool {
        self.resolved_at.is_some()
    }

    /// `Решено` for resolved tickets, empty otherwise.
    pub fn resolution(&self) -> &'static str {
        if self.is_resolved() {
            RESOLUTION_LABEL
        } else {
            ""
        }
    }

    pub fn created_date(&self) -> NaiveDate {
        self.created_at.date()
    }
}

/// Round a duration in hours to one decimal.
///
/// Rounds the exact binary value, with exact halves going to the even
/// neighbour: 2.25 becomes 2.2, and 3.05 (stored just below the half)
/// becomes 3.0.
pub fn round_hours(hours: f64) -> f64 {
    let scaled = hours * 10.0;
    // rounding error of the product, so `scaled + error` is exact
    let error = hours.mul_add(10.0, -scaled);
    let floor = scaled.floor();
    let excess = (scaled - floor - 0.5) + error;

    let rounded = if excess > 0.0 || (excess == 0.0 && floor % 2.0 != 0.0) {
        floor + 1.0
    } else {
        floor
    };
    rounded / 10.0
}
