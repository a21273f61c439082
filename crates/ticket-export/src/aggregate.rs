//! Per-classroom and per-day aggregations of a ticket sequence.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use ticket_core::{round_hours, Classroom, Group, Ticket};

use crate::columns::{format_hours, ISO_DATE_FORMAT};

/// Ticket count and mean resolution time of one classroom within one group.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassroomSummary {
    pub classroom: Classroom,
    pub group: Group,
    pub ticket_count: usize,
    /// Mean of the present resolution hours, rounded to one decimal.
    /// `None` when no ticket of the classroom was resolved.
    pub mean_resolution_hours: Option<f64>,
}

impl ClassroomSummary {
    pub fn to_record(&self) -> Vec<String> {
        vec![
            self.classroom.to_string(),
            self.group.to_string(),
            self.ticket_count.to_string(),
            self.mean_resolution_hours
                .map(format_hours)
                .unwrap_or_else(|| "-".to_string()),
        ]
    }
}

/// Number of tickets created on one date, per group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DailyCount {
    pub date: NaiveDate,
    pub group_a: usize,
    pub group_b: usize,
}

impl DailyCount {
    pub fn to_record(&self) -> Vec<String> {
        vec![
            self.date.format(ISO_DATE_FORMAT).to_string(),
            self.group_a.to_string(),
            self.group_b.to_string(),
        ]
    }
}

/// Summarise tickets per (classroom, group), ordered by classroom then group.
///
/// Only classrooms that received at least one ticket appear.
pub fn aggregate_by_classroom(tickets: &[Ticket]) -> Vec<ClassroomSummary> {
    let mut buckets: BTreeMap<(Classroom, Group), (usize, Vec<f64>)> = BTreeMap::new();

    for ticket in tickets {
        let (count, hours) = buckets.entry((ticket.classroom, ticket.group)).or_default();
        *count += 1;
        if let Some(h) = ticket.resolution_hours {
            hours.push(h);
        }
    }

    buckets
        .into_iter()
        .map(|((classroom, group), (ticket_count, hours))| {
            let mean_resolution_hours = if hours.is_empty() {
                None
            } else {
                Some(round_hours(hours.iter().sum::<f64>() / hours.len() as f64))
            };
            ClassroomSummary {
                classroom,
                group,
                ticket_count,
                mean_resolution_hours,
            }
        })
        .collect()
}

/// Count tickets per creation date, ascending, with both groups zero-filled.
pub fn daily_counts(tickets: &[Ticket]) -> Vec<DailyCount> {
    let mut days: BTreeMap<NaiveDate, DailyCount> = BTreeMap::new();

    for ticket in tickets {
        let date = ticket.created_date();
        let day = days.entry(date).or_insert(DailyCount {
            date,
            group_a: 0,
            group_b: 0,
        });
        match ticket.group {
            Group::A => day.group_a += 1,
            Group::B => day.group_b += 1,
        }
    }

    days.into_values().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classroom_counts_sum_to_total() {
        let tickets = ticket_generator::generate(300, 42).unwrap();
        let summaries = aggregate_by_classroom(&tickets);

        let total: usize = summaries.iter().map(|s| s.ticket_count).sum();
        assert_eq!(total, 300);

        let a: usize = summaries
            .iter()
            .filter(|s| s.group == Group::A)
            .map(|s| s.ticket_count)
            .sum();
        assert_eq!(a, 180);
    }

    #[test]
    fn test_classroom_summaries_sorted_and_owned() {
        let tickets = ticket_generator::generate(300, 7).unwrap();
        let summaries = aggregate_by_classroom(&tickets);

        for pair in summaries.windows(2) {
            assert!((pair[0].classroom, pair[0].group) < (pair[1].classroom, pair[1].group));
        }
        for summary in &summaries {
            assert!(summary.group.owns(summary.classroom));
            assert!(summary.ticket_count > 0);
        }
    }

    #[test]
    fn test_mean_resolution_matches_tickets() {
        let tickets = ticket_generator::generate(120, 3).unwrap();

        for summary in aggregate_by_classroom(&tickets) {
            let hours: Vec<f64> = tickets
                .iter()
                .filter(|t| t.classroom == summary.classroom)
                .filter_map(|t| t.resolution_hours)
                .collect();

            match summary.mean_resolution_hours {
                None => {
                    assert!(hours.is_empty());
                    assert_eq!(summary.to_record()[3], "-");
                }
                Some(mean) => {
                    let expected = hours.iter().sum::<f64>() / hours.len() as f64;
                    assert!((mean - expected).abs() <= 0.05 + 1e-9);
                }
            }
        }
    }

    #[test]
    fn test_daily_counts() {
        let tickets = ticket_generator::generate(300, 42).unwrap();
        let days = daily_counts(&tickets);

        let total: usize = days.iter().map(|d| d.group_a + d.group_b).sum();
        assert_eq!(total, 300);
        assert_eq!(days.iter().map(|d| d.group_a).sum::<usize>(), 180);

        for pair in days.windows(2) {
            assert!(pair[0].date < pair[1].date);
        }
        assert!(days[0].to_record()[0].starts_with("2025-10-"));
    }

    #[test]
    fn test_mean_on_a_half_rounds_to_even() {
        let mut tickets = ticket_generator::generate(300, 42).unwrap();
        let (classroom, group) = (tickets[0].classroom, tickets[0].group);

        let mut hours = [Some(2.0), Some(2.5)].into_iter();
        for ticket in tickets
            .iter_mut()
            .filter(|t| t.classroom == classroom && t.group == group)
        {
            ticket.resolution_hours = hours.next().flatten();
        }

        let summary = aggregate_by_classroom(&tickets)
            .into_iter()
            .find(|s| s.classroom == classroom && s.group == group)
            .unwrap();
        assert!(summary.ticket_count >= 2);
        assert_eq!(summary.mean_resolution_hours, Some(2.2));
        assert_eq!(summary.to_record()[3], "2.2");
    }

    #[test]
    fn test_empty_input() {
        assert!(aggregate_by_classroom(&[]).is_empty());
        assert!(daily_counts(&[]).is_empty());
    }
}
