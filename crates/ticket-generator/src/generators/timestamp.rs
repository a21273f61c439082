//! Timestamp generators.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};
use rand::Rng;

/// First and last hour of the working day, inclusive.
pub const WORKDAY_HOURS: (i64, i64) = (8, 18);

/// Bounds of the resolution delay in whole hours, inclusive.
pub const RESOLUTION_HOURS: (i64, i64) = (1, 48);

/// Bounds of the last-update delay for unresolved tickets, inclusive.
pub const UPDATE_HOURS: (i64, i64) = (1, 72);

/// Bounds of the due-date offset in days, inclusive.
pub const DUE_DAYS: (i64, i64) = (1, 7);

/// Generate a creation timestamp: a day in `start..=start + days`, at an hour
/// of the working day and a random minute. Three draws.
pub fn generate_created_at<R: Rng + ?Sized>(
    rng: &mut R,
    start: NaiveDate,
    days: i64,
) -> NaiveDateTime {
    let day = rng.random_range(0..=days);
    let hour = rng.random_range(WORKDAY_HOURS.0..=WORKDAY_HOURS.1);
    let minute = rng.random_range(0..=59);

    start.and_time(NaiveTime::MIN)
        + TimeDelta::days(day)
        + TimeDelta::hours(hour)
        + TimeDelta::minutes(minute)
}

/// Generate the delay between creation and resolution. Two draws.
pub fn generate_resolution_delay<R: Rng + ?Sized>(rng: &mut R) -> TimeDelta {
    let hours = rng.random_range(RESOLUTION_HOURS.0..=RESOLUTION_HOURS.1);
    let minutes = rng.random_range(0..=59);
    TimeDelta::hours(hours) + TimeDelta::minutes(minutes)
}

/// Generate the delay before the last update of an unresolved ticket. One draw.
pub fn generate_update_delay<R: Rng + ?Sized>(rng: &mut R) -> TimeDelta {
    TimeDelta::hours(rng.random_range(UPDATE_HOURS.0..=UPDATE_HOURS.1))
}

/// Generate a due date a few days after creation. One draw.
pub fn generate_due_date<R: Rng + ?Sized>(rng: &mut R, created_at: NaiveDateTime) -> NaiveDate {
    (created_at + TimeDelta::days(rng.random_range(DUE_DAYS.0..=DUE_DAYS.1))).date()
}

/// Length of `delta` in hours.
pub fn delta_hours(delta: TimeDelta) -> f64 {
    delta.num_seconds() as f64 / 3600.0
}
