//! Calendar helpers: the special date, the day counter and daily
//! reset hour handling.

use chrono::{DateTime, Datelike, Duration, Local, NaiveDate, NaiveDateTime, Timelike};

/// Fixed start of the relationship counter (day 1).
pub const RELATIONSHIP_START: &str = "2015-10-07T00:00:00";

/// Month and day of the fixed special date (December 25).
pub const SPECIAL_DATE: (u32, u32) = (12, 25);

/// Message shown on the special date.
pub const SPECIAL_MESSAGE_ID: u32 = 1;

/// The fixed relationship start timestamp.
pub fn relationship_start() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2015, 10, 7)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .unwrap_or_default()
}

/// Get adjusted "today" for a local wall-clock time.
///
/// If the hour is before `daily_reset_hour`, the day still counts as
/// yesterday. A reset hour of 0 means days change at midnight.
pub fn adjusted_today(now: NaiveDateTime, daily_reset_hour: u32) -> NaiveDate {
    if now.hour() < daily_reset_hour {
        (now - Duration::days(1)).date()
    } else {
        now.date()
    }
}

/// Adjusted "today" for a timezone-aware local time.
pub fn local_today(now: &DateTime<Local>, daily_reset_hour: u32) -> NaiveDate {
    adjusted_today(now.naive_local(), daily_reset_hour)
}

/// Whether `date` falls on the special date, in any year.
pub fn is_special_date(date: NaiveDate) -> bool {
    (date.month(), date.day()) == SPECIAL_DATE
}

/// Day number since `start`, where the start day itself is day 1.
///
/// Time of day is ignored; dates before the start clamp to day 1.
pub fn days_together(start: NaiveDateTime, today: NaiveDate) -> u32 {
    let diff = (today - start.date()).num_days().max(0);
    u32::try_from(diff).unwrap_or(u32::MAX - 1) + 1
}

/// Source of the current local time.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Local>;
}

/// Wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}
