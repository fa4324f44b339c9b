//! Boundaries of last week, Sunday through Saturday.

use chrono::{Datelike, Days, Local, NaiveDate};

/// First (Sunday) and last (Saturday) day of a calendar week.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekBounds {
    pub first: NaiveDate,
    pub last: NaiveDate,
}

impl WeekBounds {
    /// Both days as `YYYY-MM-DD`.
    pub fn formatted(&self) -> (String, String) {
        (
            self.first.format("%Y-%m-%d").to_string(),
            self.last.format("%Y-%m-%d").to_string(),
        )
    }
}

/// Previous Sunday-to-Saturday week relative to `today`.
pub fn last_week(today: NaiveDate) -> WeekBounds {
    let since_sunday = u64::from(today.weekday().num_days_from_sunday());
    WeekBounds {
        first: today - Days::new(7 + since_sunday),
        last: today - Days::new(1 + since_sunday),
    }
}

pub fn last_week_now() -> WeekBounds {
    last_week(Local::now().date_naive())
}
