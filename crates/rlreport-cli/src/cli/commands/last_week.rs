//! `rlreport last-week` – print last week's Sunday and Saturday.

use chrono::NaiveDate;
use rlreport_core::week::{last_week, last_week_now};

pub fn run_last_week(today: Option<NaiveDate>) {
    let bounds = match today {
        Some(d) => last_week(d),
        None => last_week_now(),
    };
    let (first, last) = bounds.formatted();
    println!("{} {}", first, last);
}
