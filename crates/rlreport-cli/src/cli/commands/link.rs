//! `rlreport link` – print the report link.

use anyhow::Result;
use chrono::NaiveDate;
use rlreport_core::config::RlConfig;
use rlreport_core::facility::Facility;
use rlreport_core::fetcher::yesterday;
use rlreport_core::link::derive_link;

pub fn run_link(cfg: &RlConfig, facility: &str, date: Option<NaiveDate>) -> Result<()> {
    let facility = Facility::from_canonical(facility)?;
    let date = date.unwrap_or_else(yesterday);
    println!("{}", derive_link(&cfg.link_template(), facility, date));
    Ok(())
}
