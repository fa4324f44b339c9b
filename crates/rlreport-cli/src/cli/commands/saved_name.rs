//! `rlreport saved-name` – print the local file name of a facility's report.

use anyhow::Result;
use rlreport_core::facility::saved_file_name;

pub fn run_saved_name(facility: &str) -> Result<()> {
    println!("{}", saved_file_name(facility)?);
    Ok(())
}
