//! `rlreport columns` – locate titles in a CSV report's header.

use anyhow::{Context, Result};
use rlreport_core::sheet::{read_csv_header, title_columns};
use std::path::Path;

pub fn run_columns(path: &Path, names: &[String]) -> Result<()> {
    let header = read_csv_header(path).with_context(|| format!("read header of {}", path.display()))?;
    let cols = title_columns(&header, names)?;
    for name in names {
        println!("{}\t{}", name, cols[name]);
    }
    Ok(())
}
