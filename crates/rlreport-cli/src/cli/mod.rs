//! CLI for the RL report toolkit.

mod commands;

use anyhow::Result;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use rlreport_core::config;
use std::path::PathBuf;

use commands::{run_columns, run_fetch, run_last_week, run_link, run_saved_name, FetchArgs};

/// Top-level CLI for the RL report toolkit.
#[derive(Debug, Parser)]
#[command(name = "rlreport")]
#[command(about = "Fetch the daily RL inventory report and related helpers", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Download yesterday's report for a facility.
    Fetch {
        /// Facility name, exactly as published (Vancouver, Toronto).
        facility: String,
        /// Bearer token; falls back to the env var named in config (EGNYTE_TOKEN by default).
        #[arg(long)]
        token: Option<String>,
        /// Destination file. Defaults to <download_dir>/<Facility>.csv.
        #[arg(long, short)]
        out: Option<PathBuf>,
        /// Fetch the report of this date instead of yesterday.
        #[arg(long, value_name = "YYYY-MM-DD")]
        date: Option<NaiveDate>,
    },

    /// Print the report link for a facility without downloading.
    Link {
        /// Facility name, exactly as published.
        facility: String,
        #[arg(long, value_name = "YYYY-MM-DD")]
        date: Option<NaiveDate>,
    },

    /// Print the local file name a facility's report is saved under.
    SavedName {
        /// Facility name; surrounding spaces and case are ignored.
        facility: String,
    },

    /// Print the first (Sunday) and last (Saturday) day of last week.
    LastWeek {
        /// Compute relative to this date instead of today.
        #[arg(long, value_name = "YYYY-MM-DD")]
        today: Option<NaiveDate>,
    },

    /// Print the zero-based column of each title in a CSV report's header.
    Columns {
        /// Path to the CSV report.
        path: PathBuf,
        /// Titles to look up.
        #[arg(required = true)]
        names: Vec<String>,
    },
}

impl Cli {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        match cli.command {
            CliCommand::Fetch {
                facility,
                token,
                out,
                date,
            } => {
                let cfg = config::load_or_init()?;
                tracing::debug!("loaded config: {:?}", cfg);
                run_fetch(
                    &cfg,
                    FetchArgs {
                        facility,
                        token,
                        out,
                        date,
                    },
                )?;
            }
            CliCommand::Link { facility, date } => {
                let cfg = config::load_or_init()?;
                run_link(&cfg, &facility, date)?;
            }
            CliCommand::SavedName { facility } => run_saved_name(&facility)?,
            CliCommand::LastWeek { today } => run_last_week(today),
            CliCommand::Columns { path, names } => run_columns(&path, &names)?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
