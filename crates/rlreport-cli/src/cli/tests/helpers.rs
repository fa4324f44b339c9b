//! Tests for saved-name, last-week, columns.

use super::parse;
use crate::cli::{Cli, CliCommand};
use chrono::NaiveDate;
use clap::Parser;
use std::path::PathBuf;

#[test]
fn cli_parse_saved_name() {
    match parse(&["rlreport", "saved-name", " vancouver "]) {
        CliCommand::SavedName { facility } => assert_eq!(facility, " vancouver "),
        _ => panic!("expected SavedName"),
    }
}

#[test]
fn cli_parse_last_week() {
    match parse(&["rlreport", "last-week"]) {
        CliCommand::LastWeek { today } => assert!(today.is_none()),
        _ => panic!("expected LastWeek"),
    }
    match parse(&["rlreport", "last-week", "--today", "2021-07-14"]) {
        CliCommand::LastWeek { today } => {
            assert_eq!(today, NaiveDate::from_ymd_opt(2021, 7, 14))
        }
        _ => panic!("expected LastWeek"),
    }
}

#[test]
fn cli_parse_columns() {
    match parse(&["rlreport", "columns", "Toronto.csv", "Item", "Status"]) {
        CliCommand::Columns { path, names } => {
            assert_eq!(path, PathBuf::from("Toronto.csv"));
            assert_eq!(names, vec!["Item", "Status"]);
        }
        _ => panic!("expected Columns"),
    }
}

#[test]
fn cli_parse_columns_requires_names() {
    assert!(Cli::try_parse_from(["rlreport", "columns", "Toronto.csv"]).is_err());
}
