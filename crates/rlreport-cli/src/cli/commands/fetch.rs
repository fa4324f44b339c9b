//! `rlreport fetch` – download a facility's report.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use rlreport_core::config::RlConfig;
use rlreport_core::facility::Facility;
use rlreport_core::fetcher::{FetchError, ReportFetcher};
use std::path::PathBuf;

#[derive(Debug)]
pub struct FetchArgs {
    pub facility: String,
    pub token: Option<String>,
    pub out: Option<PathBuf>,
    pub date: Option<NaiveDate>,
}

/// Token from the flag, else from the configured environment variable. Blank is an error.
fn resolve_token(cfg: &RlConfig, flag: Option<String>) -> Result<String> {
    let token = match flag {
        Some(t) => t,
        None => std::env::var(&cfg.token_env)
            .with_context(|| format!("no --token given and {} is not set", cfg.token_env))?,
    };
    if token.trim().is_empty() {
        anyhow::bail!("bearer token is empty");
    }
    Ok(token)
}

fn destination(cfg: &RlConfig, facility: Facility, out: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(p) = out {
        return Ok(p);
    }
    let dir = match &cfg.download_dir {
        Some(d) => d.clone(),
        None => std::env::current_dir()?,
    };
    Ok(dir.join(facility.saved_file_name()))
}

/// Leading line of a failed download's error chain; says whether trying again may help.
fn failure_context(facility: Facility, date: NaiveDate, err: &FetchError) -> String {
    let retry = if err.is_transient() {
        " (transient, retrying may succeed)"
    } else {
        ""
    };
    format!("{} report for {}{}", facility, date, retry)
}

pub fn run_fetch(cfg: &RlConfig, args: FetchArgs) -> Result<()> {
    let token = resolve_token(cfg, args.token)?;
    let mut fetcher = match args.date {
        Some(d) => ReportFetcher::with_reference_date(token, cfg.link_template(), cfg.transport(), d),
        None => ReportFetcher::new(token, cfg.link_template(), cfg.transport()),
    };
    fetcher.set_facility(&args.facility)?;
    let facility = fetcher
        .facility()
        .context("facility missing after configuration")?;

    let path = destination(cfg, facility, args.out)?;
    let date = fetcher.reference_date();
    let n = match fetcher.download(&path) {
        Ok(n) => n,
        Err(e) => {
            let msg = failure_context(facility, date, &e);
            return Err(anyhow::Error::new(e).context(msg));
        }
    };
    println!("{} bytes -> {}", n, path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_flag_wins() {
        let cfg = RlConfig {
            token_env: "RLREPORT_TEST_TOKEN_UNSET".to_string(),
            ..RlConfig::default()
        };
        assert_eq!(resolve_token(&cfg, Some("abc".into())).unwrap(), "abc");
    }

    #[test]
    fn blank_token_rejected() {
        let cfg = RlConfig::default();
        assert!(resolve_token(&cfg, Some("  ".into())).is_err());
    }

    #[test]
    fn missing_env_token_rejected() {
        let cfg = RlConfig {
            token_env: "RLREPORT_TEST_TOKEN_NEVER_SET".to_string(),
            ..RlConfig::default()
        };
        let err = resolve_token(&cfg, None).unwrap_err();
        assert!(err.to_string().contains("RLREPORT_TEST_TOKEN_NEVER_SET"));
    }

    #[test]
    fn failure_context_marks_transient_errors() {
        let date = NaiveDate::from_ymd_opt(2021, 7, 13).unwrap();
        assert_eq!(
            failure_context(Facility::Toronto, date, &FetchError::UnexpectedStatus(404)),
            "Toronto report for 2021-07-13"
        );
        let transport = FetchError::Transport(curl::Error::new(7));
        assert!(failure_context(Facility::Toronto, date, &transport).ends_with("(transient, retrying may succeed)"));
    }

    #[test]
    fn destination_defaults_to_saved_name_in_download_dir() {
        let cfg = RlConfig {
            download_dir: Some(PathBuf::from("/srv/reports")),
            ..RlConfig::default()
        };
        assert_eq!(
            destination(&cfg, Facility::Toronto, None).unwrap(),
            PathBuf::from("/srv/reports/Toronto.csv")
        );
        assert_eq!(
            destination(&cfg, Facility::Toronto, Some(PathBuf::from("x.csv"))).unwrap(),
            PathBuf::from("x.csv")
        );
    }
}
