//! Daily report fetcher.
//!
//! Lifecycle: `Unconfigured` → `Configured` (facility set, link derived and
//! cached) → `Downloaded`. The link stays valid after a download, so the same
//! fetcher can download again. One fetcher per download intent; instances
//! share nothing, so concurrent downloads just use separate fetchers.

mod error;
mod transfer;

pub use error::FetchError;

use crate::facility::Facility;
use crate::link::{derive_link, LinkTemplate};
use chrono::{Local, NaiveDate};
use std::path::Path;
use std::time::Duration;

/// Curl deadlines. Both unset by default: the fetcher has no intrinsic timeout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TransportOptions {
    pub connect_timeout: Option<Duration>,
    pub timeout: Option<Duration>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetcherState {
    Unconfigured,
    Configured,
    Downloaded,
}

#[derive(Debug, Clone)]
struct Target {
    facility: Facility,
    link: String,
}

pub struct ReportFetcher {
    token: String,
    template: LinkTemplate,
    transport: TransportOptions,
    reference_date: NaiveDate,
    target: Option<Target>,
    state: FetcherState,
}

impl std::fmt::Debug for ReportFetcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReportFetcher")
            .field("token", &"<redacted>")
            .field("reference_date", &self.reference_date)
            .field("facility", &self.facility())
            .field("state", &self.state)
            .finish()
    }
}

/// The report published today covers yesterday.
pub fn yesterday() -> NaiveDate {
    day_before(Local::now().date_naive())
}

/// Clamped at `NaiveDate::MIN`, the only date without a predecessor.
fn day_before(date: NaiveDate) -> NaiveDate {
    date.pred_opt().unwrap_or(NaiveDate::MIN)
}

impl ReportFetcher {
    /// New fetcher whose reference date is yesterday (local time).
    pub fn new(token: impl Into<String>, template: LinkTemplate, transport: TransportOptions) -> Self {
        Self::with_reference_date(token, template, transport, yesterday())
    }

    /// New fetcher for the report of an explicit date.
    pub fn with_reference_date(
        token: impl Into<String>,
        template: LinkTemplate,
        transport: TransportOptions,
        reference_date: NaiveDate,
    ) -> Self {
        Self {
            token: token.into(),
            template,
            transport,
            reference_date,
            target: None,
            state: FetcherState::Unconfigured,
        }
    }

    /// Sets the facility by its canonical, case-sensitive name and derives the link.
    /// On error the fetcher keeps whatever configuration it had before.
    pub fn set_facility(&mut self, facility: &str) -> Result<&str, FetchError> {
        let facility = Facility::from_canonical(facility)?;
        Ok(self.set_facility_kind(facility))
    }

    /// Typed variant of [`ReportFetcher::set_facility`]; cannot fail.
    pub fn set_facility_kind(&mut self, facility: Facility) -> &str {
        let link = derive_link(&self.template, facility, self.reference_date);
        tracing::debug!(
            %facility,
            remote = facility.remote_name(),
            date = %self.reference_date,
            "report link derived"
        );
        self.state = FetcherState::Configured;
        &self.target.insert(Target { facility, link }).link
    }

    pub fn state(&self) -> FetcherState {
        self.state
    }

    pub fn reference_date(&self) -> NaiveDate {
        self.reference_date
    }

    pub fn facility(&self) -> Option<Facility> {
        self.target.as_ref().map(|t| t.facility)
    }

    /// Cached link, if a facility has been set.
    pub fn link(&self) -> Option<&str> {
        self.target.as_ref().map(|t| t.link.as_str())
    }

    /// Downloads the configured report to `path`, truncating any existing file.
    /// Returns the number of bytes written. Parent directories are not created.
    pub fn download(&mut self, path: &Path) -> Result<u64, FetchError> {
        let target = self.target.as_ref().ok_or(FetchError::NotConfigured)?;
        tracing::debug!(facility = %target.facility, path = %path.display(), "downloading report");
        let n = transfer::get_to_file(&target.link, &self.token, path, &self.transport)?;
        tracing::info!(facility = %target.facility, bytes = n, path = %path.display(), "report saved");
        self.state = FetcherState::Downloaded;
        Ok(n)
    }
}
