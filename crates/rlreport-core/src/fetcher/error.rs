//! Error type returned by the report fetcher.

use crate::facility::InvalidFacility;
use std::path::PathBuf;

/// Every failure a caller may want to tell apart. None are retried here.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// Facility empty or not one of the known names.
    #[error("invalid facility {0:?}")]
    InvalidFacility(String),
    /// Download attempted before a facility was configured.
    #[error("fetcher is not configured with a facility")]
    NotConfigured,
    /// Token contains a CR or LF and cannot be sent as a header value.
    #[error("bearer token contains a line break")]
    InvalidToken,
    /// Curl reported an error (connection, timeout, TLS, ...). Retryable by the caller.
    #[error("transport error: {0}")]
    Transport(#[from] curl::Error),
    /// Remote answered with something other than 200.
    #[error("unexpected HTTP status {0}")]
    UnexpectedStatus(u32),
    /// Destination file could not be created or written.
    #[error("cannot write {}: {source}", path.display())]
    LocalWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl FetchError {
    /// True for failures where trying again unchanged may succeed.
    pub fn is_transient(&self) -> bool {
        matches!(self, FetchError::Transport(_))
    }
}

impl From<InvalidFacility> for FetchError {
    fn from(e: InvalidFacility) -> Self {
        FetchError::InvalidFacility(e.0)
    }
}
