//! Report link derivation.
//!
//! `/Shared/Operations-RL/Daily RL All Fields Reports/RL Inventory All Fields_13072021_Toronto, ON.csv`
//! is reached through the public API as prefix + `DDMMYYYY` + facility suffix.

use crate::facility::Facility;
use chrono::NaiveDate;

pub const DEFAULT_LINK_PREFIX: &str = "https://cloudblue.egnyte.com/pubapi/v1/fs-content/Shared/Operations-RL/Daily%20RL%20All%20Fields%20Reports/RL%20Inventory%20All%20Fields_";

/// `DDMMYYYY`, as used in the remote file name.
pub const DEFAULT_LINK_DATE_FORMAT: &str = "%d%m%Y";

/// Immutable link configuration. Each fetcher owns its own copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkTemplate {
    pub prefix: String,
    /// chrono `strftime` pattern for the reference date.
    pub date_format: String,
}

impl Default for LinkTemplate {
    fn default() -> Self {
        Self {
            prefix: DEFAULT_LINK_PREFIX.to_string(),
            date_format: DEFAULT_LINK_DATE_FORMAT.to_string(),
        }
    }
}

/// Builds the direct API link of a facility's report for `date`. Pure.
pub fn derive_link(template: &LinkTemplate, facility: Facility, date: NaiveDate) -> String {
    format!(
        "{}{}{}",
        template.prefix,
        date.format(&template.date_format),
        facility.link_suffix()
    )
}
