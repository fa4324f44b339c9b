//! Supported facilities and the names derived from them.
//!
//! A facility parametrizes both the remote report file name (link suffix) and
//! the local file name the report is saved under.

use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("facility {0:?} is not supported")]
pub struct InvalidFacility(pub String);

/// One of the two operational sites publishing a daily RL report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Facility {
    Vancouver,
    Toronto,
}

impl Facility {
    pub const ALL: [Facility; 2] = [Facility::Vancouver, Facility::Toronto];

    /// Canonical name, as accepted by [`Facility::from_canonical`].
    pub fn name(self) -> &'static str {
        match self {
            Facility::Vancouver => "Vancouver",
            Facility::Toronto => "Toronto",
        }
    }

    /// Display name used in the remote report file name.
    ///
    /// `RL Inventory All Fields_13072021_Vancouver, BC (RL).csv`
    pub fn remote_name(self) -> &'static str {
        match self {
            Facility::Vancouver => "Vancouver, BC (RL)",
            Facility::Toronto => "Toronto, ON",
        }
    }

    /// URL-escaped tail of the report link, following the date.
    pub fn link_suffix(self) -> &'static str {
        match self {
            Facility::Vancouver => "_Vancouver%2C%20BC%20(RL).csv",
            Facility::Toronto => "_Toronto%2C%20ON.csv",
        }
    }

    /// Local file name the report is saved under (`Vancouver.csv`).
    pub fn saved_file_name(self) -> String {
        format!("{}.csv", self.name())
    }

    /// Exact, case-sensitive match against the canonical names.
    pub fn from_canonical(s: &str) -> Result<Self, InvalidFacility> {
        Facility::ALL
            .into_iter()
            .find(|f| f.name() == s)
            .ok_or_else(|| InvalidFacility(s.to_string()))
    }

    /// Trims and title-cases `s` before matching (`" vancouver "` → `Vancouver`).
    pub fn from_loose(s: &str) -> Result<Self, InvalidFacility> {
        Facility::from_canonical(&title_case(s.trim())).map_err(|_| InvalidFacility(s.to_string()))
    }
}

impl fmt::Display for Facility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Facility {
    type Err = InvalidFacility;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Facility::from_canonical(s)
    }
}

/// Canonical local file name for a loosely written facility name.
///
/// Shared by the downloading side and whatever later consumes the saved report,
/// so both agree on the path without depending on each other.
pub fn saved_file_name(facility: &str) -> Result<String, InvalidFacility> {
    Facility::from_loose(facility).map(Facility::saved_file_name)
}

fn title_case(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
