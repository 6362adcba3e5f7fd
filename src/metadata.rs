//! Deployment metadata written next to each branch build.

use std::fmt;

use chrono::{DateTime, Local, TimeZone};
use serde::{Deserialize, Serialize};

use crate::ports::Clock;

/// File name written inside the output directory.
pub const BRANCH_METADATA_FILE: &str = "branch.json";

/// Records which branch was deployed and when.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BranchMetadata {
    /// Branch name as passed by CI.
    pub name: String,
    /// Local deployment time, e.g. `6/15/2024, 3:04:05 PM`.
    pub date: String,
}

impl BranchMetadata {
    /// Stamps `name` with the clock's current time in the local timezone.
    #[must_use]
    pub fn stamped(name: impl Into<String>, clock: &dyn Clock) -> Self {
        let now = clock.now().with_timezone(&Local);
        Self { name: name.into(), date: locale_timestamp(&now) }
    }
}

/// Formats as `M/D/YYYY, h:mm:ss AM`.
pub fn locale_timestamp<Tz>(at: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    at.format("%-m/%-d/%Y, %-I:%M:%S %p").to_string()
}
