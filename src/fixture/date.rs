//! Random deployment dates.

use chrono::{DateTime, Datelike, Timelike, Utc};

use crate::ports::RandomSource;

/// 2012-01-01T00:00:00Z in milliseconds; the earliest generated date.
pub const EARLIEST_MS: i64 = 1_325_376_000_000;

/// Picks an instant uniformly between 2012-01-01 and `now` and formats it.
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
pub fn random_date<R>(rng: &mut R, now: DateTime<Utc>) -> String
where
    R: RandomSource + ?Sized,
{
    let span = (now.timestamp_millis() - EARLIEST_MS).max(0);
    let offset = (rng.next_f64() * span as f64) as i64;
    let at = DateTime::from_timestamp_millis(EARLIEST_MS + offset).unwrap_or(now);
    format_date(at)
}

/// Formats as `yyyy-mm-dd h:m`.
///
/// Month and day are zero-padded; hour and minute are not. The dashboard
/// parses this exact shape.
#[must_use]
pub fn format_date(at: DateTime<Utc>) -> String {
    format!("{}-{:02}-{:02} {}:{}", at.year(), at.month(), at.day(), at.hour(), at.minute())
}
