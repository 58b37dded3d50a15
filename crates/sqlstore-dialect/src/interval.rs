//! Relative timestamps from human interval strings.
//!
//! Intervals look like `"2 days"`, `"1 month"` or `"3 years"`. The unit is
//! found by substring search in the order day, month, year, so plural and
//! singular forms both match. An interval without a known unit resolves to
//! the current time.
//!
//! Month and year arithmetic works on the calendar fields and then rolls an
//! overflowing day forward, so March 31 minus one month is March 2 (in a
//! leap year) rather than the last day of February.

use std::num::ParseIntError;

use chrono::{DateTime, Datelike, Days, NaiveDate, SecondsFormat, Utc};
use tracing::debug;

use crate::error::{DialectError, Result};

/// Calendar unit of an interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntervalUnit {
    /// Calendar days.
    Day,
    /// Calendar months. Days past the end of the target month roll over
    /// into the next one.
    Month,
    /// Calendar years, computed as twelve months.
    Year,
}

impl IntervalUnit {
    /// Finds the unit named anywhere in `interval`.
    #[must_use]
    pub fn detect(interval: &str) -> Option<Self> {
        if interval.contains("day") {
            Some(Self::Day)
        } else if interval.contains("month") {
            Some(Self::Month)
        } else if interval.contains("year") {
            Some(Self::Year)
        } else {
            None
        }
    }

    /// Moves `now` back by `magnitude` units. Negative magnitudes move forward.
    ///
    /// Returns `None` when the result falls outside the representable range.
    #[must_use]
    pub fn shift_back(self, now: DateTime<Utc>, magnitude: i64) -> Option<DateTime<Utc>> {
        match self {
            Self::Day => {
                let days = Days::new(magnitude.unsigned_abs());
                if magnitude >= 0 {
                    now.checked_sub_days(days)
                } else {
                    now.checked_add_days(days)
                }
            }
            Self::Month => shift_months_back(now, magnitude),
            Self::Year => shift_months_back(now, magnitude.checked_mul(12)?),
        }
    }
}

fn shift_months_back(now: DateTime<Utc>, magnitude: i64) -> Option<DateTime<Utc>> {
    let total = (i64::from(now.year()) * 12 + i64::from(now.month0())).checked_sub(magnitude)?;
    let year = i32::try_from(total.div_euclid(12)).ok()?;
    let month = u32::try_from(total.rem_euclid(12)).ok()? + 1;

    // Day 31 of a 30-day month is the 1st of the next month.
    let date = NaiveDate::from_ymd_opt(year, month, 1)?
        .checked_add_days(Days::new(u64::from(now.day0())))?;
    Some(date.and_time(now.time()).and_utc())
}

/// Returns `now` minus `interval`.
///
/// # Errors
///
/// Returns [`DialectError::MalformedInterval`] if the interval is empty, its
/// leading token is not an integer, or the result overflows the calendar.
pub fn subtract_interval(now: DateTime<Utc>, interval: &str) -> Result<DateTime<Utc>> {
    let magnitude_text = interval
        .split_whitespace()
        .next()
        .ok_or_else(|| DialectError::malformed_interval(interval, "interval is empty"))?;

    let magnitude: i64 = magnitude_text.parse().map_err(|e: ParseIntError| {
        DialectError::malformed_interval(
            interval,
            format!("magnitude '{magnitude_text}' is not an integer: {e}"),
        )
    })?;

    let Some(unit) = IntervalUnit::detect(interval) else {
        debug!(interval, "No interval unit recognized, using current time");
        return Ok(now);
    };

    unit.shift_back(now, magnitude)
        .ok_or_else(|| DialectError::malformed_interval(interval, "result is out of range"))
}

/// Formats `now` minus `interval` as RFC 3339 text.
///
/// # Errors
///
/// See [`subtract_interval`].
pub fn relative_timestamp_from(now: DateTime<Utc>, interval: &str) -> Result<String> {
    subtract_interval(now, interval).map(|ts| format_timestamp(&ts))
}

/// Formats the current time minus `interval` as RFC 3339 text.
///
/// # Errors
///
/// See [`subtract_interval`].
pub fn relative_timestamp(interval: &str) -> Result<String> {
    relative_timestamp_from(Utc::now(), interval)
}

/// Formats a timestamp the way [`relative_timestamp`] does: second
/// precision, UTC, `Z` suffix.
#[must_use]
pub fn format_timestamp(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Secs, true)
}
