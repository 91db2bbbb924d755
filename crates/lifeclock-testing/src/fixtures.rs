//! Timestamp and configuration builders.

use chrono::{NaiveDate, NaiveDateTime};
use lifeclock_types::Configuration;

/// Parse `YYYY-MM-DDTHH:MM:SS[.fff]` into a wall-clock instant.
///
/// Panics on malformed input; fixtures are static test data.
pub fn at(text: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S%.f")
        .unwrap_or_else(|e| panic!("Invalid fixture timestamp {}: {}", text, e))
}

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day)
        .unwrap_or_else(|| panic!("Invalid fixture date {}-{}-{}", year, month, day))
}

/// Configuration anchored at midnight of the given date
pub fn configuration(year: i32, month: u32, day: u32, duration_years: u32) -> Configuration {
    Configuration::from_date(date(year, month, day), duration_years)
}

/// Reference 2000-01-01, 80 years
pub fn millennium() -> Configuration {
    configuration(2000, 1, 1, 80)
}
