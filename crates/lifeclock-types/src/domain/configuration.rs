use chrono::{Months, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

/// Shortest target duration the editor will commit
pub const MIN_DURATION_YEARS: u32 = 10;

/// Longest target duration the editor will commit
pub const MAX_DURATION_YEARS: u32 = 999;

/// Confirmed reference point and target duration.
///
/// All calendar arithmetic happens in the local wall-clock frame, so the
/// reference is stored without an offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Configuration {
    pub reference: NaiveDateTime,
    pub duration_years: u32,
}

impl Configuration {
    /// Create a configuration, clamping the duration into the supported range
    pub fn new(reference: NaiveDateTime, duration_years: u32) -> Self {
        Self {
            reference,
            duration_years: duration_years.clamp(MIN_DURATION_YEARS, MAX_DURATION_YEARS),
        }
    }

    /// Create a configuration anchored at midnight of `date`
    pub fn from_date(date: NaiveDate, duration_years: u32) -> Self {
        Self::new(date.and_time(NaiveTime::default()), duration_years)
    }

    /// The end instant: reference plus the duration in calendar years.
    ///
    /// A Feb 29 reference lands on Feb 28 in non-leap end years.
    pub fn end(&self) -> NaiveDateTime {
        self.reference
            .checked_add_months(Months::new(self.duration_years.saturating_mul(12)))
            .unwrap_or(NaiveDateTime::MAX)
    }

    /// Same configuration with the duration re-clamped (used after deserialization)
    pub fn normalized(self) -> Self {
        Self::new(self.reference, self.duration_years)
    }
}
