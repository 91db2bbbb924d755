//! Working copy of the configuration while the setup panel is open.

use chrono::{Datelike, NaiveDate};
use lifeclock_types::{
    Configuration, EditableField, MAX_DURATION_YEARS, MIN_DURATION_YEARS, Step,
};
use serde::Serialize;

use crate::duration::days_in_month;

pub const DEFAULT_YEAR: u32 = 1990;
pub const DEFAULT_MONTH: u32 = 1;
pub const DEFAULT_DAY: u32 = 1;
pub const DEFAULT_DURATION_YEARS: u32 = 80;

const MAX_YEAR: u32 = 9999;
const MAX_MONTH: u32 = 12;

/// Digit-by-digit edit of the reference date and target duration.
///
/// Every operation is total: out-of-range input is reset, clamped or
/// wrapped, never rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DraftState {
    pub year: u32,
    pub month: u32,
    pub day: u32,
    pub duration_years: u32,
    pub active_field: EditableField,
}

impl Default for DraftState {
    fn default() -> Self {
        Self {
            year: DEFAULT_YEAR,
            month: DEFAULT_MONTH,
            day: DEFAULT_DAY,
            duration_years: DEFAULT_DURATION_YEARS,
            active_field: EditableField::Year,
        }
    }
}

impl DraftState {
    /// Seed from the committed configuration, or the defaults when there is none
    pub fn seeded(configuration: Option<&Configuration>) -> Self {
        let Some(config) = configuration else {
            return Self::default();
        };
        let date = config.reference.date();
        Self {
            year: u32::try_from(date.year()).unwrap_or(DEFAULT_YEAR),
            month: date.month(),
            day: date.day(),
            duration_years: config.duration_years,
            active_field: EditableField::Year,
        }
    }

    /// Days in the draft's own month
    pub fn days_in_draft_month(&self) -> u32 {
        days_in_month(self.draft_year(), self.month)
    }

    fn draft_year(&self) -> i32 {
        i32::try_from(self.year).unwrap_or(i32::MAX)
    }

    pub fn value(&self, field: EditableField) -> u32 {
        match field {
            EditableField::Year => self.year,
            EditableField::Month => self.month,
            EditableField::Day => self.day,
            EditableField::Duration => self.duration_years,
        }
    }

    /// Append `digit` to the focused field; overflow restarts from the digit
    pub fn type_digit(&mut self, digit: u8) {
        let digit = u32::from(digit.min(9));
        let candidate = self.value(self.active_field) * 10 + digit;
        match self.active_field {
            EditableField::Year => {
                self.year = if candidate > MAX_YEAR { digit } else { candidate };
            }
            EditableField::Month => {
                self.month = restart_or_keep(candidate, digit, MAX_MONTH);
            }
            EditableField::Day => {
                self.day = restart_or_keep(candidate, digit, self.days_in_draft_month());
            }
            EditableField::Duration => {
                let value = if candidate > MAX_DURATION_YEARS {
                    digit
                } else {
                    candidate
                };
                self.duration_years = value.max(1);
            }
        }
    }

    /// Drop the last digit of the focused field
    pub fn backspace(&mut self) {
        let field = self.active_field;
        self.set(field, self.value(field) / 10);
    }

    /// Single-step adjustment of the focused field
    pub fn adjust(&mut self, step: Step) {
        let up = step == Step::Up;
        match self.active_field {
            EditableField::Year => {
                self.year = if up {
                    (self.year + 1).min(MAX_YEAR)
                } else {
                    self.year.saturating_sub(1)
                };
            }
            EditableField::Month => self.month = wrap(self.month, up, 1, MAX_MONTH),
            EditableField::Day => self.day = wrap(self.day, up, 1, self.days_in_draft_month()),
            EditableField::Duration => {
                self.duration_years =
                    wrap(self.duration_years, up, MIN_DURATION_YEARS, MAX_DURATION_YEARS);
            }
        }
    }

    pub fn focus_next(&mut self) {
        self.active_field = self.active_field.next();
    }

    pub fn focus_previous(&mut self) {
        self.active_field = self.active_field.previous();
    }

    pub fn focus(&mut self, field: EditableField) {
        self.active_field = field;
    }

    fn set(&mut self, field: EditableField, value: u32) {
        match field {
            EditableField::Year => self.year = value,
            EditableField::Month => self.month = value,
            EditableField::Day => self.day = value,
            EditableField::Duration => self.duration_years = value,
        }
    }

    /// The configuration this draft commits to.
    ///
    /// Month and day are clamped into a valid calendar date and the duration
    /// into the supported range.
    pub fn to_configuration(&self) -> Configuration {
        let month = self.month.clamp(1, MAX_MONTH);
        let year = self.draft_year();
        let day = self.day.clamp(1, days_in_month(year, month));
        let date = NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default();
        Configuration::from_date(date, self.duration_years)
    }
}

fn restart_or_keep(candidate: u32, digit: u32, max: u32) -> u32 {
    if candidate > max {
        digit.max(1)
    } else {
        candidate.max(1)
    }
}

fn wrap(value: u32, up: bool, min: u32, max: u32) -> u32 {
    if up {
        if value >= max { min } else { (value + 1).max(min) }
    } else if value <= min {
        max
    } else {
        (value - 1).min(max)
    }
}
