//! Calendar-aware derived quantities.
//!
//! Everything here is a pure function of the configuration and `now`.
//! Absence of a configuration is not an error: life-scale values are simply
//! left out and the calendar bars are still computed from `now`.

use chrono::{Datelike, Months, NaiveDate, NaiveDateTime, Timelike};
use lifeclock_types::{Configuration, Scale};
use serde::Serialize;

const SECONDS_PER_DAY: i64 = 86_400;

/// Whether `year` has a Feb 29
pub fn is_leap_year(year: i32) -> bool {
    NaiveDate::from_ymd_opt(year, 2, 29).is_some()
}

/// Length of `month` (1-12) in `year`; out-of-range months count as 31 days
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 31,
    }
}

pub fn days_in_year(year: i32) -> u32 {
    if is_leap_year(year) { 366 } else { 365 }
}

fn add_months(start: NaiveDateTime, months: i64) -> Option<NaiveDateTime> {
    let months = u32::try_from(months).ok()?;
    start.checked_add_months(Months::new(months))
}

/// Calendar breakdown of an interval
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CalendarDuration {
    pub years: u32,
    pub months: u32,
    pub days: u32,
    pub hours: u32,
    pub minutes: u32,
    pub seconds: u32,
}

impl CalendarDuration {
    /// Whole calendar units from `start` to `end`.
    ///
    /// Months are counted first (so month lengths are honored), the
    /// remainder is split into days and clock units. An interval whose end
    /// precedes its start is all zeros.
    pub fn between(start: NaiveDateTime, end: NaiveDateTime) -> Self {
        if end <= start {
            return Self::default();
        }

        let mut months = i64::from(end.year() - start.year()) * 12
            + i64::from(end.month())
            - i64::from(start.month());
        while months > 0 && add_months(start, months).is_none_or(|anchor| anchor > end) {
            months -= 1;
        }
        let months = months.max(0);
        let anchor = add_months(start, months).unwrap_or(start);

        let rest = (end - anchor).num_seconds().max(0);
        let days = rest / SECONDS_PER_DAY;
        let rest = rest % SECONDS_PER_DAY;

        Self {
            years: to_u32(months / 12),
            months: to_u32(months % 12),
            days: to_u32(days),
            hours: to_u32(rest / 3600),
            minutes: to_u32(rest % 3600 / 60),
            seconds: to_u32(rest % 60),
        }
    }

    /// `0y 0m 0d HH:MM:SS.mmm` as shown in the header
    pub fn clock_text(&self, millis: u32) -> String {
        format!(
            "{}y {}m {}d {:02}:{:02}:{:02}.{:03}",
            self.years,
            self.months,
            self.days,
            self.hours,
            self.minutes,
            self.seconds,
            millis.min(999)
        )
    }
}

fn to_u32(value: i64) -> u32 {
    u32::try_from(value).unwrap_or(u32::MAX)
}

/// Elapsed-side progress of a bar, measured in the next-smaller unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Progress {
    pub numerator: u64,
    pub denominator: u64,
}

impl Progress {
    pub fn new(numerator: u64, denominator: u64) -> Self {
        Self {
            numerator,
            denominator,
        }
    }

    /// `n / d` clamped to [0, 1]; zero when the denominator is zero
    pub fn fraction(&self) -> f64 {
        if self.denominator == 0 {
            return 0.0;
        }
        (self.numerator as f64 / self.denominator as f64).clamp(0.0, 1.0)
    }

    /// `(d - n) / d`, the remaining side
    pub fn complement(&self) -> f64 {
        if self.denominator == 0 {
            return 0.0;
        }
        1.0 - self.fraction()
    }
}

/// Input for one progress bar line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BarSpec {
    pub scale: Scale,
    pub value: u32,
    pub total: u32,
    pub progress: Progress,
}

impl BarSpec {
    pub fn label(&self) -> &'static str {
        self.scale.label()
    }

    pub fn unit(&self) -> &'static str {
        self.scale.unit()
    }

    pub fn is_countdown(&self) -> bool {
        self.scale.is_countdown()
    }

    pub fn is_one_based(&self) -> bool {
        self.scale.is_one_based()
    }
}

/// Everything the compositor needs for one instant
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DerivedData {
    pub now: NaiveDateTime,
    pub end: Option<NaiveDateTime>,
    pub elapsed: Option<CalendarDuration>,
    pub remaining: Option<CalendarDuration>,
    pub bars: Vec<BarSpec>,
}

impl DerivedData {
    pub fn compute(configuration: Option<&Configuration>, now: NaiveDateTime) -> Self {
        let mut bars = calendar_bars(now);

        let (end, elapsed, remaining) = match configuration {
            Some(config) => {
                let end = config.end();
                let elapsed = CalendarDuration::between(config.reference, now);
                let remaining = CalendarDuration::between(now, end);
                let total_months = u64::from(config.duration_years) * 12;
                bars.push(BarSpec {
                    scale: Scale::Life,
                    value: elapsed.years,
                    total: config.duration_years,
                    progress: Progress::new(
                        u64::from(elapsed.years) * 12 + u64::from(elapsed.months),
                        total_months,
                    ),
                });
                (Some(end), Some(elapsed), Some(remaining))
            }
            None => (None, None, None),
        };

        Self {
            now,
            end,
            elapsed,
            remaining,
            bars,
        }
    }

    pub fn bar(&self, scale: Scale) -> Option<&BarSpec> {
        self.bars.iter().find(|bar| bar.scale == scale)
    }

    pub fn is_configured(&self) -> bool {
        self.end.is_some()
    }
}

fn calendar_bars(now: NaiveDateTime) -> Vec<BarSpec> {
    let second = now.second();
    let minute = now.minute();
    let hour = now.hour();
    let day = now.day();
    let dim = days_in_month(now.year(), now.month());
    let effective_second = if second == 0 { 60 } else { second };

    vec![
        BarSpec {
            scale: Scale::Minute,
            value: second,
            total: 60,
            progress: Progress::new(u64::from(effective_second - 1), 59),
        },
        BarSpec {
            scale: Scale::Hour,
            value: minute,
            total: 60,
            progress: Progress::new(u64::from(minute * 60 + second), 3600),
        },
        BarSpec {
            scale: Scale::Day,
            value: hour,
            total: 24,
            progress: Progress::new(u64::from(hour * 60 + minute), 1440),
        },
        BarSpec {
            scale: Scale::Month,
            value: day,
            total: dim,
            progress: Progress::new(u64::from((day - 1) * 24 + hour), u64::from(dim * 24)),
        },
        BarSpec {
            scale: Scale::Year,
            value: now.month(),
            total: 12,
            progress: Progress::new(u64::from(now.ordinal0()), u64::from(days_in_year(now.year()))),
        },
    ]
}
