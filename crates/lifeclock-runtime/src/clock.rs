//! Sources of "now".
//!
//! The engine never reads the clock itself; every instant it sees comes
//! through one of these.

use chrono::{Local, NaiveDateTime, TimeDelta};

pub trait Clock: Send + Sync {
    /// Current local wall-clock time
    fn now(&self) -> NaiveDateTime;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Always reports the same instant
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

/// Wall clock moved by a constant offset.
///
/// `watch --at` uses this so the display starts at the requested instant and
/// keeps running from there.
#[derive(Debug, Clone, Copy)]
pub struct ShiftedClock {
    offset: TimeDelta,
}

impl ShiftedClock {
    pub fn starting_at(start: NaiveDateTime) -> Self {
        Self {
            offset: start - SystemClock.now(),
        }
    }
}

impl Clock for ShiftedClock {
    fn now(&self) -> NaiveDateTime {
        SystemClock.now() + self.offset
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn millennium() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2000, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_fixed_clock() {
        assert_eq!(FixedClock(millennium()).now(), millennium());
    }

    #[test]
    fn test_shifted_clock_starts_near_target() {
        let clock = ShiftedClock::starting_at(millennium());
        let drift = clock.now() - millennium();
        assert!(drift >= TimeDelta::zero());
        assert!(drift < TimeDelta::seconds(5));
    }
}
