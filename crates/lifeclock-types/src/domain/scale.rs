use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::Perspective;

/// Number of ticks a sliding-head animation lasts (5 x 100ms)
pub const ANIMATION_FRAMES: u8 = 5;

/// One progress bar on the screen.
///
/// Bars are named after the span they fill: `Minute` counts seconds,
/// `Hour` counts minutes, and so on up to `Life`, which counts years.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Scale {
    Minute,
    Hour,
    Day,
    Month,
    Year,
    Life,
}

impl Scale {
    /// All scales in screen order
    pub const ALL: [Scale; 6] = [
        Scale::Minute,
        Scale::Hour,
        Scale::Day,
        Scale::Month,
        Scale::Year,
        Scale::Life,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Scale::Minute => "MINUTE",
            Scale::Hour => "HOUR",
            Scale::Day => "DAY",
            Scale::Month => "MONTH",
            Scale::Year => "YEAR",
            Scale::Life => "LIFE",
        }
    }

    /// Unit of the value shown in the bar label
    pub fn unit(self) -> &'static str {
        match self {
            Scale::Minute => "SEC",
            Scale::Hour => "MIN",
            Scale::Day => "HRS",
            Scale::Month => "DAY",
            Scale::Year => "MTH",
            Scale::Life => "YRS",
        }
    }

    /// The seconds bar flashes instead of sliding
    pub fn is_countdown(self) -> bool {
        matches!(self, Scale::Minute)
    }

    /// Day-of-month and month-of-year start counting at 1
    pub fn is_one_based(self) -> bool {
        matches!(self, Scale::Month | Scale::Year)
    }
}

impl fmt::Display for Scale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Direction of a sliding-head transition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnimationKind {
    Grow,
    Shrink,
}

impl AnimationKind {
    pub fn for_perspective(perspective: Perspective) -> Self {
        match perspective {
            Perspective::Elapsed => AnimationKind::Grow,
            Perspective::Remaining => AnimationKind::Shrink,
        }
    }

    /// Whether a transition of this kind is drawn under `perspective`
    pub fn matches(self, perspective: Perspective) -> bool {
        self == Self::for_perspective(perspective)
    }
}

/// In-flight animation for one scale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnimationEntry {
    pub kind: AnimationKind,
    pub frame: u8,
    /// Instant of the last tick before the crossing; the head slides from
    /// where it stood then
    pub from: NaiveDateTime,
}

impl AnimationEntry {
    /// A fresh entry at frame 1
    pub fn start(kind: AnimationKind, from: NaiveDateTime) -> Self {
        Self {
            kind,
            frame: 1,
            from,
        }
    }

    /// The entry for the next tick, or `None` once the frame budget is spent
    pub fn advanced(self) -> Option<Self> {
        let frame = self.frame.saturating_add(1);
        (frame <= ANIMATION_FRAMES).then_some(Self { frame, ..self })
    }

    /// Completion of the transition in (0, 1]
    pub fn progress(self) -> f64 {
        f64::from(self.frame.min(ANIMATION_FRAMES)) / f64::from(ANIMATION_FRAMES)
    }
}
