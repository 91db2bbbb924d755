//! Per-tick step: boundary-crossing detection and bounded animation state.

use std::collections::BTreeMap;
use std::time::Duration;

use chrono::{Datelike, NaiveDateTime, Timelike};
use lifeclock_types::{AnimationEntry, AnimationKind, Perspective, Scale};

/// Fixed tick period
pub const TICK_PERIOD: Duration = Duration::from_millis(100);

/// Immutable snapshot produced by one scheduler step
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TickState {
    pub now: NaiveDateTime,
    pub animations: BTreeMap<Scale, AnimationEntry>,
    /// True for exactly one tick after the second changed
    pub flash: bool,
}

impl TickState {
    pub fn new(now: NaiveDateTime) -> Self {
        Self {
            now,
            animations: BTreeMap::new(),
            flash: false,
        }
    }

    /// Next state for a freshly captured `now`.
    ///
    /// In-flight entries advance one frame first (dropping expired ones), then
    /// every crossed boundary starts a fresh entry, overwriting any entry
    /// already running for that scale. New entries remember the previous
    /// tick's instant so the head slides from where it was last drawn.
    pub fn advance(&self, now: NaiveDateTime, perspective: Perspective, configured: bool) -> Self {
        let mut animations: BTreeMap<Scale, AnimationEntry> = self
            .animations
            .iter()
            .filter_map(|(scale, entry)| entry.advanced().map(|next| (*scale, next)))
            .collect();

        let kind = AnimationKind::for_perspective(perspective);
        for scale in crossed_scales(self.now, now) {
            if scale == Scale::Life && !configured {
                continue;
            }
            animations.insert(scale, AnimationEntry::start(kind, self.now));
        }

        Self {
            now,
            animations,
            flash: self.now.second() != now.second(),
        }
    }

    pub fn animation(&self, scale: Scale) -> Option<AnimationEntry> {
        self.animations.get(&scale).copied()
    }
}

/// Scales whose integer unit changed between two instants.
///
/// A minute change animates the HOUR bar, an hour change the DAY bar, and
/// so on up to a year change animating LIFE.
pub fn crossed_scales(previous: NaiveDateTime, now: NaiveDateTime) -> Vec<Scale> {
    let mut crossed = Vec::new();
    if previous.minute() != now.minute() {
        crossed.push(Scale::Hour);
    }
    if previous.hour() != now.hour() {
        crossed.push(Scale::Day);
    }
    if previous.day() != now.day() {
        crossed.push(Scale::Month);
    }
    if previous.month() != now.month() {
        crossed.push(Scale::Year);
    }
    if previous.year() != now.year() {
        crossed.push(Scale::Life);
    }
    crossed
}
