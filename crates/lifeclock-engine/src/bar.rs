//! One parameterized progress-bar line.
//!
//! Every bar, including the countdown seconds bar, goes through
//! [`render_bar`]. The remaining perspective is the elapsed layout mirrored,
//! so both views share a single cell-filling path.

use lifeclock_types::{AnimationEntry, Perspective};

use crate::duration::BarSpec;

/// Cells between the `|` delimiters
pub const BAR_WIDTH: usize = 60;

/// Width of the right-aligned `LABEL[vv/total] UNIT` block
pub const LABEL_WIDTH: usize = 18;

/// Full line width: label, space, delimited bar, percent field
pub const LINE_WIDTH: usize = LABEL_WIDTH + 1 + BAR_WIDTH + 2 + 6;

const EPSILON: f64 = 1e-9;

pub const FILL: char = '▓';
pub const HEAD: char = '█';
pub const EMPTY: char = '░';
pub const TRACK: char = '=';
const FLASH_HEAD: char = '▓';
const START_MARK: char = '>';
const END_MARK: char = '<';

/// Head cell for a fraction; always in `0..BAR_WIDTH`
pub fn head_index(fraction: f64) -> usize {
    let scaled = fraction.clamp(0.0, 1.0) * (BAR_WIDTH as f64 - EPSILON);
    (scaled.floor() as usize).min(BAR_WIDTH - 1)
}

/// Value shown inside the label brackets
pub fn displayed_value(spec: &BarSpec, perspective: Perspective) -> u32 {
    let value = spec.value;
    let total = spec.total;
    match perspective {
        Perspective::Elapsed if spec.is_countdown() => {
            if value == 0 {
                total
            } else {
                value
            }
        }
        Perspective::Elapsed if spec.is_one_based() => value.saturating_sub(1),
        Perspective::Elapsed => value,
        Perspective::Remaining if spec.is_one_based() => {
            total.saturating_sub(value.saturating_sub(1))
        }
        Perspective::Remaining => total.saturating_sub(value),
    }
}

/// Fraction that positions the head
pub fn geometry_fraction(spec: &BarSpec, perspective: Perspective) -> f64 {
    let fraction = match perspective {
        Perspective::Elapsed => spec.progress.fraction(),
        Perspective::Remaining if spec.is_countdown() => {
            f64::from(spec.value) / f64::from(spec.total.saturating_sub(1).max(1))
        }
        Perspective::Remaining => spec.progress.complement(),
    };
    fraction.clamp(0.0, 1.0)
}

/// Integer percentage in [0, 100]
pub fn percent(spec: &BarSpec, perspective: Perspective) -> u32 {
    let fraction = match perspective {
        Perspective::Elapsed => spec.progress.fraction(),
        Perspective::Remaining if spec.is_countdown() => {
            if spec.total == 0 {
                0.0
            } else {
                f64::from(spec.total.saturating_sub(spec.value)) / f64::from(spec.total)
            }
        }
        Perspective::Remaining => spec.progress.complement(),
    };
    ((fraction.clamp(0.0, 1.0) * 100.0).round() as u32).min(100)
}

/// A bar mid-transition: the running entry plus the bar as it stood on the
/// tick before the crossing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slide {
    pub entry: AnimationEntry,
    pub previous: BarSpec,
}

/// Head position for an in-flight transition.
///
/// The head starts where the previous tick drew it and moves toward the
/// resting head; the last frame lands exactly on it.
fn animated_head(spec: &BarSpec, perspective: Perspective, slide: &Slide) -> usize {
    let from = head_index(geometry_fraction(&slide.previous, perspective)) as f64;
    let to = head_index(geometry_fraction(spec, perspective)) as f64;
    let at = (from + (to - from) * slide.entry.progress()).round();
    (at.max(0.0) as usize).min(BAR_WIDTH - 1)
}

/// Elapsed-orientation cells for a resting bar with its head at `head`
fn filled_cells(head: usize) -> Vec<char> {
    let mut cells = vec![EMPTY; BAR_WIDTH];
    cells[..head].fill(FILL);
    cells[head] = HEAD;
    cells
}

fn track_cells(head: usize, flash: bool) -> Vec<char> {
    let mut cells = vec![TRACK; BAR_WIDTH];
    cells[head] = if flash { FLASH_HEAD } else { HEAD };
    cells
}

/// The 60 cells between the delimiters
pub fn bar_cells(
    spec: &BarSpec,
    perspective: Perspective,
    animation: Option<&Slide>,
    flash: bool,
) -> String {
    let head = match animation {
        Some(slide) if !spec.is_countdown() && slide.entry.kind.matches(perspective) => {
            animated_head(spec, perspective, slide)
        }
        _ => head_index(geometry_fraction(spec, perspective)),
    };

    let mut cells = if spec.is_countdown() {
        track_cells(head, flash)
    } else {
        filled_cells(head)
    };

    if perspective == Perspective::Remaining {
        cells.reverse();
    }

    if spec.is_countdown() {
        match perspective {
            Perspective::Elapsed => cells[0] = START_MARK,
            Perspective::Remaining => cells[BAR_WIDTH - 1] = END_MARK,
        }
    }

    cells.into_iter().collect()
}

/// Full 87-column bar line
pub fn render_bar(
    spec: &BarSpec,
    perspective: Perspective,
    animation: Option<&Slide>,
    flash: bool,
) -> String {
    let label = format!(
        "{}[{:02}/{}] {}",
        spec.label(),
        displayed_value(spec, perspective),
        spec.total,
        spec.unit()
    );
    format!(
        "{:>width$} |{}| {:>3}% ",
        label,
        bar_cells(spec, perspective, animation, flash),
        percent(spec, perspective),
        width = LABEL_WIDTH
    )
}
