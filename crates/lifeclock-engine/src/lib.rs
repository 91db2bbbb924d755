// Engine module - pure rendering and animation core
// Turns (configuration, perspective, instant, draft) into a fixed text grid and its hit regions.
// Nothing here performs I/O or reads the clock.

pub mod app;
pub mod bar;
pub mod draft;
pub mod duration;
pub mod glyphs;
pub mod grid;
pub mod overlay;
pub mod screen;
pub mod tick;

pub use app::{Action, AppState, Effect, Frame, reduce, render};
pub use bar::{Slide, render_bar};
pub use draft::DraftState;
pub use duration::{BarSpec, CalendarDuration, DerivedData, Progress, days_in_month};
pub use grid::{HEIGHT, ScreenBuffer, WIDTH};
pub use overlay::{OverlayContent, OverlayRegions};
pub use tick::{TICK_PERIOD, TickState};

use chrono::NaiveDateTime;
use lifeclock_types::{Configuration, Perspective};

// Façade API - stable entry points for the CLI layer

/// Derived quantities for one instant
pub fn derive(configuration: Option<&Configuration>, now: NaiveDateTime) -> DerivedData {
    DerivedData::compute(configuration, now)
}

/// Render a single frame without any animation history
pub fn snapshot(
    configuration: Option<Configuration>,
    perspective: Perspective,
    editing: bool,
    now: NaiveDateTime,
) -> Frame {
    let mut state = AppState::new(configuration, now);
    state.perspective = perspective;
    if editing && !state.is_editing() {
        state.editor = Some(DraftState::seeded(configuration.as_ref()));
    }
    render(&state)
}
