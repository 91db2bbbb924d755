//! Application core: a pure reducer plus a pure render.
//!
//! The terminal bridge owns the timer and the event loop; it feeds
//! [`Action`]s into [`reduce`], performs the returned [`Effect`], and paints
//! whatever [`render`] produces.

use chrono::NaiveDateTime;
use lifeclock_types::{ButtonRect, Configuration, EditableField, Perspective, Step};

use crate::draft::DraftState;
use crate::duration::DerivedData;
use crate::grid::ScreenBuffer;
use crate::overlay::{OverlayRegions, overlay_content, panel_origin};
use crate::screen::{ScreenInput, compose};
use crate::tick::TickState;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    pub configuration: Option<Configuration>,
    pub perspective: Perspective,
    /// Open setup panel; always `Some` while unconfigured
    pub editor: Option<DraftState>,
    pub tick: TickState,
}

impl AppState {
    pub fn new(configuration: Option<Configuration>, now: NaiveDateTime) -> Self {
        let editor = match configuration {
            Some(_) => None,
            None => Some(DraftState::seeded(None)),
        };
        Self {
            configuration,
            perspective: Perspective::default(),
            editor,
            tick: TickState::new(now),
        }
    }

    pub fn is_editing(&self) -> bool {
        self.editor.is_some()
    }

    pub fn is_configured(&self) -> bool {
        self.configuration.is_some()
    }

    pub fn now(&self) -> NaiveDateTime {
        self.tick.now
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Tick(NaiveDateTime),
    TogglePerspective,
    OpenEditor,
    Digit(u8),
    Backspace,
    FocusNext,
    FocusPrevious,
    SetActiveField(EditableField),
    Adjust(Step),
    Confirm,
    Cancel,
}

/// Side effect requested by a transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    Persist(Configuration),
}

/// Apply `action`; editor actions are ignored while the panel is closed
pub fn reduce(state: AppState, action: Action) -> (AppState, Option<Effect>) {
    let mut state = state;

    match action {
        Action::Tick(now) => {
            state.tick = state
                .tick
                .advance(now, state.perspective, state.is_configured());
            (state, None)
        }
        Action::TogglePerspective => {
            if !state.is_editing() {
                state.perspective = state.perspective.toggled();
            }
            (state, None)
        }
        Action::OpenEditor => {
            state.editor = Some(DraftState::seeded(state.configuration.as_ref()));
            (state, None)
        }
        Action::Confirm => match state.editor.take() {
            Some(draft) => {
                let configuration = draft.to_configuration();
                state.configuration = Some(configuration);
                (state, Some(Effect::Persist(configuration)))
            }
            None => (state, None),
        },
        Action::Cancel => {
            if state.editor.is_some() {
                state.editor = if state.is_configured() {
                    None
                } else {
                    Some(DraftState::seeded(None))
                };
            }
            (state, None)
        }
        edit => {
            if let Some(draft) = state.editor.as_mut() {
                apply_edit(draft, edit);
            }
            (state, None)
        }
    }
}

fn apply_edit(draft: &mut DraftState, action: Action) {
    match action {
        Action::Digit(digit) => draft.type_digit(digit),
        Action::Backspace => draft.backspace(),
        Action::FocusNext => draft.focus_next(),
        Action::FocusPrevious => draft.focus_previous(),
        Action::SetActiveField(field) => draft.focus(field),
        Action::Adjust(step) => draft.adjust(step),
        Action::Tick(_)
        | Action::TogglePerspective
        | Action::OpenEditor
        | Action::Confirm
        | Action::Cancel => {}
    }
}

/// One painted frame and the regions that are clickable on it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub grid: ScreenBuffer,
    pub edit: ButtonRect,
    pub switch: ButtonRect,
    pub overlay: Option<OverlayRegions>,
}

pub fn render(state: &AppState) -> Frame {
    let configuration = state.configuration.as_ref();
    let derived = DerivedData::compute(configuration, state.tick.now);
    let overlay = state
        .editor
        .as_ref()
        .map(|draft| overlay_content(draft, panel_origin()));

    let screen = compose(ScreenInput {
        configuration,
        derived: &derived,
        perspective: state.perspective,
        tick: &state.tick,
        overlay: overlay.as_ref(),
    });

    Frame {
        grid: screen.grid,
        edit: screen.edit,
        switch: screen.switch,
        overlay: overlay.map(|content| content.regions),
    }
}
