//! Terminal events to engine actions.
//!
//! Keyboard and mouse input is translated here; the reducer never sees a
//! crossterm type.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use lifeclock_engine::{Action, Frame, HEIGHT, WIDTH};
use lifeclock_types::{ButtonName, Step};
use std::time::{Duration, Instant};

/// Delay before a held adjust button starts repeating
pub const HOLD_DELAY: Duration = Duration::from_millis(400);

/// Repeat interval once a held adjust button is repeating
pub const HOLD_INTERVAL: Duration = Duration::from_millis(100);

/// What the event loop should do with one input event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Dispatch(Action),
    /// Adjust once now, then keep adjusting while the button is held
    Hold(Step),
    ToggleTheme,
    Quit,
    Ignore,
}

pub fn key_command(key: KeyEvent, editing: bool) -> Command {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Command::Quit;
    }

    if editing {
        editing_key(key.code)
    } else {
        viewing_key(key.code)
    }
}

fn viewing_key(code: KeyCode) -> Command {
    match code {
        KeyCode::Char('s') | KeyCode::Char('S') | KeyCode::Char(' ') => {
            Command::Dispatch(Action::TogglePerspective)
        }
        KeyCode::Char('e') | KeyCode::Char('E') => Command::Dispatch(Action::OpenEditor),
        KeyCode::Char('t') | KeyCode::Char('T') => Command::ToggleTheme,
        KeyCode::Char('q') | KeyCode::Char('Q') => Command::Quit,
        _ => Command::Ignore,
    }
}

fn editing_key(code: KeyCode) -> Command {
    let action = match code {
        KeyCode::Char(c) if c.is_ascii_digit() => {
            Action::Digit(c.to_digit(10).and_then(|d| u8::try_from(d).ok()).unwrap_or(0))
        }
        KeyCode::Backspace => Action::Backspace,
        KeyCode::Tab | KeyCode::Right => Action::FocusNext,
        KeyCode::BackTab | KeyCode::Left => Action::FocusPrevious,
        KeyCode::Up => Action::Adjust(Step::Up),
        KeyCode::Down => Action::Adjust(Step::Down),
        KeyCode::Enter => Action::Confirm,
        KeyCode::Esc | KeyCode::Char('e') | KeyCode::Char('E') => Action::Cancel,
        _ => return Command::Ignore,
    };
    Command::Dispatch(action)
}

/// Top-left terminal cell of the grid when centered in `area`
pub fn grid_origin(area_width: u16, area_height: u16) -> (u16, u16) {
    let width = u16::try_from(WIDTH).unwrap_or(u16::MAX);
    let height = u16::try_from(HEIGHT).unwrap_or(u16::MAX);
    (
        area_width.saturating_sub(width) / 2,
        area_height.saturating_sub(height) / 2,
    )
}

/// Terminal cell to grid cell; `None` when the click misses the grid
pub fn to_grid(column: u16, row: u16, origin: (u16, u16)) -> Option<(u16, u16)> {
    let col = column.checked_sub(origin.0)?;
    let row = row.checked_sub(origin.1)?;
    (usize::from(col) < WIDTH && usize::from(row) < HEIGHT).then_some((col, row))
}

/// Left-button press at `cell` against the regions of the painted frame
pub fn click_command(frame: &Frame, cell: Option<(u16, u16)>) -> Command {
    match &frame.overlay {
        Some(regions) => {
            let Some((col, row)) = cell else {
                return Command::Dispatch(Action::Cancel);
            };
            if let Some(button) = regions.button_at(col, row) {
                return match button {
                    ButtonName::Confirm => Command::Dispatch(Action::Confirm),
                    ButtonName::AdjustUp => Command::Hold(Step::Up),
                    ButtonName::AdjustDown => Command::Hold(Step::Down),
                    _ => Command::Dispatch(Action::Cancel),
                };
            }
            if let Some(field) = regions.field_at(col, row) {
                return Command::Dispatch(Action::SetActiveField(field));
            }
            if regions.panel.contains(col, row) {
                Command::Ignore
            } else {
                Command::Dispatch(Action::Cancel)
            }
        }
        None => {
            let Some((col, row)) = cell else {
                return Command::Ignore;
            };
            if frame.edit.contains(col, row) {
                Command::Dispatch(Action::OpenEditor)
            } else if frame.switch.contains(col, row) {
                Command::Dispatch(Action::TogglePerspective)
            } else {
                Command::Ignore
            }
        }
    }
}

/// Press-and-hold repeat for the adjust buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HoldRepeat {
    pub step: Step,
    next_fire: Instant,
}

impl HoldRepeat {
    pub fn press(step: Step, now: Instant) -> Self {
        Self {
            step,
            next_fire: now + HOLD_DELAY,
        }
    }

    /// Number of repeats that have come due by `now`
    pub fn due(&mut self, now: Instant) -> u32 {
        let mut fired = 0;
        while now >= self.next_fire {
            fired += 1;
            self.next_fire += HOLD_INTERVAL;
        }
        fired
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use lifeclock_engine::snapshot;
    use lifeclock_types::{Configuration, EditableField, Perspective};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn frame(editing: bool) -> Frame {
        let config = Configuration::from_date(NaiveDate::from_ymd_opt(2000, 1, 1).unwrap(), 80);
        let now = NaiveDate::from_ymd_opt(2000, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 30)
            .unwrap();
        snapshot(Some(config), Perspective::Elapsed, editing, now)
    }

    #[test]
    fn test_viewing_keys() {
        assert_eq!(
            key_command(key(KeyCode::Char(' ')), false),
            Command::Dispatch(Action::TogglePerspective)
        );
        assert_eq!(
            key_command(key(KeyCode::Char('e')), false),
            Command::Dispatch(Action::OpenEditor)
        );
        assert_eq!(key_command(key(KeyCode::Char('t')), false), Command::ToggleTheme);
        assert_eq!(key_command(key(KeyCode::Char('q')), false), Command::Quit);
        assert_eq!(key_command(key(KeyCode::Char('7')), false), Command::Ignore);
    }

    #[test]
    fn test_editing_keys() {
        assert_eq!(
            key_command(key(KeyCode::Char('7')), true),
            Command::Dispatch(Action::Digit(7))
        );
        assert_eq!(
            key_command(key(KeyCode::BackTab), true),
            Command::Dispatch(Action::FocusPrevious)
        );
        assert_eq!(
            key_command(key(KeyCode::Down), true),
            Command::Dispatch(Action::Adjust(Step::Down))
        );
        assert_eq!(
            key_command(key(KeyCode::Char('e')), true),
            Command::Dispatch(Action::Cancel)
        );
        assert_eq!(key_command(key(KeyCode::Char('q')), true), Command::Ignore);
        assert_eq!(
            key_command(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL), true),
            Command::Quit
        );
    }

    #[test]
    fn test_grid_is_centered() {
        assert_eq!(grid_origin(89, 27), (0, 0));
        assert_eq!(grid_origin(101, 37), (6, 5));
        assert_eq!(grid_origin(40, 10), (0, 0));
        assert_eq!(to_grid(8, 30, (6, 5)), Some((2, 25)));
        assert_eq!(to_grid(5, 30, (6, 5)), None);
        assert_eq!(to_grid(95, 30, (6, 5)), None);
    }

    #[test]
    fn test_footer_clicks_while_viewing() {
        let frame = frame(false);
        assert_eq!(
            click_command(&frame, Some((3, 25))),
            Command::Dispatch(Action::OpenEditor)
        );
        assert_eq!(
            click_command(&frame, Some((12, 25))),
            Command::Dispatch(Action::TogglePerspective)
        );
        assert_eq!(click_command(&frame, Some((40, 10))), Command::Ignore);
        assert_eq!(click_command(&frame, None), Command::Ignore);
    }

    #[test]
    fn test_panel_clicks_while_editing() {
        let frame = frame(true);
        assert_eq!(
            click_command(&frame, Some((48, 12))),
            Command::Dispatch(Action::SetActiveField(EditableField::Month))
        );
        assert_eq!(
            click_command(&frame, Some((40, 16))),
            Command::Dispatch(Action::Confirm)
        );
        assert_eq!(
            click_command(&frame, Some((57, 16))),
            Command::Dispatch(Action::Cancel)
        );
        // Inside the panel but on nothing
        assert_eq!(click_command(&frame, Some((16, 10))), Command::Ignore);
        // Outside the panel, footer buttons included
        assert_eq!(
            click_command(&frame, Some((3, 25))),
            Command::Dispatch(Action::Cancel)
        );
        assert_eq!(click_command(&frame, None), Command::Dispatch(Action::Cancel));
    }

    #[test]
    fn test_adjust_buttons_hold() {
        let frame = frame(true);
        let regions = frame.overlay.clone().unwrap();
        let up = regions.adjust_up.unwrap().area;
        let down = regions.adjust_down.unwrap().area;
        assert_eq!(click_command(&frame, Some((up.x, up.y))), Command::Hold(Step::Up));
        assert_eq!(
            click_command(&frame, Some((down.x + 4, down.y))),
            Command::Hold(Step::Down)
        );
    }

    #[test]
    fn test_hold_repeat_timing() {
        let start = Instant::now();
        let mut hold = HoldRepeat::press(Step::Up, start);
        assert_eq!(hold.due(start + Duration::from_millis(399)), 0);
        assert_eq!(hold.due(start + Duration::from_millis(400)), 1);
        assert_eq!(hold.due(start + Duration::from_millis(450)), 0);
        assert_eq!(hold.due(start + Duration::from_millis(720)), 3);
    }
}
