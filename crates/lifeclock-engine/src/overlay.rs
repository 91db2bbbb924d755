//! Setup panel text and its hit regions.

use lifeclock_types::{ButtonName, ButtonRect, CellRect, EditableField, FieldRect};
use serde::Serialize;

use crate::draft::DraftState;
use crate::grid::{HEIGHT, WIDTH};

/// Outer panel width, borders included
pub const PANEL_WIDTH: usize = 60;

/// Outer panel height, borders included
pub const PANEL_HEIGHT: usize = 10;

const TITLE: &str = "S  E  T  U  P";
const DATE_LABEL: &str = " Birth Date (YYYY/MM/DD): ";
const DURATION_LABEL: &str = " Life Expectancy (Years): ";
const ADJUST_BUTTONS: &str = "  [ ▲ ] [ ▼ ]";
const MOVE_HINT: &str = "[Arrows] Move/Adjust";
const CONFIRM_HINT: &str = "[Enter] Confirm";
const CANCEL_HINT: &str = "[E]sc Cancel";
const HINT_GAP: usize = 2;

/// Panel-relative rows
const DATE_ROW: usize = 4;
const DURATION_ROW: usize = 6;
const HINT_ROW: usize = 8;

/// Offsets of `[ ▲ ]` and `[ ▼ ]` inside `ADJUST_BUTTONS`, relative to the text end
const ADJUST_UP_OFFSET: usize = 3;
const ADJUST_DOWN_OFFSET: usize = 9;
const ADJUST_BUTTON_WIDTH: u16 = 5;

/// Top-left grid cell of the centered panel
pub fn panel_origin() -> (usize, usize) {
    (
        WIDTH.saturating_sub(PANEL_WIDTH) / 2,
        HEIGHT.saturating_sub(PANEL_HEIGHT) / 2,
    )
}

/// Every interactive region of the open panel, in grid coordinates
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OverlayRegions {
    pub panel: CellRect,
    pub fields: Vec<FieldRect>,
    pub confirm: ButtonRect,
    pub cancel: ButtonRect,
    pub adjust_up: Option<ButtonRect>,
    pub adjust_down: Option<ButtonRect>,
}

impl OverlayRegions {
    pub fn field_at(&self, col: u16, row: u16) -> Option<EditableField> {
        self.fields
            .iter()
            .find(|rect| rect.contains(col, row))
            .map(|rect| rect.name)
    }

    /// Button under the cell, checked in draw order
    pub fn button_at(&self, col: u16, row: u16) -> Option<ButtonName> {
        [
            Some(self.confirm),
            Some(self.cancel),
            self.adjust_up,
            self.adjust_down,
        ]
        .into_iter()
        .flatten()
        .find(|rect| rect.contains(col, row))
        .map(|rect| rect.name)
    }
}

/// Rendered panel rows plus the regions that go with them
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverlayContent {
    pub lines: Vec<String>,
    pub origin: (usize, usize),
    pub regions: OverlayRegions,
}

fn border(left: char, fill: char, right: char) -> String {
    let mut line = String::with_capacity(PANEL_WIDTH * 3);
    line.push(left);
    line.extend(std::iter::repeat_n(fill, PANEL_WIDTH - 2));
    line.push(right);
    line
}

fn content_line(text: &str) -> String {
    format!("│{:<width$.width$}│", text, width = PANEL_WIDTH - 2)
}

fn centered_padding(text: &str) -> usize {
    (PANEL_WIDTH - 2).saturating_sub(text.chars().count()) / 2
}

fn centered_line(text: &str) -> String {
    let inner = PANEL_WIDTH - 2;
    let left = centered_padding(text);
    let right = inner.saturating_sub(text.chars().count() + left);
    format!("│{}{}{}│", " ".repeat(left), text, " ".repeat(right))
}

fn bracketed(text: String, focused: bool) -> String {
    if focused {
        format!("[{}]", text)
    } else {
        text
    }
}

fn cells(text: &str) -> usize {
    text.chars().count()
}

fn rect_u16(value: usize) -> u16 {
    u16::try_from(value).unwrap_or(u16::MAX)
}

/// Build the panel for `draft`, placed with its top-left corner at `origin`
pub fn overlay_content(draft: &DraftState, origin: (usize, usize)) -> OverlayContent {
    let (ox, oy) = origin;
    let active = draft.active_field;

    let year = bracketed(format!("{:04}", draft.year), active == EditableField::Year);
    let month = bracketed(format!("{:02}", draft.month), active == EditableField::Month);
    let day = bracketed(format!("{:02}", draft.day), active == EditableField::Day);
    let duration = if active == EditableField::Duration {
        format!("[{}]", draft.duration_years)
    } else {
        format!(" {} ", draft.duration_years)
    };

    // Text starts one cell in, after the left border
    let year_x = cells(DATE_LABEL) + 1;
    let month_x = year_x + cells(&year) + 1;
    let day_x = month_x + cells(&month) + 1;
    let duration_x = cells(DURATION_LABEL) + 1;

    let field = |name, x: usize, row: usize, text: &str| {
        FieldRect::new(
            name,
            rect_u16(ox + x),
            rect_u16(oy + row),
            rect_u16(cells(text)),
            1,
        )
    };
    let fields = vec![
        field(EditableField::Year, year_x, DATE_ROW, &year),
        field(EditableField::Month, month_x, DATE_ROW, &month),
        field(EditableField::Day, day_x, DATE_ROW, &day),
        field(EditableField::Duration, duration_x, DURATION_ROW, &duration),
    ];

    let mut date_text = format!("{}{}/{}/{}", DATE_LABEL, year, month, day);
    let mut duration_text = format!("{}{}", DURATION_LABEL, duration);

    let (buttons_x, buttons_row) = if active.is_date_part() {
        let at = cells(&date_text);
        date_text.push_str(ADJUST_BUTTONS);
        (at, DATE_ROW)
    } else {
        let at = cells(&duration_text);
        duration_text.push_str(ADJUST_BUTTONS);
        (at, DURATION_ROW)
    };
    let adjust = |name, offset: usize| {
        ButtonRect::new(
            name,
            rect_u16(ox + buttons_x + offset),
            rect_u16(oy + buttons_row),
            ADJUST_BUTTON_WIDTH,
            1,
        )
    };

    let hints = format!(
        "{MOVE_HINT}{gap}{CONFIRM_HINT}{gap}{CANCEL_HINT}",
        gap = " ".repeat(HINT_GAP)
    );
    let hints_x = ox + 1 + centered_padding(&hints);
    let confirm_x = hints_x + cells(MOVE_HINT) + HINT_GAP;
    let cancel_x = confirm_x + cells(CONFIRM_HINT) + HINT_GAP;

    let lines = vec![
        border('┌', '─', '┐'),
        centered_line(TITLE),
        border('├', '═', '┤'),
        content_line(""),
        content_line(&date_text),
        content_line(""),
        content_line(&duration_text),
        content_line(""),
        centered_line(&hints),
        border('└', '─', '┘'),
    ];

    let regions = OverlayRegions {
        panel: CellRect::new(
            rect_u16(ox),
            rect_u16(oy),
            rect_u16(PANEL_WIDTH),
            rect_u16(PANEL_HEIGHT),
        ),
        fields,
        confirm: ButtonRect::new(
            ButtonName::Confirm,
            rect_u16(confirm_x),
            rect_u16(oy + HINT_ROW),
            rect_u16(cells(CONFIRM_HINT)),
            1,
        ),
        cancel: ButtonRect::new(
            ButtonName::Cancel,
            rect_u16(cancel_x),
            rect_u16(oy + HINT_ROW),
            rect_u16(cells(CANCEL_HINT)),
            1,
        ),
        adjust_up: Some(adjust(ButtonName::AdjustUp, ADJUST_UP_OFFSET)),
        adjust_down: Some(adjust(ButtonName::AdjustDown, ADJUST_DOWN_OFFSET)),
    };

    OverlayContent {
        lines,
        origin,
        regions,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_panel_is_centered() {
        assert_eq!(panel_origin(), (14, 8));
    }

    #[test]
    fn test_lines_have_panel_width() {
        let content = overlay_content(&DraftState::default(), panel_origin());
        assert_eq!(content.lines.len(), PANEL_HEIGHT);
        for line in &content.lines {
            assert_eq!(line.chars().count(), PANEL_WIDTH, "{line}");
        }
    }

    #[test]
    fn test_focused_year_is_bracketed_with_buttons() {
        let content = overlay_content(&DraftState::default(), panel_origin());
        assert_eq!(
            content.lines[4].trim_end_matches(['│', ' ']),
            "│ Birth Date (YYYY/MM/DD): [1990]/01/01  [ ▲ ] [ ▼ ]"
        );
        assert_eq!(
            content.lines[6].trim_end_matches(['│', ' ']),
            "│ Life Expectancy (Years):  80"
        );
    }

    #[test]
    fn test_field_rects_follow_display_widths() {
        let content = overlay_content(&DraftState::default(), panel_origin());
        let fields = &content.regions.fields;
        assert_eq!(fields[0], FieldRect::new(EditableField::Year, 41, 12, 6, 1));
        assert_eq!(fields[1], FieldRect::new(EditableField::Month, 48, 12, 2, 1));
        assert_eq!(fields[2], FieldRect::new(EditableField::Day, 51, 12, 2, 1));
        assert_eq!(fields[3], FieldRect::new(EditableField::Duration, 41, 14, 4, 1));
    }

    #[test]
    fn test_adjust_buttons_follow_focused_row() {
        let draft = DraftState {
            active_field: EditableField::Duration,
            ..DraftState::default()
        };
        let content = overlay_content(&draft, panel_origin());
        let regions = &content.regions;
        // " Life Expectancy (Years): [80]" is 30 cells
        assert_eq!(
            regions.adjust_up,
            Some(ButtonRect::new(ButtonName::AdjustUp, 14 + 30 + 3, 14, 5, 1))
        );
        assert_eq!(
            regions.adjust_down,
            Some(ButtonRect::new(ButtonName::AdjustDown, 14 + 30 + 9, 14, 5, 1))
        );
        assert_eq!(content.lines[6].chars().nth(47 - 14), Some('['));
        assert_eq!(content.lines[6].chars().nth(55 - 14), Some('▼'));
    }

    #[test]
    fn test_confirm_and_cancel_sit_on_hint_row() {
        let content = overlay_content(&DraftState::default(), panel_origin());
        let regions = &content.regions;
        assert_eq!(regions.confirm, ButtonRect::new(ButtonName::Confirm, 40, 16, 15, 1));
        assert_eq!(regions.cancel, ButtonRect::new(ButtonName::Cancel, 57, 16, 12, 1));

        let hint_row: String = content.lines[8].chars().skip(40 - 14).take(15).collect();
        assert_eq!(hint_row, "[Enter] Confirm");
        assert_eq!(regions.button_at(57, 16), Some(ButtonName::Cancel));
        assert_eq!(regions.field_at(48, 12), Some(EditableField::Month));
        assert_eq!(regions.button_at(0, 0), None);
    }
}
