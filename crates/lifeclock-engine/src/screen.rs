//! Full-screen composition.
//!
//! Row layout of the 89x27 grid:
//!
//! ```text
//!  0  top border
//!  1  header: anchor date + live duration readout
//!  2  double rule
//!  4  date line
//!  6-10  digit clock
//! 12  [ TODAY ] divider
//! 14-16  MINUTE / HOUR / DAY bars
//! 18  [ LIFE ] divider
//! 20-22  MONTH / YEAR / LIFE bars
//! 24  divider
//! 25  footer
//! 26  bottom border
//! ```

use chrono::{Datelike, NaiveDateTime, Timelike};
use lifeclock_types::{ButtonName, ButtonRect, CellRect, Configuration, Perspective, Scale};

use crate::bar::{Slide, render_bar};
use crate::duration::DerivedData;
use crate::glyphs::clock_lines;
use crate::grid::{HEIGHT, ScreenBuffer, WIDTH, centered_col, labeled_rule, rule, spread};
use crate::overlay::OverlayContent;
use crate::tick::TickState;

const HEADER_ROW: usize = 1;
const DATE_ROW: usize = 4;
const CLOCK_ROW: usize = 6;
const TODAY_RULE_ROW: usize = 12;
const LIFE_RULE_ROW: usize = 18;
const FOOTER_RULE_ROW: usize = 24;
const FOOTER_ROW: usize = 25;

/// Inner text column and width for header and footer
const TEXT_COL: usize = 2;
const TEXT_WIDTH: usize = WIDTH - 4;

const BAR_COL: usize = 1;
const SHADOW: char = '░';

const CONTROLS: &str = "[E]dit | [S]witch";
const SETUP_ANCHOR: &str = "LIFE CLOCK :: SETUP REQUIRED  ";
const SETUP_HINT: &str = "PRESS [E] TO CONFIGURE";
const AWAITING_SETUP: &str = "LIFE :: AWAITING SETUP";

/// Footer control regions; they never move
pub const EDIT_RECT: ButtonRect = ButtonRect {
    name: ButtonName::Edit,
    area: CellRect {
        x: 2,
        y: 25,
        width: 6,
        height: 1,
    },
};

pub const SWITCH_RECT: ButtonRect = ButtonRect {
    name: ButtonName::Switch,
    area: CellRect {
        x: 11,
        y: 25,
        width: 8,
        height: 1,
    },
};

/// Screen row holding each bar
pub fn bar_row(scale: Scale) -> usize {
    match scale {
        Scale::Minute => 14,
        Scale::Hour => 15,
        Scale::Day => 16,
        Scale::Month => 20,
        Scale::Year => 21,
        Scale::Life => 22,
    }
}

/// Everything the compositor reads
#[derive(Debug, Clone, Copy)]
pub struct ScreenInput<'a> {
    pub configuration: Option<&'a Configuration>,
    pub derived: &'a DerivedData,
    pub perspective: Perspective,
    pub tick: &'a TickState,
    pub overlay: Option<&'a OverlayContent>,
}

/// Composed grid plus the always-present footer regions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Screen {
    pub grid: ScreenBuffer,
    pub edit: ButtonRect,
    pub switch: ButtonRect,
}

pub fn compose(input: ScreenInput<'_>) -> Screen {
    let mut grid = frame();

    draw_header(&mut grid, &input);
    draw_date_and_clock(&mut grid, input.derived.now);
    draw_bars(&mut grid, &input);
    draw_footer(&mut grid, input.perspective);

    if let Some(overlay) = input.overlay {
        stamp_overlay(&mut grid, overlay);
    }

    Screen {
        grid,
        edit: EDIT_RECT,
        switch: SWITCH_RECT,
    }
}

/// Borders and static rules
fn frame() -> ScreenBuffer {
    let mut grid = ScreenBuffer::blank();
    let side = format!("│{}│", " ".repeat(WIDTH - 2));
    for row in 1..HEIGHT - 1 {
        grid.write(row, 0, &side);
    }
    grid.write(0, 0, &rule('┌', '─', '┐'));
    grid.write(2, 0, &rule('├', '═', '┤'));
    grid.write(TODAY_RULE_ROW, 0, &labeled_rule("[ TODAY ]"));
    grid.write(LIFE_RULE_ROW, 0, &labeled_rule("[ LIFE ]"));
    grid.write(FOOTER_RULE_ROW, 0, &rule('├', '─', '┤'));
    grid.write(HEIGHT - 1, 0, &rule('└', '─', '┘'));
    grid
}

fn millis(now: NaiveDateTime) -> u32 {
    (now.nanosecond() / 1_000_000).min(999)
}

fn draw_header(grid: &mut ScreenBuffer, input: &ScreenInput<'_>) {
    let derived = input.derived;
    let line = match (input.configuration, derived.end) {
        (Some(config), Some(end)) => {
            let ms = millis(derived.now);
            let (anchor, metric) = match input.perspective {
                Perspective::Elapsed => (
                    format!("BORN {}", config.reference.format("%Y/%m/%d")),
                    format!(
                        "ELAPSED: {}",
                        derived.elapsed.unwrap_or_default().clock_text(ms)
                    ),
                ),
                Perspective::Remaining => (
                    format!("EOL {}", end.format("%Y/%m/%d")),
                    format!(
                        "REMAINING: {}",
                        derived.remaining.unwrap_or_default().clock_text(999 - ms)
                    ),
                ),
            };
            spread(&format!("LIFE CLOCK :: {}  ", anchor), &metric, TEXT_WIDTH)
        }
        _ => spread(SETUP_ANCHOR, SETUP_HINT, TEXT_WIDTH),
    };
    grid.write(HEADER_ROW, TEXT_COL, &line);
}

fn draw_date_and_clock(grid: &mut ScreenBuffer, now: NaiveDateTime) {
    let date = format!(
        "{} / {:02} / {:02} | {}",
        now.year(),
        now.month(),
        now.day(),
        now.format("%A").to_string().to_uppercase()
    );
    grid.write(DATE_ROW, centered_col(&date), &date);

    let lines = clock_lines(now.time());
    let col = centered_col(&lines[0]);
    for (i, line) in lines.iter().enumerate() {
        grid.write(CLOCK_ROW + i, col, line);
    }
}

fn draw_bars(grid: &mut ScreenBuffer, input: &ScreenInput<'_>) {
    for scale in Scale::ALL {
        let row = bar_row(scale);
        match input.derived.bar(scale) {
            Some(spec) => {
                let flash = scale.is_countdown() && input.tick.flash;
                let slide = slide(input, scale);
                let line = render_bar(spec, input.perspective, slide.as_ref(), flash);
                grid.write(row, BAR_COL, &line);
            }
            None => grid.write(row, centered_col(AWAITING_SETUP), AWAITING_SETUP),
        }
    }
}

/// The running animation for `scale` with the bar it slides away from
fn slide(input: &ScreenInput<'_>, scale: Scale) -> Option<Slide> {
    let entry = input.tick.animation(scale)?;
    let previous = *DerivedData::compute(input.configuration, entry.from).bar(scale)?;
    Some(Slide { entry, previous })
}

fn draw_footer(grid: &mut ScreenBuffer, perspective: Perspective) {
    let readout = format!("> PERSPECTIVE : [ {} ]", perspective.label());
    grid.write(FOOTER_ROW, TEXT_COL, &spread(CONTROLS, &readout, TEXT_WIDTH));
}

/// Shadow first at (+1, +1), panel on top
fn stamp_overlay(grid: &mut ScreenBuffer, overlay: &OverlayContent) {
    let (x, y) = overlay.origin;
    for (i, line) in overlay.lines.iter().enumerate() {
        let shadow: String = line
            .chars()
            .map(|c| if c.is_whitespace() { c } else { SHADOW })
            .collect();
        grid.write(y + i + 1, x + 1, &shadow);
    }
    for (i, line) in overlay.lines.iter().enumerate() {
        grid.write(y + i, x, line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draft::DraftState;
    use crate::overlay::{overlay_content, panel_origin};
    use chrono::NaiveDate;

    fn at(h: u32, m: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2000, 1, 1)
            .unwrap()
            .and_hms_opt(h, m, s)
            .unwrap()
    }

    fn compose_at(
        configuration: Option<&Configuration>,
        now: NaiveDateTime,
        perspective: Perspective,
        overlay: Option<&OverlayContent>,
    ) -> Screen {
        let derived = DerivedData::compute(configuration, now);
        let tick = TickState::new(now);
        compose(ScreenInput {
            configuration,
            derived: &derived,
            perspective,
            tick: &tick,
            overlay,
        })
    }

    fn config() -> Configuration {
        Configuration::from_date(NaiveDate::from_ymd_opt(2000, 1, 1).unwrap(), 80)
    }

    #[test]
    fn test_grid_shape_is_fixed() {
        let config = config();
        let screen = compose_at(Some(&config), at(0, 0, 30), Perspective::Elapsed, None);
        let rows = screen.grid.rows();
        assert_eq!(rows.len(), 27);
        for row in rows {
            assert_eq!(row.chars().count(), 89);
        }
    }

    #[test]
    fn test_header_and_footer() {
        let config = config();
        let screen = compose_at(Some(&config), at(0, 0, 30), Perspective::Elapsed, None);
        let header = screen.grid.row(1).unwrap();
        assert!(header.starts_with("│ LIFE CLOCK :: BORN 2000/01/01  "));
        assert!(header.ends_with("ELAPSED: 0y 0m 0d 00:00:30.000 │"));

        let footer = screen.grid.row(25).unwrap();
        assert!(footer.starts_with("│ [E]dit | [S]witch"));
        assert!(footer.ends_with("> PERSPECTIVE : [ ELAPSED ] │"));
        assert_eq!(screen.edit, EDIT_RECT);
        assert_eq!(screen.switch, SWITCH_RECT);
    }

    #[test]
    fn test_remaining_header_counts_down_millis() {
        let config = config();
        let now = at(0, 0, 30) + chrono::TimeDelta::milliseconds(250);
        let screen = compose_at(Some(&config), now, Perspective::Remaining, None);
        let header = screen.grid.row(1).unwrap();
        assert!(header.contains("LIFE CLOCK :: EOL 2080/01/01"));
        assert!(header.contains("REMAINING: 79y 11m 30d 23:59:29.749"));
    }

    #[test]
    fn test_date_line_is_centered() {
        let screen = compose_at(None, at(12, 0, 0), Perspective::Elapsed, None);
        let row = screen.grid.row(4).unwrap();
        let date = "2000 / 01 / 01 | SATURDAY";
        assert_eq!(row.find(date).map(|byte| row[..byte].chars().count()), Some(32));
    }

    #[test]
    fn test_unconfigured_screen_asks_for_setup() {
        let screen = compose_at(None, at(0, 0, 30), Perspective::Elapsed, None);
        let header = screen.grid.row(1).unwrap();
        assert!(header.contains("LIFE CLOCK :: SETUP REQUIRED"));
        assert!(header.contains("PRESS [E] TO CONFIGURE"));
        assert!(screen.grid.row(22).unwrap().contains(AWAITING_SETUP));
        assert!(screen.grid.row(14).unwrap().contains("MINUTE[30/60] SEC"));
    }

    #[test]
    fn test_overlay_shadow_sits_under_panel() {
        let origin = panel_origin();
        let overlay = overlay_content(&DraftState::default(), origin);
        let screen = compose_at(None, at(0, 0, 30), Perspective::Elapsed, Some(&overlay));
        let (x, y) = origin;
        assert_eq!(screen.grid.cell(y, x), Some('┌'));
        // Bottom-right corner of the shadow peeks out past the panel
        assert_eq!(screen.grid.cell(y + 10, x + 60), Some(SHADOW));
        assert_eq!(screen.grid.cell(y + 10, x + 1), Some(SHADOW));
        assert_eq!(screen.grid.cell(y + 9, x + 59), Some('┘'));
    }
}
