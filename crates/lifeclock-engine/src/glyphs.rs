//! Static 5-row block glyphs for the digit clock.

use chrono::{NaiveTime, Timelike};

/// Rows per glyph
pub const GLYPH_ROWS: usize = 5;

type Glyph = [&'static str; GLYPH_ROWS];

const ZERO: Glyph = ["███", "█ █", "█ █", "█ █", "███"];
const ONE: Glyph = [" █ ", "██ ", " █ ", " █ ", "███"];
const TWO: Glyph = ["███", "  █", "███", "█  ", "███"];
const THREE: Glyph = ["███", "  █", " ██", "  █", "███"];
const FOUR: Glyph = ["█ █", "█ █", "███", "  █", "  █"];
const FIVE: Glyph = ["███", "█  ", "███", "  █", "███"];
const SIX: Glyph = ["███", "█  ", "███", "█ █", "███"];
const SEVEN: Glyph = ["███", "  █", "  █", "  █", "  █"];
const EIGHT: Glyph = ["███", "█ █", "███", "█ █", "███"];
const NINE: Glyph = ["███", "█ █", "███", "  █", "███"];
const COLON: Glyph = ["   ", " █ ", "   ", " █ ", "   "];
const BLANK: Glyph = ["   ", "   ", "   ", "   ", "   "];

/// Glyph for `ch`, if the table has one
pub fn glyph(ch: char) -> Option<&'static Glyph> {
    match ch {
        '0' => Some(&ZERO),
        '1' => Some(&ONE),
        '2' => Some(&TWO),
        '3' => Some(&THREE),
        '4' => Some(&FOUR),
        '5' => Some(&FIVE),
        '6' => Some(&SIX),
        '7' => Some(&SEVEN),
        '8' => Some(&EIGHT),
        '9' => Some(&NINE),
        ':' => Some(&COLON),
        ' ' => Some(&BLANK),
        _ => None,
    }
}

/// `HH:MM:SS` as five text rows; the colons blink off on odd seconds.
///
/// Each glyph is followed by one space, so every row is 32 cells wide.
pub fn clock_lines(time: NaiveTime) -> [String; GLYPH_ROWS] {
    let text = time.format("%H:%M:%S").to_string();
    let blink_off = time.second() % 2 != 0;
    let mut lines: [String; GLYPH_ROWS] = Default::default();

    for ch in text.chars() {
        let shown = if ch == ':' && blink_off { ' ' } else { ch };
        let Some(rows) = glyph(shown) else {
            continue;
        };
        for (line, row) in lines.iter_mut().zip(rows.iter()) {
            line.push_str(row);
            line.push(' ');
        }
    }
    lines
}
