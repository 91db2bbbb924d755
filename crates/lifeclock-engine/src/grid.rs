use std::fmt;

/// Grid width in character cells
pub const WIDTH: usize = 89;

/// Grid height in rows
pub const HEIGHT: usize = 27;

/// Fixed 89x27 character arena.
///
/// Every row always holds exactly `WIDTH` cells. `write` is the only
/// mutation primitive and clips anything that falls outside the grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenBuffer {
    cells: Vec<Vec<char>>,
}

impl Default for ScreenBuffer {
    fn default() -> Self {
        Self::blank()
    }
}

impl ScreenBuffer {
    pub fn blank() -> Self {
        Self {
            cells: vec![vec![' '; WIDTH]; HEIGHT],
        }
    }

    /// Write `text` starting at (`row`, `col`); overflow is truncated, never wrapped
    pub fn write(&mut self, row: usize, col: usize, text: &str) {
        let Some(line) = self.cells.get_mut(row) else {
            return;
        };
        for (cell, ch) in line.iter_mut().skip(col).zip(text.chars()) {
            *cell = ch;
        }
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<char> {
        self.cells.get(row).and_then(|line| line.get(col)).copied()
    }

    pub fn row(&self, row: usize) -> Option<String> {
        self.cells.get(row).map(|line| line.iter().collect())
    }

    pub fn rows(&self) -> Vec<String> {
        self.cells.iter().map(|line| line.iter().collect()).collect()
    }
}

impl fmt::Display for ScreenBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, line) in self.cells.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for ch in line {
                write!(f, "{}", ch)?;
            }
        }
        Ok(())
    }
}

/// Full-width horizontal rule: `left` + `fill` x (WIDTH - 2) + `right`
pub(crate) fn rule(left: char, fill: char, right: char) -> String {
    let mut line = String::with_capacity(WIDTH * 3);
    line.push(left);
    line.extend(std::iter::repeat_n(fill, WIDTH - 2));
    line.push(right);
    line
}

/// Rule with `label` centered inside it
pub(crate) fn labeled_rule(label: &str) -> String {
    let inner = WIDTH - 2;
    let padding = inner.saturating_sub(label.chars().count());
    let left = padding / 2;
    let right = padding - left;
    format!("├{}{}{}┤", "─".repeat(left), label, "─".repeat(right))
}

/// `left` and `right` joined by enough spaces to span `width` cells
pub(crate) fn spread(left: &str, right: &str, width: usize) -> String {
    let used = left.chars().count() + right.chars().count();
    format!("{}{}{}", left, " ".repeat(width.saturating_sub(used)), right)
}

/// Column at which `text` is centered on the grid
pub(crate) fn centered_col(text: &str) -> usize {
    WIDTH.saturating_sub(text.chars().count()) / 2
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_has_fixed_shape() {
        let grid = ScreenBuffer::blank();
        let rows = grid.rows();
        assert_eq!(rows.len(), HEIGHT);
        assert!(rows.iter().all(|r| r.chars().count() == WIDTH));
    }

    #[test]
    fn test_write_clips_past_right_edge() {
        let mut grid = ScreenBuffer::blank();
        grid.write(0, WIDTH - 3, "abcdef");
        let row = grid.row(0).unwrap();
        assert_eq!(row.chars().count(), WIDTH);
        assert!(row.ends_with("abc"));
    }

    #[test]
    fn test_write_outside_grid_is_ignored() {
        let mut grid = ScreenBuffer::blank();
        grid.write(HEIGHT, 0, "lost");
        grid.write(3, WIDTH + 10, "lost");
        assert_eq!(grid, ScreenBuffer::blank());
    }

    #[test]
    fn test_labeled_rule_is_full_width() {
        let line = labeled_rule("[ TODAY ]");
        assert_eq!(line.chars().count(), WIDTH);
        assert!(line.starts_with("├───"));
        assert!(line.contains("[ TODAY ]"));
    }
}
