//! Custom assertions over rendered grid rows.
//!
//! Rows are plain strings so the same helpers work on engine output and on
//! the text printed by `lifeclock render`.

use anyhow::{Context, Result};
use serde_json::Value;

/// Grid width every row must have
pub const GRID_WIDTH: usize = 89;

/// Number of rows in a grid
pub const GRID_HEIGHT: usize = 27;

/// Assert that `rows` form a complete 89x27 grid.
pub fn assert_grid_shape<S: AsRef<str>>(rows: &[S]) -> Result<()> {
    if rows.len() != GRID_HEIGHT {
        anyhow::bail!("Expected {} rows, got {}", GRID_HEIGHT, rows.len());
    }
    for (i, row) in rows.iter().enumerate() {
        let width = row.as_ref().chars().count();
        if width != GRID_WIDTH {
            anyhow::bail!("Row {} has width {}, expected {}", i, width, GRID_WIDTH);
        }
    }
    Ok(())
}

/// The 60 cells between the `|` delimiters of a bar row.
pub fn bar_cells(row: &str) -> Result<String> {
    let start = row.find('|').context("Row has no opening bar delimiter")?;
    let rest = &row[start + 1..];
    let end = rest.find('|').context("Row has no closing bar delimiter")?;
    Ok(rest[..end].to_string())
}

/// Percentage printed at the end of a bar row.
pub fn bar_percent(row: &str) -> Result<u32> {
    let end = row.rfind('%').context("Row has no percent sign")?;
    let digits: String = row[..end]
        .chars()
        .rev()
        .take_while(|c| c.is_ascii_digit())
        .collect::<Vec<_>>()
        .into_iter()
        .rev()
        .collect();
    digits
        .parse()
        .with_context(|| format!("Invalid percentage in row: {}", row))
}

/// Assert that every needle appears somewhere in the grid.
pub fn assert_rows_contain<S: AsRef<str>>(rows: &[S], needles: &[&str]) -> Result<()> {
    for needle in needles {
        if !rows.iter().any(|row| row.as_ref().contains(needle)) {
            anyhow::bail!("Expected '{}' somewhere in the grid", needle);
        }
    }
    Ok(())
}

/// Rows from the JSON emitted by `lifeclock render --format json`.
pub fn json_rows(json: &Value) -> Result<Vec<String>> {
    let rows = json["rows"]
        .as_array()
        .context("Expected 'rows' array in JSON")?;
    rows.iter()
        .enumerate()
        .map(|(i, row)| {
            row.as_str()
                .map(String::from)
                .with_context(|| format!("Row {} is not a string", i))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bar_helpers() {
        let row = format!(" HOUR[07/60] MIN |{}| 12% ", "▓".repeat(60));
        assert_eq!(bar_cells(&row).unwrap().chars().count(), 60);
        assert_eq!(bar_percent(&row).unwrap(), 12);
    }

    #[test]
    fn test_grid_shape_rejects_short_rows() {
        let rows = vec![" ".repeat(GRID_WIDTH); GRID_HEIGHT - 1];
        assert!(assert_grid_shape(&rows).is_err());
    }
}
