use serde::{Deserialize, Serialize};
use std::fmt;

use crate::EditableField;

/// Area in grid-cell coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CellRect {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl CellRect {
    pub fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Whether the cell at (`col`, `row`) falls inside this area
    pub fn contains(&self, col: u16, row: u16) -> bool {
        col >= self.x
            && row >= self.y
            && u32::from(col) < u32::from(self.x) + u32::from(self.width)
            && u32::from(row) < u32::from(self.y) + u32::from(self.height)
    }
}

/// Named interactive region over the grid, rebuilt on every render
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HitRect<N> {
    pub name: N,
    #[serde(flatten)]
    pub area: CellRect,
}

impl<N> HitRect<N> {
    pub fn new(name: N, x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            name,
            area: CellRect::new(x, y, width, height),
        }
    }

    pub fn contains(&self, col: u16, row: u16) -> bool {
        self.area.contains(col, row)
    }
}

/// Clickable controls
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ButtonName {
    Confirm,
    Cancel,
    Edit,
    Switch,
    AdjustUp,
    AdjustDown,
}

impl fmt::Display for ButtonName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ButtonName::Confirm => "confirm",
            ButtonName::Cancel => "cancel",
            ButtonName::Edit => "edit",
            ButtonName::Switch => "switch",
            ButtonName::AdjustUp => "adjustUp",
            ButtonName::AdjustDown => "adjustDown",
        };
        write!(f, "{}", name)
    }
}

pub type FieldRect = HitRect<EditableField>;
pub type ButtonRect = HitRect<ButtonName>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_is_half_open() {
        let rect = ButtonRect::new(ButtonName::Edit, 2, 25, 6, 1);
        assert!(rect.contains(2, 25));
        assert!(rect.contains(7, 25));
        assert!(!rect.contains(8, 25));
        assert!(!rect.contains(1, 25));
        assert!(!rect.contains(2, 26));
    }

    #[test]
    fn test_serializes_flat() {
        let rect = FieldRect::new(EditableField::Duration, 41, 14, 4, 1);
        let json = serde_json::to_value(rect).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"name": "duration", "x": 41, "y": 14, "width": 4, "height": 1})
        );
    }
}
