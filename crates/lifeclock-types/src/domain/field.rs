use serde::{Deserialize, Serialize};
use std::fmt;

/// Focusable sub-field of the setup panel
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EditableField {
    #[default]
    Year,
    Month,
    Day,
    Duration,
}

impl EditableField {
    /// Focus cycle order
    pub const ORDER: [EditableField; 4] = [
        EditableField::Year,
        EditableField::Month,
        EditableField::Day,
        EditableField::Duration,
    ];

    fn index(self) -> usize {
        match self {
            EditableField::Year => 0,
            EditableField::Month => 1,
            EditableField::Day => 2,
            EditableField::Duration => 3,
        }
    }

    pub fn next(self) -> Self {
        Self::ORDER[(self.index() + 1) % Self::ORDER.len()]
    }

    pub fn previous(self) -> Self {
        Self::ORDER[(self.index() + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }

    pub fn is_date_part(self) -> bool {
        !matches!(self, EditableField::Duration)
    }

    pub fn name(self) -> &'static str {
        match self {
            EditableField::Year => "year",
            EditableField::Month => "month",
            EditableField::Day => "day",
            EditableField::Duration => "duration",
        }
    }
}

impl fmt::Display for EditableField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Single-step adjustment issued by arrow keys or the panel's adjust buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Step {
    Up,
    Down,
}
