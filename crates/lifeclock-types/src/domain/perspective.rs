use serde::{Deserialize, Serialize};
use std::fmt;

/// Viewing mode: time counted since the reference, or left until the end
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Perspective {
    #[default]
    Elapsed,
    Remaining,
}

impl Perspective {
    /// The other perspective
    pub fn toggled(self) -> Self {
        match self {
            Perspective::Elapsed => Perspective::Remaining,
            Perspective::Remaining => Perspective::Elapsed,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Perspective::Elapsed => "ELAPSED",
            Perspective::Remaining => "REMAINING",
        }
    }
}

impl fmt::Display for Perspective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_is_an_involution() {
        for perspective in [Perspective::Elapsed, Perspective::Remaining] {
            assert_ne!(perspective.toggled(), perspective);
            assert_eq!(perspective.toggled().toggled(), perspective);
        }
    }

    #[test]
    fn test_serializes_uppercase() {
        let json = serde_json::to_string(&Perspective::Remaining).unwrap();
        assert_eq!(json, "\"REMAINING\"");
    }
}
