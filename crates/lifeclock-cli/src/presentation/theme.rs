use crate::types::ThemeArg;
use ratatui::style::{Color, Style};

/// One of the two fixed palettes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub name: &'static str,
    pub foreground: Color,
    pub background: Color,
    pub accent: Color,
}

impl Theme {
    pub const DARK: Theme = Theme {
        name: "dark",
        foreground: Color::Rgb(0xE0, 0xE0, 0xE0),
        background: Color::Rgb(0x00, 0x00, 0x00),
        accent: Color::Rgb(0xBE, 0x99, 0xFF),
    };

    pub const LIGHT: Theme = Theme {
        name: "light",
        foreground: Color::Rgb(0x00, 0x00, 0x00),
        background: Color::Rgb(0xF5, 0xF5, 0xF5),
        accent: Color::Rgb(0x8A, 0x2B, 0xE2),
    };

    pub fn toggled(self) -> Self {
        if self == Self::DARK { Self::LIGHT } else { Self::DARK }
    }

    pub fn base(&self) -> Style {
        Style::default().fg(self.foreground).bg(self.background)
    }

    /// Bar heads
    pub fn highlight(&self) -> Style {
        Style::default().fg(self.accent).bg(self.background)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::DARK
    }
}

impl From<ThemeArg> for Theme {
    fn from(arg: ThemeArg) -> Self {
        match arg {
            ThemeArg::Dark => Theme::DARK,
            ThemeArg::Light => Theme::LIGHT,
        }
    }
}
