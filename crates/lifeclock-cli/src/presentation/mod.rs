pub mod input;
pub mod theme;
pub mod tui;
pub mod view_models;

pub use theme::Theme;
pub use tui::TuiRenderer;
pub use view_models::{ConfigViewModel, FrameViewModel};
