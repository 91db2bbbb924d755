// NOTE: lifeclock Architecture Rationale
//
// Why a pure reducer + pure render (not a widget tree)?
// - Every frame is a function of (configuration, perspective, instant, draft)
// - `render` and the JSON output share one code path, so snapshots cover the TUI too
// - The terminal layer only translates events into actions and paints text
//
// Why a fixed 89x27 grid (not responsive layout)?
// - Bar geometry and hit regions are stable, so mouse hit-testing is a lookup
// - Smaller terminals clip; larger terminals center the grid

mod args;
mod commands;
mod handlers;
mod logging;
pub mod presentation;
pub mod types;

pub use args::{Cli, Commands, ConfigCommand};
pub use commands::run;
