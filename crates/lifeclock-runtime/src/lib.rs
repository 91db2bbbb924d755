// Runtime module - everything around the pure engine that touches the outside world
// Stored configuration, clock sources and the periodic ticker.

pub mod clock;
pub mod config;
pub mod error;
pub mod ticker;

pub use clock::{Clock, FixedClock, ShiftedClock, SystemClock};
pub use config::{CONFIG_FILE, ConfigStore, LOG_FILE, PATH_ENV, expand_tilde, resolve_data_dir};
pub use error::{Error, Result};
pub use ticker::Ticker;
