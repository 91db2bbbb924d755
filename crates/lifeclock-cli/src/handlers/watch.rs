use crate::presentation::{Theme, TuiRenderer};
use crate::types::ThemeArg;
use anyhow::Result;
use chrono::NaiveDateTime;
use lifeclock_runtime::{Clock, ConfigStore, ShiftedClock, SystemClock};
use std::sync::Arc;

pub fn handle(store: &ConfigStore, at: Option<NaiveDateTime>, theme: ThemeArg) -> Result<()> {
    let clock: Arc<dyn Clock> = match at {
        Some(start) => Arc::new(ShiftedClock::starting_at(start)),
        None => Arc::new(SystemClock),
    };

    TuiRenderer::new(store.clone(), clock)
        .with_theme(Theme::from(theme))
        .run()
}
