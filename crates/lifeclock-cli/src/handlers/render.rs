use crate::presentation::FrameViewModel;
use crate::types::OutputFormat;
use anyhow::{Result, bail};
use chrono::{NaiveDate, NaiveDateTime};
use lifeclock_engine::draft::DEFAULT_DURATION_YEARS;
use lifeclock_runtime::{Clock, ConfigStore, SystemClock};
use lifeclock_types::{Configuration, Perspective};
use tracing::debug;

pub struct RenderRequest {
    pub at: Option<NaiveDateTime>,
    pub perspective: Perspective,
    pub edit: bool,
    pub format: OutputFormat,
    pub birth: Option<NaiveDate>,
    pub years: Option<u32>,
}

pub fn handle(store: &ConfigStore, request: RenderRequest) -> Result<()> {
    let configuration = effective_configuration(store.load(), request.birth, request.years)?;
    let now = request.at.unwrap_or_else(|| SystemClock.now());
    debug!(%now, configured = configuration.is_some(), "rendering one frame");

    let frame = lifeclock_engine::snapshot(configuration, request.perspective, request.edit, now);

    match request.format {
        OutputFormat::Plain => println!("{}", frame.grid),
        OutputFormat::Json => {
            let view =
                FrameViewModel::new(frame, now, request.perspective, configuration.is_some());
            println!("{}", serde_json::to_string_pretty(&view)?);
        }
    }
    Ok(())
}

/// Command-line overrides layered over the stored configuration
fn effective_configuration(
    stored: Option<Configuration>,
    birth: Option<NaiveDate>,
    years: Option<u32>,
) -> Result<Option<Configuration>> {
    match (birth, years) {
        (Some(birth), years) => {
            let years = years
                .or(stored.map(|c| c.duration_years))
                .unwrap_or(DEFAULT_DURATION_YEARS);
            Ok(Some(Configuration::from_date(birth, years)))
        }
        (None, Some(years)) => match stored {
            Some(config) => Ok(Some(Configuration::new(config.reference, years))),
            None => bail!("--years needs --birth when no configuration is stored"),
        },
        (None, None) => Ok(stored),
    }
}
