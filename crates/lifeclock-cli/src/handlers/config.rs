use crate::presentation::ConfigViewModel;
use crate::types::OutputFormat;
use anyhow::{Context, Result};
use chrono::NaiveDate;
use lifeclock_runtime::ConfigStore;
use lifeclock_types::{Configuration, MAX_DURATION_YEARS, MIN_DURATION_YEARS};

pub fn show(store: &ConfigStore, format: OutputFormat) -> Result<()> {
    let configuration = store
        .try_load()
        .with_context(|| format!("Failed to read {}", store.path().display()))?;
    let view = ConfigViewModel::new(store.path(), configuration.as_ref());

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&view)?),
        OutputFormat::Plain => match (view.birth, view.years, view.end) {
            (Some(birth), Some(years), Some(end)) => {
                println!("Birth date:      {}", birth.format("%Y-%m-%d"));
                println!("Life expectancy: {} years", years);
                println!("End of life:     {}", end.format("%Y-%m-%d"));
                println!("Config file:     {}", view.path);
            }
            _ => {
                println!("Not configured.");
                println!("Run `lifeclock config set --birth YYYY-MM-DD --years N` or press [E] in the clock.");
                println!("Config file:     {}", view.path);
            }
        },
    }
    Ok(())
}

pub fn set(store: &ConfigStore, birth: NaiveDate, years: u32) -> Result<()> {
    let configuration = Configuration::from_date(birth, years);
    if configuration.duration_years != years {
        eprintln!(
            "Warning: life expectancy must be between {} and {}; using {}",
            MIN_DURATION_YEARS, MAX_DURATION_YEARS, configuration.duration_years
        );
    }

    store
        .try_save(&configuration)
        .with_context(|| format!("Failed to write {}", store.path().display()))?;

    println!(
        "Saved birth date {} and life expectancy {} years to {}",
        birth.format("%Y-%m-%d"),
        configuration.duration_years,
        store.path().display()
    );
    Ok(())
}

pub fn clear(store: &ConfigStore) -> Result<()> {
    if store.clear()? {
        println!("Removed {}", store.path().display());
    } else {
        println!("Nothing to clear; {} does not exist", store.path().display());
    }
    Ok(())
}
