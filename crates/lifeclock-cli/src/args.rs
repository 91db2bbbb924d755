use crate::types::{LogLevel, OutputFormat, PerspectiveArg, ThemeArg};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "lifeclock")]
#[command(about = "Watch elapsed and remaining time as animated text progress bars", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Directory holding config.toml and lifeclock.log
    #[arg(long, global = true)]
    pub data_dir: Option<String>,

    #[arg(long, default_value = "warn", global = true)]
    pub log_level: LogLevel,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Run the interactive clock (default)")]
    Watch {
        #[arg(long, value_parser = parse_instant, help = "Start the clock at this instant instead of now")]
        at: Option<NaiveDateTime>,

        #[arg(long, default_value = "dark")]
        theme: ThemeArg,
    },

    #[command(about = "Print a single frame and exit")]
    Render {
        #[arg(long, value_parser = parse_instant, help = "Instant to render (YYYY-MM-DD[THH:MM:SS[.fff]])")]
        at: Option<NaiveDateTime>,

        #[arg(long, default_value = "elapsed")]
        perspective: PerspectiveArg,

        #[arg(long, help = "Show the setup panel")]
        edit: bool,

        #[arg(long, default_value = "plain")]
        format: OutputFormat,

        #[arg(long, value_parser = parse_date, help = "Birth date override (YYYY-MM-DD)")]
        birth: Option<NaiveDate>,

        #[arg(long, help = "Life expectancy override in years")]
        years: Option<u32>,
    },

    #[command(about = "Manage the stored configuration")]
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    #[command(about = "Print the stored configuration")]
    Show {
        #[arg(long, default_value = "plain")]
        format: OutputFormat,
    },

    #[command(about = "Store a birth date and life expectancy")]
    Set {
        #[arg(long, value_parser = parse_date)]
        birth: NaiveDate,

        #[arg(long, default_value = "80")]
        years: u32,
    },

    #[command(about = "Remove the stored configuration")]
    Clear,
}

pub fn parse_date(text: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .map_err(|e| format!("expected YYYY-MM-DD, got '{}': {}", text, e))
}

/// Accepts a bare date (midnight) or a date-time with `T` or space separator
pub fn parse_instant(text: &str) -> Result<NaiveDateTime, String> {
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(instant) = NaiveDateTime::parse_from_str(text, format) {
            return Ok(instant);
        }
    }
    parse_date(text)
        .map(|date| date.and_time(NaiveTime::default()))
        .map_err(|_| format!("expected YYYY-MM-DD[THH:MM:SS[.fff]], got '{}'", text))
}
