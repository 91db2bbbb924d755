use super::args::{Cli, Commands, ConfigCommand};
use super::handlers;
use crate::logging::{self, LogSink};
use crate::types::{OutputFormat, PerspectiveArg, ThemeArg};
use anyhow::Result;
use is_terminal::IsTerminal;
use lifeclock_runtime::{ConfigStore, LOG_FILE, resolve_data_dir};
use tracing::info;

pub fn run(cli: Cli) -> Result<()> {
    let data_dir = resolve_data_dir(cli.data_dir.as_deref())?;
    let store = ConfigStore::at(&data_dir);

    // Bare `lifeclock` watches on a terminal and renders once when piped
    let command = cli.command.unwrap_or_else(|| {
        if std::io::stdout().is_terminal() {
            Commands::Watch {
                at: None,
                theme: ThemeArg::default(),
            }
        } else {
            Commands::Render {
                at: None,
                perspective: PerspectiveArg::default(),
                edit: false,
                format: OutputFormat::Plain,
                birth: None,
                years: None,
            }
        }
    });

    match command {
        Commands::Watch { at, theme } => {
            if !std::io::stdout().is_terminal() {
                anyhow::bail!("watch needs an interactive terminal; use `lifeclock render` instead");
            }
            logging::init(cli.log_level, LogSink::File(&data_dir.join(LOG_FILE)))?;
            info!(data_dir = %data_dir.display(), "starting lifeclock");
            handlers::watch::handle(&store, at, theme)
        }

        Commands::Render {
            at,
            perspective,
            edit,
            format,
            birth,
            years,
        } => {
            logging::init(cli.log_level, LogSink::Stderr)?;
            handlers::render::handle(
                &store,
                handlers::render::RenderRequest {
                    at,
                    perspective: perspective.into(),
                    edit,
                    format,
                    birth,
                    years,
                },
            )
        }

        Commands::Config { command } => {
            logging::init(cli.log_level, LogSink::Stderr)?;
            match command {
                ConfigCommand::Show { format } => handlers::config::show(&store, format),
                ConfigCommand::Set { birth, years } => handlers::config::set(&store, birth, years),
                ConfigCommand::Clear => handlers::config::clear(&store),
            }
        }
    }
}
