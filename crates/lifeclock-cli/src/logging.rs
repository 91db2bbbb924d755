use crate::types::LogLevel;
use anyhow::Result;
use is_terminal::IsTerminal;
use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

/// Where log lines go.
///
/// The interactive clock owns the terminal, so it logs to a file; one-shot
/// commands log to stderr.
pub enum LogSink<'a> {
    Stderr,
    File(&'a Path),
}

pub fn init(level: LogLevel, sink: LogSink<'_>) -> Result<()> {
    let builder = tracing_subscriber::fmt()
        .with_max_level(level.as_tracing())
        .with_target(false);

    let installed = match sink {
        LogSink::Stderr => builder
            .with_ansi(std::io::stderr().is_terminal())
            .with_writer(std::io::stderr)
            .try_init(),
        LogSink::File(path) => {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            builder
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
        }
    };

    // A subscriber may already be installed (tests, repeated calls)
    if let Err(e) = installed {
        tracing::debug!(error = %e, "logging already initialized");
    }
    Ok(())
}
