use crate::{Error, Result};
use lifeclock_types::Configuration;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

pub const CONFIG_FILE: &str = "config.toml";
pub const LOG_FILE: &str = "lifeclock.log";
pub const PATH_ENV: &str = "LIFECLOCK_PATH";

/// Resolve the data directory based on priority:
/// 1. Explicit path (with tilde expansion)
/// 2. LIFECLOCK_PATH environment variable (with tilde expansion)
/// 3. Platform config directory
/// 4. ~/.lifeclock
pub fn resolve_data_dir(explicit_path: Option<&str>) -> Result<PathBuf> {
    if let Some(path) = explicit_path {
        return Ok(expand_tilde(path));
    }

    if let Ok(env_path) = std::env::var(PATH_ENV) {
        return Ok(expand_tilde(&env_path));
    }

    if let Some(config_dir) = dirs::config_dir() {
        return Ok(config_dir.join("lifeclock"));
    }

    if let Some(home) = std::env::var_os("HOME") {
        return Ok(PathBuf::from(home).join(".lifeclock"));
    }

    Err(Error::Config(
        "Could not determine data directory: no HOME directory or platform config directory found"
            .to_string(),
    ))
}

/// Expand tilde (~) in paths to the user's home directory
pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = std::env::var_os("HOME")
    {
        return PathBuf::from(home).join(stripped);
    }
    PathBuf::from(path)
}

/// The stored configuration file.
///
/// `try_*` methods report failures; `load`/`save` log and swallow them so a
/// broken file only ever means "unconfigured".
#[derive(Debug, Clone)]
pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    /// Store inside `data_dir`
    pub fn at(data_dir: &Path) -> Self {
        Self {
            path: data_dir.join(CONFIG_FILE),
        }
    }

    /// Store inside the resolved data directory
    pub fn resolve(explicit_path: Option<&str>) -> Result<Self> {
        Ok(Self::at(&resolve_data_dir(explicit_path)?))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn try_load(&self) -> Result<Option<Configuration>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(&self.path)?;
        let config: Configuration = toml::from_str(&content)?;
        Ok(Some(config.normalized()))
    }

    pub fn try_save(&self, config: &Configuration) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(config)?;
        std::fs::write(&self.path, content)?;
        Ok(())
    }

    /// Remove the stored configuration; a missing file is not an error
    pub fn clear(&self) -> Result<bool> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => {
                info!(path = %self.path.display(), "configuration cleared");
                Ok(true)
            }
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(false),
            Err(err) => Err(err.into()),
        }
    }

    pub fn load(&self) -> Option<Configuration> {
        match self.try_load() {
            Ok(Some(config)) => {
                info!(
                    path = %self.path.display(),
                    reference = %config.reference,
                    years = config.duration_years,
                    "configuration loaded"
                );
                Some(config)
            }
            Ok(None) => {
                info!(path = %self.path.display(), "no stored configuration");
                None
            }
            Err(err) => {
                warn!(path = %self.path.display(), error = %err, "ignoring unreadable configuration");
                None
            }
        }
    }

    pub fn save(&self, config: &Configuration) {
        match self.try_save(config) {
            Ok(()) => info!(
                path = %self.path.display(),
                reference = %config.reference,
                years = config.duration_years,
                "configuration saved"
            ),
            Err(err) => warn!(path = %self.path.display(), error = %err, "failed to save configuration"),
        }
    }
}
