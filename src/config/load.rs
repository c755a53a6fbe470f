use std::path::{Path, PathBuf};

use crate::app_dirs;

use super::CONFIG_FILE_NAME;
use super::errors::ConfigError;
use super::save::save_to_path;
use super::types::AppConfig;

/// Resolve the configuration file path, ensuring the parent directory exists.
pub fn config_path() -> Result<PathBuf, ConfigError> {
    Ok(app_dirs::app_root_dir()?.join(CONFIG_FILE_NAME))
}

/// Load configuration from disk, returning defaults if missing.
///
/// On first launch the defaults are written back so users have a file to
/// edit; a failed write is logged and does not block startup.
pub fn load_or_default() -> Result<AppConfig, ConfigError> {
    let path = config_path()?;
    if path.exists() {
        return load_from_path(&path);
    }
    let config = AppConfig::default();
    match save_to_path(&config, &path) {
        Ok(()) => tracing::info!(path = %path.display(), "Wrote default config"),
        Err(err) => tracing::warn!("Could not write default config: {err}"),
    }
    Ok(config)
}

/// Parse, normalize and validate a config file.
pub fn load_from_path(path: &Path) -> Result<AppConfig, ConfigError> {
    let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let config: AppConfig = toml::from_str(&text).map_err(|source| ConfigError::ParseToml {
        path: path.to_path_buf(),
        source,
    })?;
    let config = config.normalized();
    config.validate()?;
    Ok(config)
}
