use std::path::{Path, PathBuf};

use crate::app_dirs;

use super::save::save_settings_to_path;
use super::{AppSettings, CONFIG_FILE_NAME, ConfigError, map_app_dir_error};

/// Resolve the configuration file path, ensuring the parent directory exists.
pub fn config_path() -> Result<PathBuf, ConfigError> {
    let dir = app_dirs::app_root_dir().map_err(map_app_dir_error)?;
    Ok(dir.join(CONFIG_FILE_NAME))
}

/// Load settings from disk.
///
/// A missing file yields defaults and writes them out so the file can be
/// edited by hand afterwards.
pub fn load_or_default() -> Result<AppSettings, ConfigError> {
    let path = config_path()?;
    if path.exists() {
        let settings = load_settings_from(&path)?;
        tracing::info!("Loaded settings from {}", path.display());
        return Ok(settings);
    }
    let settings = AppSettings::default();
    save_settings_to_path(&settings, &path)?;
    tracing::info!("Wrote default settings to {}", path.display());
    Ok(settings)
}

/// Parse and normalize a settings file. Missing keys take their defaults.
pub fn load_settings_from(path: &Path) -> Result<AppSettings, ConfigError> {
    let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str::<AppSettings>(&text)
        .map(AppSettings::normalized)
        .map_err(|source| ConfigError::ParseToml {
            path: path.to_path_buf(),
            source,
        })
}
