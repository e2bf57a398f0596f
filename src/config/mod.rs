//! Persistent application settings stored as TOML in the app directory.
//!
//! Only settings live here. Form inputs and predictions are never written to
//! disk; `[defaults]` only seeds the form at launch.

use crate::app_dirs;

mod defaults;
mod errors;
mod load;
mod save;
mod types;

#[cfg(test)]
mod tests;

/// Default filename used to store the app configuration.
pub const CONFIG_FILE_NAME: &str = "config.toml";

pub use errors::ConfigError;
pub use load::{config_path, load_or_default, load_settings_from};
pub use save::{save, save_to_path};
pub use types::{AppSettings, EstimatorSettings, InputDefaults, MAX_DELAY_MS, StaleResults};

fn map_app_dir_error(error: app_dirs::AppDirError) -> ConfigError {
    match error {
        app_dirs::AppDirError::NoBaseDir => ConfigError::NoConfigDir,
        app_dirs::AppDirError::CreateDir { path, source } => {
            ConfigError::CreateDir { path, source }
        }
    }
}
