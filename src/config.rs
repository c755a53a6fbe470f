//! Persistent dashboard settings stored as TOML under the app directory.
//!
//! Missing files and missing keys fall back to defaults, so older config
//! files keep loading as new settings are added.

mod defaults;
mod errors;
mod load;
mod save;
mod types;


pub use errors::ConfigError;
pub use load::{config_path, load_from_path, load_or_default};
pub use save::save_to_path;
pub use types::{AppConfig, NetworkSettings, ServiceSettings};

/// Default filename used to store the app configuration.
pub const CONFIG_FILE_NAME: &str = "config.toml";
