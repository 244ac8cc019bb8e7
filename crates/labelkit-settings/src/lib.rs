//! LabelKit Settings Crate
//!
//! Handles application configuration and its persistence.

pub mod config;
pub mod error;

pub use config::{
    config_dir, default_config_path, Config, DesignerSettings, LibrarySettings, PrintSettings,
};
pub use error::{ConfigError, ConfigResult, SettingsError, SettingsResult};
