//! Failures while reading, writing or checking `config.json` / `config.toml`.

use std::io;
use thiserror::Error;

/// Why a config file could not be read or written.
#[derive(Error, Debug)]
pub enum SettingsError {
    /// No platform config directory to place `labelkit/` in.
    #[error("Cannot locate the LabelKit config directory: {0}")]
    ConfigDirectory(String),

    #[error("Cannot read or write the config file: {0}")]
    IoError(#[from] io::Error),

    #[error("Malformed JSON config: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Malformed TOML config: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Cannot write config as TOML: {0}")]
    TomlSerError(#[from] toml::ser::Error),

    /// The file parsed but holds values the designer or printer cannot use.
    #[error("Rejected config: {0}")]
    Config(#[from] ConfigError),
}

/// A config that parsed but cannot be used.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Extension other than `.json` or `.toml`.
    #[error("Config files must end in .json or .toml, got '{0}'")]
    UnsupportedFormat(String),

    /// e.g. a zero history depth or a zoom range with min above max.
    #[error("'{key}' cannot be {value}")]
    ValueOutOfRange { key: String, value: String },
}

impl ConfigError {
    pub(crate) fn out_of_range(key: &str, value: impl ToString) -> Self {
        Self::ValueOutOfRange {
            key: key.to_string(),
            value: value.to_string(),
        }
    }
}

pub type SettingsResult<T> = Result<T, SettingsError>;

pub type ConfigResult<T> = Result<T, ConfigError>;
