//! Configuration management for the number converter
//!
//! Supports loading configuration from:
//! - YAML/TOML files (`config/default.*`, then `config/{env}.*`)
//! - Environment variables (NUMCONV prefix, `__` separator)
//! - Runtime overrides through `Settings` fields

pub mod settings;

pub use settings::{
    load_settings, load_settings_from, ConverterSettings, ObservabilityConfig, RuntimeEnvironment,
    ServerConfig, SessionSettings, Settings,
};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {0}")]
    FileNotFound(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Invalid value for {field}: {message}")]
    InvalidValue { field: String, message: String },
}

impl From<config::ConfigError> for ConfigError {
    fn from(err: config::ConfigError) -> Self {
        ConfigError::ParseError(err.to_string())
    }
}
