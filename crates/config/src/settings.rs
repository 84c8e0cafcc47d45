//! Main settings module

use config::{Config, Environment, File};
use numconv_core::MAX_SUPPORTED_VALUE;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::ConfigError;

/// Runtime environment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum RuntimeEnvironment {
    /// Development mode - permissive CORS allowed
    #[default]
    Development,
    Staging,
    Production,
}

impl RuntimeEnvironment {
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

/// Main application settings
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Settings {
    #[serde(default)]
    pub environment: RuntimeEnvironment,

    /// HTTP server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Conversion behavior
    #[serde(default)]
    pub converter: ConverterSettings,

    /// Conversion session limits
    #[serde(default)]
    pub sessions: SessionSettings,

    /// Logging and metrics
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

impl Settings {
    /// Validate settings
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_server()?;
        self.validate_converter()?;
        self.validate_sessions()?;
        Ok(())
    }

    fn validate_server(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::InvalidValue {
                field: "server.port".to_string(),
                message: "Port must be non-zero".to_string(),
            });
        }

        if self.server.timeout_seconds == 0 {
            return Err(ConfigError::InvalidValue {
                field: "server.timeout_seconds".to_string(),
                message: "Timeout must be at least 1 second".to_string(),
            });
        }

        if self.environment.is_production() && !self.server.cors_enabled {
            return Err(ConfigError::InvalidValue {
                field: "server.cors_enabled".to_string(),
                message: "CORS cannot be disabled in production".to_string(),
            });
        }

        Ok(())
    }

    fn validate_converter(&self) -> Result<(), ConfigError> {
        let converter = &self.converter;

        if converter.max_value == 0 || converter.max_value > MAX_SUPPORTED_VALUE {
            return Err(ConfigError::InvalidValue {
                field: "converter.max_value".to_string(),
                message: format!(
                    "Must be between 1 and {}, got {}",
                    MAX_SUPPORTED_VALUE, converter.max_value
                ),
            });
        }

        Ok(())
    }

    fn validate_sessions(&self) -> Result<(), ConfigError> {
        if self.sessions.max_sessions == 0 {
            return Err(ConfigError::InvalidValue {
                field: "sessions.max_sessions".to_string(),
                message: "Must allow at least one session".to_string(),
            });
        }

        if self.sessions.cleanup_interval_seconds == 0 {
            return Err(ConfigError::InvalidValue {
                field: "sessions.cleanup_interval_seconds".to_string(),
                message: "Cleanup interval must be at least 1 second".to_string(),
            });
        }

        Ok(())
    }
}

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,

    /// Enable CORS
    #[serde(default = "default_true")]
    pub cors_enabled: bool,

    /// CORS allowed origins
    #[serde(default)]
    pub cors_origins: Vec<String>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}
fn default_port() -> u16 {
    8080
}
fn default_timeout() -> u64 {
    30
}
fn default_true() -> bool {
    true
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            timeout_seconds: default_timeout(),
            cors_enabled: true,
            cors_origins: Vec::new(),
        }
    }
}

/// Conversion behavior
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConverterSettings {
    /// Largest accepted value; cannot exceed `MAX_SUPPORTED_VALUE`
    #[serde(default = "default_max_value")]
    pub max_value: u64,

    /// Strip characters other than digits, commas, periods, whitespace and
    /// ASCII letters from session input text as it is entered
    #[serde(default = "default_true")]
    pub sanitize_input: bool,
}

fn default_max_value() -> u64 {
    MAX_SUPPORTED_VALUE
}

impl Default for ConverterSettings {
    fn default() -> Self {
        Self {
            max_value: default_max_value(),
            sanitize_input: true,
        }
    }
}

/// Conversion session limits
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionSettings {
    #[serde(default = "default_max_sessions")]
    pub max_sessions: usize,

    /// Idle time after which a session expires
    #[serde(default = "default_session_timeout")]
    pub timeout_seconds: u64,

    #[serde(default = "default_cleanup_interval")]
    pub cleanup_interval_seconds: u64,
}

fn default_max_sessions() -> usize {
    1000
}
fn default_session_timeout() -> u64 {
    3600
}
fn default_cleanup_interval() -> u64 {
    300
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            max_sessions: default_max_sessions(),
            timeout_seconds: default_session_timeout(),
            cleanup_interval_seconds: default_cleanup_interval(),
        }
    }
}

/// Observability configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObservabilityConfig {
    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Enable JSON logging
    #[serde(default)]
    pub log_json: bool,

    /// Enable Prometheus metrics
    #[serde(default = "default_true")]
    pub metrics_enabled: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_json: false,
            metrics_enabled: true,
        }
    }
}

/// Load settings from `config/` (if present) and the environment
///
/// Priority: env vars > config/{env}.yaml > config/default.yaml > defaults
pub fn load_settings(env: Option<&str>) -> Result<Settings, ConfigError> {
    let dir = Path::new("config");
    if dir.is_dir() {
        load_settings_from(dir, env)
    } else {
        tracing::debug!("No config directory found, using environment and defaults");
        build_settings(None, env)
    }
}

/// Load settings from an explicit config directory and the environment
pub fn load_settings_from(dir: &Path, env: Option<&str>) -> Result<Settings, ConfigError> {
    if !dir.is_dir() {
        return Err(ConfigError::FileNotFound(dir.display().to_string()));
    }
    build_settings(Some(dir), env)
}

fn build_settings(dir: Option<&Path>, env: Option<&str>) -> Result<Settings, ConfigError> {
    let mut builder = Config::builder();

    if let Some(dir) = dir {
        // Load default config
        builder = builder
            .add_source(File::with_name(&dir.join("default").to_string_lossy()).required(false));

        // Load environment-specific config
        if let Some(env_name) = env {
            builder = builder
                .add_source(File::with_name(&dir.join(env_name).to_string_lossy()).required(false));
        }
    }

    // Load from environment variables
    builder = builder.add_source(
        Environment::with_prefix("NUMCONV")
            .separator("__")
            .try_parsing(true),
    );

    let config = builder.build()?;
    let settings: Settings = config.try_deserialize()?;

    settings.validate()?;

    Ok(settings)
}
