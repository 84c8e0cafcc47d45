//! Application State
//!
//! Shared state across all handlers.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};

use metrics_exporter_prometheus::PrometheusHandle;
use numconv_config::{load_settings, load_settings_from, Settings};
use numconv_core::{ConversionResult, Converter, ParseFailure};
use numconv_text_processing::{ConversionPipeline, ConverterConfig};
use parking_lot::RwLock;

use crate::metrics::record_conversion;
use crate::session::SessionManager;
use crate::ServerError;

/// Application state
#[derive(Clone)]
pub struct AppState {
    /// Configuration wrapped in RwLock for hot-reload support
    pub config: Arc<RwLock<Settings>>,
    /// Converter built from the current `converter` settings
    converter: Arc<RwLock<Arc<dyn Converter>>>,
    /// Session manager
    pub sessions: Arc<SessionManager>,
    /// Prometheus render handle, when metrics are enabled
    pub metrics: Option<PrometheusHandle>,
    /// Environment name for config reload
    env: Option<String>,
    /// Directory reloaded from; `None` means `config/` when present
    config_dir: Option<PathBuf>,
}

impl AppState {
    /// Create new application state
    pub fn new(config: Settings) -> Self {
        Self::with_env(config, None)
    }

    /// Create new application state with environment name for reload support
    pub fn with_env(config: Settings, env: Option<String>) -> Self {
        let sessions = SessionManager::with_config(
            config.sessions.max_sessions,
            Duration::from_secs(config.sessions.timeout_seconds),
            Duration::from_secs(config.sessions.cleanup_interval_seconds),
        );

        Self {
            converter: Arc::new(RwLock::new(build_converter(&config))),
            config: Arc::new(RwLock::new(config)),
            sessions: Arc::new(sessions),
            metrics: None,
            env,
            config_dir: None,
        }
    }

    /// Reload from `dir` instead of the default `config/` directory
    pub fn with_config_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.config_dir = Some(dir.into());
        self
    }

    pub fn with_metrics(mut self, handle: Option<PrometheusHandle>) -> Self {
        self.metrics = handle;
        self
    }

    /// Reload configuration from files
    ///
    /// Converter settings take effect immediately. Session limits apply only
    /// to a restarted server. On failure the running configuration is kept.
    pub fn reload_config(&self) -> Result<(), ServerError> {
        let loaded = match &self.config_dir {
            Some(dir) => load_settings_from(dir, self.env.as_deref()),
            None => load_settings(self.env.as_deref()),
        };
        let new_config =
            loaded.map_err(|e| ServerError::Internal(format!("Failed to reload config: {}", e)))?;

        *self.converter.write() = build_converter(&new_config);
        *self.config.write() = new_config;

        tracing::info!("Configuration reloaded successfully");
        Ok(())
    }

    /// Get a read guard to the current configuration
    pub fn get_config(&self) -> parking_lot::RwLockReadGuard<'_, Settings> {
        self.config.read()
    }

    /// Current converter
    pub fn converter(&self) -> Arc<dyn Converter> {
        self.converter.read().clone()
    }

    /// Convert one input and record its outcome
    pub fn convert(&self, input: &str) -> Result<ConversionResult, ParseFailure> {
        let converter = self.converter();
        let started = Instant::now();
        let outcome = converter.convert(input);
        record_conversion(outcome_label(&outcome), started.elapsed());
        outcome
    }

    /// Convert a session's stored input and record its outcome
    pub fn convert_session(
        &self,
        session: &crate::session::ConversionSession,
    ) -> Result<ConversionResult, ParseFailure> {
        let converter = self.converter();
        let started = Instant::now();
        let outcome = session.convert(converter.as_ref());
        record_conversion(outcome_label(&outcome), started.elapsed());
        outcome
    }
}

fn outcome_label(outcome: &Result<ConversionResult, ParseFailure>) -> &'static str {
    match outcome {
        Ok(_) => "success",
        Err(e) => e.reason(),
    }
}

fn build_converter(settings: &Settings) -> Arc<dyn Converter> {
    Arc::new(ConversionPipeline::new(ConverterConfig {
        max_value: settings.converter.max_value,
    }))
}
