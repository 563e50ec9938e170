//! Environment-driven server configuration.

use std::net::SocketAddr;

use axum::http::StatusCode;
use thiserror::Error;

pub const BIND_ADDR_VAR: &str = "SHOWS_BIND_ADDR";
pub const MISSING_PARAM_STATUS_VAR: &str = "SHOWS_MISSING_PARAM_STATUS";
pub const SEED_VAR: &str = "SHOWS_SEED";
pub const LOG_FORMAT_VAR: &str = "SHOWS_LOG_FORMAT";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var}: {reason}")]
    Invalid { var: &'static str, reason: String },
}

impl ConfigError {
    fn invalid(var: &'static str, reason: impl Into<String>) -> Self {
        Self::Invalid {
            var,
            reason: reason.into(),
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum LogFormat {
    Json,
    Pretty,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub bind_addr: SocketAddr,
    /// Status returned when `POST /shows` lacks a parameter.
    ///
    /// Defaults to 404 for compatibility with existing clients; 400 is the
    /// semantically correct choice.
    pub missing_param_status: StatusCode,
    /// Seed the store with sample shows at startup.
    pub seed: bool,
    pub log_format: LogFormat,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
            missing_param_status: StatusCode::NOT_FOUND,
            seed: true,
            log_format: LogFormat::Json,
        }
    }
}

impl ApiConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through `lookup`; unset variables keep their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(raw) = lookup(BIND_ADDR_VAR) {
            config.bind_addr = raw
                .trim()
                .parse()
                .map_err(|e| ConfigError::invalid(BIND_ADDR_VAR, format!("{e}")))?;
        }

        if let Some(raw) = lookup(MISSING_PARAM_STATUS_VAR) {
            let status = raw
                .trim()
                .parse::<u16>()
                .ok()
                .and_then(|code| StatusCode::from_u16(code).ok())
                .ok_or_else(|| ConfigError::invalid(MISSING_PARAM_STATUS_VAR, "not a status code"))?;
            if !status.is_client_error() {
                return Err(ConfigError::invalid(
                    MISSING_PARAM_STATUS_VAR,
                    "must be a 4xx status",
                ));
            }
            config.missing_param_status = status;
        }

        if let Some(raw) = lookup(SEED_VAR) {
            config.seed = raw
                .trim()
                .parse::<bool>()
                .map_err(|_| ConfigError::invalid(SEED_VAR, "expected true or false"))?;
        }

        if let Some(raw) = lookup(LOG_FORMAT_VAR) {
            config.log_format = match raw.trim().to_lowercase().as_str() {
                "json" => LogFormat::Json,
                "pretty" => LogFormat::Pretty,
                _ => return Err(ConfigError::invalid(LOG_FORMAT_VAR, "expected json or pretty")),
            };
        }

        Ok(config)
    }
}
