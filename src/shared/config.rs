//! Startup configuration
//!
//! The catalog endpoint is the one required setting. Retry and HTTP tuning have
//! defaults matching AniList's documented throttling behaviour and can be
//! overridden through the environment (or a `.env` file).

use reqwest::Url;
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;

use crate::modules::catalog::infrastructure::http_client::RetryPolicy;

pub const ENDPOINT_VAR: &str = "ANILIST_URL";
pub const MAX_RETRIES_VAR: &str = "ANIDEX_MAX_RETRIES";
pub const RETRY_DELAY_MS_VAR: &str = "ANIDEX_RETRY_DELAY_MS";
pub const BACKOFF_MULTIPLIER_VAR: &str = "ANIDEX_BACKOFF_MULTIPLIER";
pub const TIMEOUT_SECS_VAR: &str = "ANIDEX_TIMEOUT_SECS";
pub const USER_AGENT_VAR: &str = "ANIDEX_USER_AGENT";

const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("{0} is not defined. Please set it in your environment variables.")]
    MissingEndpoint(&'static str),

    #[error("Invalid endpoint URL '{value}': {reason}")]
    InvalidEndpoint { value: String, reason: String },

    #[error("Invalid value for {key}: '{value}'")]
    InvalidValue { key: &'static str, value: String },
}

/// Everything a [`CatalogClient`](crate::modules::catalog::CatalogClient) needs
/// to reach the upstream service.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogConfig {
    pub endpoint: Url,
    pub retry_policy: RetryPolicy,
    pub timeout: Duration,
    pub user_agent: String,
}

impl CatalogConfig {
    /// Config for `endpoint` with default retry and HTTP settings
    pub fn new(endpoint: Url) -> Self {
        Self {
            endpoint,
            retry_policy: RetryPolicy::default(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: default_user_agent(),
        }
    }

    pub fn with_retry_policy(mut self, retry_policy: RetryPolicy) -> Self {
        self.retry_policy = retry_policy;
        self
    }

    /// Load from the process environment, reading `.env` first if present
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load from an arbitrary key lookup. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let raw_endpoint = get(ENDPOINT_VAR).ok_or(ConfigError::MissingEndpoint(ENDPOINT_VAR))?;
        let endpoint = parse_endpoint(&raw_endpoint)?;

        let defaults = RetryPolicy::default();
        let max_retries = parse_or(get(MAX_RETRIES_VAR), MAX_RETRIES_VAR, defaults.max_retries)?;
        let delay_ms = parse_or(
            get(RETRY_DELAY_MS_VAR),
            RETRY_DELAY_MS_VAR,
            defaults.initial_delay.as_millis() as u64,
        )?;
        let multiplier = parse_or(
            get(BACKOFF_MULTIPLIER_VAR),
            BACKOFF_MULTIPLIER_VAR,
            defaults.backoff_multiplier,
        )?;
        if !(multiplier >= 1.0 && multiplier.is_finite()) {
            return Err(ConfigError::InvalidValue {
                key: BACKOFF_MULTIPLIER_VAR,
                value: multiplier.to_string(),
            });
        }
        let timeout_secs = parse_or(get(TIMEOUT_SECS_VAR), TIMEOUT_SECS_VAR, DEFAULT_TIMEOUT_SECS)?;

        Ok(Self {
            endpoint,
            retry_policy: RetryPolicy::new(
                max_retries,
                Duration::from_millis(delay_ms),
                multiplier,
            ),
            timeout: Duration::from_secs(timeout_secs),
            user_agent: get(USER_AGENT_VAR).unwrap_or_else(default_user_agent),
        })
    }
}

fn default_user_agent() -> String {
    format!("anidex/{}", env!("CARGO_PKG_VERSION"))
}

fn parse_endpoint(value: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(value).map_err(|e| ConfigError::InvalidEndpoint {
        value: value.to_string(),
        reason: e.to_string(),
    })?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(ConfigError::InvalidEndpoint {
            value: value.to_string(),
            reason: format!("unsupported scheme '{}'", other),
        }),
    }
}

fn parse_or<T: FromStr>(
    value: Option<String>,
    key: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    match value {
        Some(raw) => raw
            .parse()
            .map_err(|_| ConfigError::InvalidValue { key, value: raw }),
        None => Ok(default),
    }
}
