use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

/// Configuration that could not be read or is out of range
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error(transparent)]
    Env(#[from] envy::Error),

    #[error("{0} must be greater than zero")]
    Zero(&'static str),

    #[error("SESSION_IDLE_TIMEOUT_MINUTES is too large: {0}")]
    IdleTimeoutOverflow(u64),
}

/// Deployment environment, selected with the `ENV` variable
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Production,
}

impl Environment {
    pub fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

/// Server settings read from environment variables
#[derive(Clone, Debug, Deserialize)]
pub struct ApiConfig {
    #[serde(default)]
    pub env: Environment,
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    /// Comma separated list of origins allowed by CORS
    #[serde(default = "default_allowed_origins")]
    pub allowed_origins: Vec<String>,
    /// Sessions untouched for this long are discarded
    #[serde(default = "default_session_idle_timeout_minutes")]
    pub session_idle_timeout_minutes: u64,
    /// How often the idle session sweep runs
    #[serde(default = "default_session_sweep_interval_seconds")]
    pub session_sweep_interval_seconds: u64,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_allowed_origins() -> Vec<String> {
    vec!["http://localhost:8081".to_string()]
}

fn default_session_idle_timeout_minutes() -> u64 {
    60
}

fn default_session_sweep_interval_seconds() -> u64 {
    300
}

impl ApiConfig {
    /// Load the configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        envy::from_env::<Self>()?.validated()
    }

    /// Load the configuration from explicit key/value pairs
    pub fn from_vars<I>(vars: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        envy::from_iter::<_, Self>(vars)?.validated()
    }

    fn validated(self) -> Result<Self, ConfigError> {
        if self.session_sweep_interval_seconds == 0 {
            return Err(ConfigError::Zero("SESSION_SWEEP_INTERVAL_SECONDS"));
        }
        if self.session_idle_timeout_minutes == 0 {
            return Err(ConfigError::Zero("SESSION_IDLE_TIMEOUT_MINUTES"));
        }
        if self.session_idle_timeout_minutes.checked_mul(60).is_none() {
            return Err(ConfigError::IdleTimeoutOverflow(
                self.session_idle_timeout_minutes,
            ));
        }

        Ok(self)
    }

    /// `host:port` to listen on
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn session_idle_timeout(&self) -> Duration {
        Duration::from_secs(self.session_idle_timeout_minutes.saturating_mul(60))
    }

    pub fn session_sweep_interval(&self) -> Duration {
        Duration::from_secs(self.session_sweep_interval_seconds)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            env: Environment::default(),
            host: default_host(),
            port: default_port(),
            allowed_origins: default_allowed_origins(),
            session_idle_timeout_minutes: default_session_idle_timeout_minutes(),
            session_sweep_interval_seconds: default_session_sweep_interval_seconds(),
        }
    }
}
