//! Configuration for ticket-desk
//!
//! Layered with the `config` crate: built-in defaults, then an optional
//! TOML file, then `TICKET_DESK__*` environment variables.

use crate::error::{Result, TicketDeskError};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;

/// Prefix for environment overrides, e.g. `TICKET_DESK__STORE__LATENCY=none`
pub const ENV_PREFIX: &str = "TICKET_DESK";

const ENV_SEPARATOR: &str = "__";

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub store: StoreConfig,
    pub logging: LoggingConfig,
}

/// How the store delays its responses
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LatencyMode {
    None,
    #[default]
    Simulated,
}

/// Artificial latency applied by the store before each operation resolves
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Latency {
    None,
    Simulated(Duration),
}

impl Latency {
    /// Suspend for the configured delay, if any
    pub async fn apply(self) {
        if let Self::Simulated(delay) = self {
            if !delay.is_zero() {
                tokio::time::sleep(delay).await;
            }
        }
    }
}

/// Store settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    pub latency: LatencyMode,
    pub latency_ms: u64,
    /// Start from the seed dataset rather than an empty store
    pub seed: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            latency: LatencyMode::Simulated,
            latency_ms: 500,
            seed: true,
        }
    }
}

impl StoreConfig {
    #[must_use]
    pub const fn latency(&self) -> Latency {
        match self.latency {
            LatencyMode::None => Latency::None,
            LatencyMode::Simulated => Latency::Simulated(Duration::from_millis(self.latency_ms)),
        }
    }
}

/// Logging settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `EnvFilter` directive, e.g. "info" or "ticket_desk=debug"
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl LoggingConfig {
    /// Install a global fmt subscriber
    ///
    /// Fails if `level` is not a valid filter directive. Does nothing if a
    /// subscriber is already set.
    pub fn init(&self) -> Result<()> {
        let filter = tracing_subscriber::EnvFilter::try_new(&self.level).map_err(|e| {
            TicketDeskError::InvalidInput(format!("invalid log level '{}': {e}", self.level))
        })?;

        if tracing_subscriber::fmt()
            .with_env_filter(filter)
            .try_init()
            .is_err()
        {
            tracing::debug!("tracing subscriber already installed");
        }
        Ok(())
    }
}

impl Config {
    /// Load configuration from an optional file and the process environment
    pub fn load(path: Option<&Path>) -> Result<Self> {
        Self::load_with_env(path, None)
    }

    /// Load configuration, reading environment overrides from `env` instead of
    /// the process environment when given
    pub fn load_with_env(path: Option<&Path>, env: Option<HashMap<String, String>>) -> Result<Self> {
        // Defaults come from the serde(default) impls above
        let mut builder = config::Config::builder();

        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path).required(true));
        }

        builder = builder.add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .separator(ENV_SEPARATOR)
                .try_parsing(true)
                .source(env),
        );

        let config = builder.build()?.try_deserialize()?;
        tracing::debug!(?config, "configuration loaded");
        Ok(config)
    }
}
