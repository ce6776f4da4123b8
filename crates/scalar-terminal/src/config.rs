//! Client configuration.
//!
//! Everything has a default, so the terminal runs with no config file.
//! A TOML file given with `--config` overrides the defaults and CLI
//! flags override the file:
//!
//! ```toml
//! base_url = "http://127.0.0.1:8001"
//! variant = "leveraged"          # or "scalar"
//! request_timeout_secs = 10
//! log_level = "info"
//! log_dir = "/tmp/scalar-terminal"
//! ```

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Which order form the terminal shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum FormVariant {
    /// Leveraged limit order with cancel.
    #[default]
    Leveraged,
    /// Scalar target trade.
    Scalar,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Backend root, e.g. `http://127.0.0.1:8001`.
    pub base_url: String,
    pub variant: FormVariant,
    /// Per-request timeout; a timeout counts as a transport failure.
    pub request_timeout_secs: u64,
    /// Default filter when `RUST_LOG` is not set.
    pub log_level: String,
    /// Setting this turns file logging on.
    pub log_dir: Option<PathBuf>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:8001".to_string(),
            variant: FormVariant::Leveraged,
            request_timeout_secs: 10,
            log_level: "info".to_string(),
            log_dir: None,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("base_url `{0}` must start with http:// or https://")]
    BaseUrl(String),

    #[error("request_timeout_secs must be greater than zero")]
    Timeout,
}

impl ClientConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let config: ClientConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(ConfigError::BaseUrl(self.base_url.clone()));
        }
        if self.request_timeout_secs == 0 {
            return Err(ConfigError::Timeout);
        }
        Ok(())
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}
