//! Transport configuration and its loading from disk.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::ConfigError;

/// Where log lines go when the configuration does not say otherwise.
pub const DEFAULT_LOG_FILE: &str = "/var/log/sse.log";

/// Where the `sse-send` binary looks for its configuration.
pub const DEFAULT_CONFIG_FILE: &str = "/etc/sse/config.json";

/// The POST target, plus where to write the transport log.
///
/// `port` is optional; `null`, a missing key and `0` all mean "no port
/// suffix".
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Config {
    pub host: String,
    #[serde(default)]
    pub port: Option<u16>,
    #[serde(default)]
    pub log_file: Option<PathBuf>,
}

impl Config {
    pub fn new(host: &str, port: Option<u16>) -> Self {
        Self {
            host: host.to_string(),
            port,
            log_file: None,
        }
    }

    /// Parse and validate a JSON configuration document.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON configuration file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path)?;
        Self::from_json(&raw)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.host.is_empty() {
            return Err(ConfigError::EmptyHost);
        }
        Ok(())
    }

    /// The port to append, if any. Zero counts as absent.
    pub fn effective_port(&self) -> Option<u16> {
        self.port.filter(|&p| p != 0)
    }

    pub fn log_file(&self) -> &Path {
        self.log_file
            .as_deref()
            .unwrap_or_else(|| Path::new(DEFAULT_LOG_FILE))
    }
}
