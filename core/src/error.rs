//! Error types for the transport and its configuration.
//!
//! # Design
//! Runtime failures have a single class: anything the HTTP layer raises lands
//! in `TransportError::Http` with the underlying message, unchanged and
//! unretried. Configuration problems are reported separately by `ConfigError`
//! so the binary can tell "bad setup" from "network down".

use std::fmt;
use std::io;

/// Errors returned by `Transport` and `HttpExecutor` implementations.
#[derive(Debug)]
pub enum TransportError {
    /// The HTTP call failed: DNS, refused connection, bad URL or a malformed
    /// response.
    Http(String),

    /// The configuration cannot produce a request target.
    InvalidConfig(String),

    /// The log file could not be set up before the transport started.
    Logging(LoggingError),
}

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransportError::Http(msg) => write!(f, "transport failed: {msg}"),
            TransportError::InvalidConfig(msg) => write!(f, "invalid configuration: {msg}"),
            TransportError::Logging(e) => write!(f, "logging setup failed: {e}"),
        }
    }
}

impl std::error::Error for TransportError {}

impl From<LoggingError> for TransportError {
    fn from(e: LoggingError) -> Self {
        TransportError::Logging(e)
    }
}

impl From<ureq::Error> for TransportError {
    fn from(e: ureq::Error) -> Self {
        TransportError::Http(e.to_string())
    }
}

/// Errors returned while loading a `Config`.
#[derive(Debug)]
pub enum ConfigError {
    Io(io::Error),
    Parse(serde_json::Error),

    /// `host` was present but empty.
    EmptyHost,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "IO error: {e}"),
            ConfigError::Parse(e) => write!(f, "parse error: {e}"),
            ConfigError::EmptyHost => write!(f, "host must not be empty"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(e) => Some(e),
            ConfigError::Parse(e) => Some(e),
            ConfigError::EmptyHost => None,
        }
    }
}

impl From<io::Error> for ConfigError {
    fn from(e: io::Error) -> Self {
        ConfigError::Io(e)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::Parse(e)
    }
}

/// Errors returned by `logging::init`.
#[derive(Debug)]
pub enum LoggingError {
    /// The log file could not be opened for appending.
    Io(io::Error),

    /// Some other global subscriber was installed first.
    AlreadyInstalled(String),
}

impl fmt::Display for LoggingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoggingError::Io(e) => write!(f, "cannot open log file: {e}"),
            LoggingError::AlreadyInstalled(msg) => {
                write!(f, "a global subscriber is already installed: {msg}")
            }
        }
    }
}

impl std::error::Error for LoggingError {}

impl From<io::Error> for LoggingError {
    fn from(e: io::Error) -> Self {
        LoggingError::Io(e)
    }
}
