//! Blocking, logged HTTP POST of a payload to a configured host.
//!
//! # Overview
//! `send(payload, &config)` makes exactly one HTTP POST. It writes
//! `Start transport` and `End transport: <summary>` to an append-only log
//! file and returns the six-field `ResponseSummary`. Failures of the HTTP call
//! come back unchanged. There is no retry.
//!
//! # Design
//! - `Transport` is stateless: it holds only a validated `Config`.
//! - Request building and response summarising are pure; the round-trip sits
//!   behind `HttpExecutor`, with `UreqExecutor` as the network implementation.
//! - Logging goes through `tracing`. `logging::init` installs the file
//!   subscriber once per process.

pub mod config;
pub mod error;
pub mod http;
pub mod logging;
pub mod transport;
pub mod types;

pub use config::Config;
pub use error::{ConfigError, LoggingError, TransportError};
pub use http::{HttpExecutor, HttpMethod, HttpRequest, HttpResponse, UreqExecutor};
pub use transport::{send, Transport};
pub use types::ResponseSummary;
