//! One blocking POST of a payload, logged from start to end.
//!
//! # Design
//! `Transport` holds only a validated `Config`. `build_request` and
//! `ResponseSummary::from_response` are pure; `send_with` strings them
//! together around an `HttpExecutor`, which does the actual I/O. There is no
//! retry, timeout or connection reuse: a failing executor fails the call.

use crate::config::Config;
use crate::error::TransportError;
use crate::http::{HttpExecutor, HttpMethod, HttpRequest, UreqExecutor};
use crate::logging;
use crate::types::ResponseSummary;

#[derive(Debug, Clone)]
pub struct Transport {
    config: Config,
}

impl Transport {
    pub fn new(config: Config) -> Result<Self, TransportError> {
        config
            .validate()
            .map_err(|e| TransportError::InvalidConfig(e.to_string()))?;
        Ok(Self { config })
    }

    /// `host`, followed by `:port` only when a non-zero port is configured.
    pub fn target_url(&self) -> String {
        match self.config.effective_port() {
            Some(port) => format!("{}:{port}", self.config.host),
            None => self.config.host.clone(),
        }
    }

    /// A POST to `target_url()` carrying `payload` verbatim, no headers.
    pub fn build_request(&self, payload: impl AsRef<[u8]>) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Post,
            url: self.target_url(),
            headers: Vec::new(),
            body: payload.as_ref().to_vec(),
        }
    }

    /// Send `payload` through `executor` and log the response summary.
    ///
    /// On executor failure the error is returned as-is and no
    /// `End transport` line is written.
    pub fn send_with<E: HttpExecutor + ?Sized>(
        &self,
        executor: &E,
        payload: impl AsRef<[u8]>,
    ) -> Result<ResponseSummary, TransportError> {
        tracing::info!("Start transport");

        let request = self.build_request(payload);
        let response = executor.execute(request)?;
        let summary = ResponseSummary::from_response(&response);

        tracing::info!("End transport: {summary}");
        Ok(summary)
    }

    /// Send `payload` over the network with a fresh `UreqExecutor`.
    pub fn send(&self, payload: impl AsRef<[u8]>) -> Result<ResponseSummary, TransportError> {
        self.send_with(&UreqExecutor::new(), payload)
    }
}

/// Initialise file logging (once per process), then POST `payload` to the
/// target described by `config`.
pub fn send(payload: impl AsRef<[u8]>, config: &Config) -> Result<ResponseSummary, TransportError> {
    logging::init(config.log_file())?;
    Transport::new(config.clone())?.send(payload)
}
