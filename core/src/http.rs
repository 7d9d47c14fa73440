//! HTTP transport types and the executor seam.
//!
//! # Design
//! Requests and responses are plain data. `Transport` builds an `HttpRequest`
//! and summarises an `HttpResponse` without touching the network; an
//! `HttpExecutor` performs the round-trip in between. Production code uses
//! `UreqExecutor`, tests substitute their own executors.

use std::io;

use crate::error::TransportError;

/// HTTP method for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Post,
}

/// An HTTP request described as plain data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

/// Status line and headers of an HTTP response. The body is never
/// summarised, so it is not kept.
#[derive(Debug, Clone, Default)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
}

/// Case-insensitive header lookup. Returns the first match.
pub(crate) fn find_header<'a>(headers: &'a [(String, String)], name: &str) -> Option<&'a str> {
    headers
        .iter()
        .find(|(k, _)| k.eq_ignore_ascii_case(name))
        .map(|(_, v)| v.as_str())
}

/// Performs the network round-trip for a built request.
pub trait HttpExecutor {
    fn execute(&self, request: HttpRequest) -> Result<HttpResponse, TransportError>;
}

/// Blocking executor backed by a `ureq` agent.
///
/// Exactly one request goes out per `execute`: redirects are not followed, so
/// a 3xx is returned like any other status. 4xx/5xx responses come back as
/// data, not `Err`; only transport-level failures (DNS, refused connection,
/// bad URL, malformed response) are errors. No timeout is configured.
#[derive(Clone)]
pub struct UreqExecutor {
    agent: ureq::Agent,
}

impl UreqExecutor {
    pub fn new() -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .max_redirects(0)
            .max_redirects_will_error(false)
            .build()
            .new_agent();
        Self { agent }
    }
}

impl Default for UreqExecutor {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpExecutor for UreqExecutor {
    fn execute(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let mut response = match request.method {
            HttpMethod::Post => self.agent.post(&request.url).send(&request.body[..])?,
        };

        let status = response.status().as_u16();
        // header values with opaque bytes are skipped
        let headers = response
            .headers()
            .iter()
            .filter_map(|(k, v)| v.to_str().ok().map(|v| (k.as_str().to_string(), v.to_string())))
            .collect();
        // drained without a size limit; a broken body still fails the call
        io::copy(&mut response.body_mut().as_reader(), &mut io::sink())
            .map_err(|e| TransportError::Http(e.to_string()))?;

        Ok(HttpResponse { status, headers })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_lookup_ignores_case() {
        let headers = vec![("Content-Type".to_string(), "text/plain".to_string())];
        assert_eq!(find_header(&headers, "content-type"), Some("text/plain"));
        assert_eq!(find_header(&headers, "CONTENT-TYPE"), Some("text/plain"));
        assert_eq!(find_header(&headers, "server"), None);
    }

    #[test]
    fn first_duplicate_header_wins() {
        let headers = vec![
            ("server".to_string(), "a".to_string()),
            ("Server".to_string(), "b".to_string()),
        ];
        assert_eq!(find_header(&headers, "server"), Some("a"));
    }

    #[test]
    fn ureq_executor_surfaces_bad_url() {
        let request = HttpRequest {
            method: HttpMethod::Post,
            url: "not a url".to_string(),
            headers: Vec::new(),
            body: b"x".to_vec(),
        };
        let err = UreqExecutor::new().execute(request).unwrap_err();
        assert!(matches!(err, TransportError::Http(_)));
    }
}
