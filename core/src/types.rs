//! The response summary recorded after each transport.

use std::fmt;

use serde::Serialize;

use crate::http::{find_header, HttpResponse};

/// Six-field extract of a response. Absent fields are empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ResponseSummary {
    pub status: String,
    pub content_length: String,
    pub transfer_encoding: String,
    pub server: String,
    pub date: String,
    pub content_type: String,
}

impl ResponseSummary {
    /// Build a summary from raw headers. `status` is looked up as a header
    /// like the others.
    pub fn from_headers(headers: &[(String, String)]) -> Self {
        let get = |name: &str| find_header(headers, name).unwrap_or_default().to_string();
        Self {
            status: get("status"),
            content_length: get("content-length"),
            transfer_encoding: get("transfer-encoding"),
            server: get("server"),
            date: get("date"),
            content_type: get("content-type"),
        }
    }

    /// Build a summary from a response; `status` comes from the status line.
    pub fn from_response(response: &HttpResponse) -> Self {
        Self {
            status: response.status.to_string(),
            ..Self::from_headers(&response.headers)
        }
    }

    /// status, content-length, transfer-encoding, server, date, content-type.
    pub fn fields(&self) -> [&str; 6] {
        [
            self.status.as_str(),
            self.content_length.as_str(),
            self.transfer_encoding.as_str(),
            self.server.as_str(),
            self.date.as_str(),
            self.content_type.as_str(),
        ]
    }
}

impl fmt::Display for ResponseSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, field) in self.fields().iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "'{field}'")?;
        }
        write!(f, "]")
    }
}
