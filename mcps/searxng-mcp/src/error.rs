//! Errors from talking to SearXNG
//!
//! Failures keep their kind here; the `search` tool flattens them into
//! readable text with [`into_tool_text`] so the caller always gets an answer.

use reqwest::StatusCode;

/// Prefix of every failed search result
pub const ERROR_PREFIX: &str = "Error querying SearXNG: ";

#[derive(Debug, thiserror::Error)]
pub enum SearxngError {
    #[error("invalid SearXNG base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("failed to build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),

    /// Connection, DNS or timeout failure before a response arrived
    #[error("{0}")]
    Request(#[source] reqwest::Error),

    /// SearXNG answered with a non-2xx status
    #[error("{source}")]
    Status {
        status: StatusCode,
        source: reqwest::Error,
    },

    /// The response body could not be read
    #[error("{0}")]
    Body(#[source] reqwest::Error),
}

impl SearxngError {
    /// Whether the request gave up waiting for SearXNG
    pub fn is_timeout(&self) -> bool {
        match self {
            SearxngError::Request(e) | SearxngError::Body(e) => e.is_timeout(),
            _ => false,
        }
    }

    /// Upstream status, when SearXNG responded at all
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            SearxngError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// The error message followed by each distinct underlying cause
    pub fn describe(&self) -> String {
        let mut description = self.to_string();
        let mut source = std::error::Error::source(self);

        while let Some(cause) = source {
            let cause_text = cause.to_string();
            if !description.contains(&cause_text) {
                description.push_str(": ");
                description.push_str(&cause_text);
            }
            source = cause.source();
        }

        description
    }
}

/// Render a search outcome as the text handed back to the caller
pub fn into_tool_text(result: Result<String, SearxngError>) -> String {
    match result {
        Ok(body) => body,
        Err(e) => format!("{}{}", ERROR_PREFIX, e.describe()),
    }
}
