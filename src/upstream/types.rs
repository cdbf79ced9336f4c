//! Upstream targets and failure kinds.

use std::fmt;

use thiserror::Error;

/// Base URL of a collaborator service, fixed at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpstreamTarget {
    name: &'static str,
    base_url: String,
}

impl UpstreamTarget {
    /// Create a target. A trailing slash on `base_url` is dropped so paths
    /// can always start with `/`.
    pub fn new(name: &'static str, base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { name, base_url }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL for `path`, by concatenation.
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl fmt::Display for UpstreamTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.base_url)
    }
}

/// Ways an upstream call can fail.
#[derive(Debug, Error)]
pub enum UpstreamError {
    /// No response within the call deadline.
    #[error("upstream timed out after {0} ms")]
    Timeout(u64),

    /// The upstream answered with a non-2xx status.
    #[error("upstream responded with status {0}")]
    Status(u16),

    /// Connection refused, reset, or name resolution failed.
    #[error("upstream connection failed: {0}")]
    Connect(String),

    /// The body was not the JSON shape we expected.
    #[error("upstream body invalid: {0}")]
    InvalidBody(String),
}

impl UpstreamError {
    /// Short label for metrics.
    pub fn kind(&self) -> &'static str {
        match self {
            UpstreamError::Timeout(_) => "timeout",
            UpstreamError::Status(_) => "status",
            UpstreamError::Connect(_) => "connect",
            UpstreamError::InvalidBody(_) => "invalid_body",
        }
    }
}

/// Result type for upstream calls.
pub type UpstreamResult<T> = Result<T, UpstreamError>;
