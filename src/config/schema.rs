//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for a lab server.
//! All types derive Serde traits for deserialization from config files.

use std::fmt;
use std::net::IpAddr;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Root configuration for a lab server.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct LabConfig {
    /// Which lab this process serves.
    pub lab: Lab,

    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// Upstream services used by the aggregate lab.
    pub upstreams: UpstreamConfig,

    /// Forward and mount proxy settings.
    pub forward: ForwardConfig,

    /// Timeout configuration.
    pub timeouts: TimeoutConfig,

    /// Artificial delays used by the pacing labs.
    pub delays: DelayConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,

    /// Peer deny list and body size cap.
    pub security: SecurityConfig,
}

/// The lab served by a process. Exactly one per process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Lab {
    /// Random text payload on `GET /`.
    Random,
    /// `GET /` succeeds, `POST /` is rejected with 405.
    #[default]
    Methods,
    /// Layout-wrapped HTML page on `GET /me`.
    View,
    /// Delayed chunked body on `GET /data`.
    Stream,
    /// Schema-validated CRUD on `/boat`.
    Boats,
    /// Boat and brand fan-out on `GET /{id}`.
    Aggregate,
    /// Forward proxy on `GET /?url=`.
    Forward,
    /// Pass-through proxy to a single configured upstream.
    Mount,
    /// Uppercases `un` query values on `GET /`.
    Uppercase,
}

impl Lab {
    pub fn as_str(&self) -> &'static str {
        match self {
            Lab::Random => "random",
            Lab::Methods => "methods",
            Lab::View => "view",
            Lab::Stream => "stream",
            Lab::Boats => "boats",
            Lab::Aggregate => "aggregate",
            Lab::Forward => "forward",
            Lab::Mount => "mount",
            Lab::Uppercase => "uppercase",
        }
    }
}

impl fmt::Display for Lab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:3000").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:3000".to_string(),
        }
    }
}

/// Upstream collaborators of the aggregate lab.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct UpstreamConfig {
    /// Base URL of the boat service (no trailing slash).
    pub boat_url: String,

    /// Base URL of the brand service (no trailing slash).
    pub brand_url: String,

    /// Per-call timeout in milliseconds.
    pub timeout_ms: u64,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            boat_url: "http://localhost:4000".to_string(),
            brand_url: "http://localhost:5000".to_string(),
            timeout_ms: 1250,
        }
    }
}

/// Forward and mount proxy configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ForwardConfig {
    /// Upstream base URL for the mount lab.
    pub upstream: Option<String>,

    /// Time allowed for the upstream to produce response headers, in milliseconds.
    pub timeout_ms: u64,
}

impl Default for ForwardConfig {
    fn default() -> Self {
        Self {
            upstream: None,
            timeout_ms: 10_000,
        }
    }
}

/// Timeout configuration for inbound requests.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Request timeout (time until response headers) in seconds.
    pub request_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self { request_secs: 30 }
    }
}

/// Delays applied by the random, stream and uppercase labs.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct DelayConfig {
    pub random_ms: u64,
    pub stream_chunk_ms: u64,
    pub uppercase_ms: u64,
}

impl Default for DelayConfig {
    fn default() -> Self {
        Self {
            random_ms: 50,
            stream_chunk_ms: 500,
            uppercase_ms: 1000,
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Enable metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            metrics_enabled: false,
            metrics_address: "127.0.0.1:9090".to_string(),
        }
    }
}

/// Security configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct SecurityConfig {
    /// Peer addresses answered with 403 before routing.
    pub denied_ips: Vec<IpAddr>,
    /// Maximum body size in bytes.
    pub max_body_size: usize,
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self {
            denied_ips: Vec::new(),
            max_body_size: 1024 * 1024, // 1MB
        }
    }
}
