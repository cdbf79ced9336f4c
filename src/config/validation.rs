//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate addresses and upstream URLs
//! - Validate value ranges (timeouts > 0)
//! - Check that the selected lab has what it needs
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: LabConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::net::SocketAddr;

use thiserror::Error;
use url::Url;

use crate::config::schema::{Lab, LabConfig};

/// A single semantic problem in a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{field}: '{value}' is not a socket address")]
    InvalidAddress { field: &'static str, value: String },

    #[error("{field}: '{value}' is not an absolute http(s) URL")]
    InvalidUrl { field: &'static str, value: String },

    #[error("{0} must be greater than zero")]
    ZeroValue(&'static str),

    #[error("lab '{0}' requires forward.upstream")]
    MissingUpstream(Lab),
}

/// Validate a configuration, collecting every error found.
pub fn validate_config(config: &LabConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidAddress {
            field: "listener.bind_address",
            value: config.listener.bind_address.clone(),
        });
    }

    if config.observability.metrics_enabled
        && config.observability.metrics_address.parse::<SocketAddr>().is_err()
    {
        errors.push(ValidationError::InvalidAddress {
            field: "observability.metrics_address",
            value: config.observability.metrics_address.clone(),
        });
    }

    if config.lab == Lab::Aggregate {
        check_url(&mut errors, "upstreams.boat_url", &config.upstreams.boat_url);
        check_url(&mut errors, "upstreams.brand_url", &config.upstreams.brand_url);
    }

    if config.lab == Lab::Mount {
        match &config.forward.upstream {
            Some(upstream) => check_url(&mut errors, "forward.upstream", upstream),
            None => errors.push(ValidationError::MissingUpstream(Lab::Mount)),
        }
    }

    if config.upstreams.timeout_ms == 0 {
        errors.push(ValidationError::ZeroValue("upstreams.timeout_ms"));
    }
    if config.forward.timeout_ms == 0 {
        errors.push(ValidationError::ZeroValue("forward.timeout_ms"));
    }
    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::ZeroValue("timeouts.request_secs"));
    }
    if config.security.max_body_size == 0 {
        errors.push(ValidationError::ZeroValue("security.max_body_size"));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_url(errors: &mut Vec<ValidationError>, field: &'static str, value: &str) {
    let valid = Url::parse(value)
        .map(|url| matches!(url.scheme(), "http" | "https") && url.has_host())
        .unwrap_or(false);
    if !valid {
        errors.push(ValidationError::InvalidUrl {
            field,
            value: value.to_string(),
        });
    }
}
