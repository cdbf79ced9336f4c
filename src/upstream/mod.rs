//! Upstream collaborator subsystem.
//!
//! # Data Flow
//! ```text
//! Handler
//!     → client.rs (GET base_url + path, deadline)
//!     → types.rs (UpstreamError: Timeout | Status | Connect | InvalidBody)
//!     → handler-side classifier (aggregate::classify)
//! ```
//!
//! # Design Decisions
//! - Every outbound call has a deadline
//! - No retries: one failed call is one classified error
//! - Targets are resolved once at startup

pub mod client;
pub mod types;

pub use client::UpstreamClient;
pub use types::{UpstreamError, UpstreamResult, UpstreamTarget};
