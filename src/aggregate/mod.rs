//! Boat and brand fan-out lab.
//!
//! # Data Flow
//! ```text
//! GET /{id}
//!     → reject non-numeric id with 400 (no I/O)
//!     → boat service  GET /{id}         ─┐ failure short-circuits
//!     → brand service GET /{boat.brand} ─┤
//!     → classify.rs maps UpstreamError ◀─┘
//!     → 200 {"id", "color", "brand"}
//! ```
//!
//! # Design Decisions
//! - Upstream calls are sequential; the second depends on the first
//! - Upstream error shapes never reach the caller
//! - No failure state is kept between requests

pub mod classify;
pub mod handler;

pub use classify::classify;
pub use handler::{aggregate_boat, AggregatedBoat};
