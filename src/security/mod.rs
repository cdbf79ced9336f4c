//! Security subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming request:
//!     → body size limit (tower-http RequestBodyLimitLayer, server.rs)
//!     → deny.rs (refuse listed peer addresses)
//!     → Pass to routing
//! ```
//!
//! # Design Decisions
//! - Fail closed: a listed peer never reaches a handler
//! - No trust in client-supplied forwarding headers; only the socket peer counts

pub mod deny;

pub use deny::{deny_listed_peers, DenyList};
