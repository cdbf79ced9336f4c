//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (main.rs):
//!     Load config → env overrides → Validate → Bind → Serve
//!
//! Shutdown:
//!     signals.rs (SIGTERM/SIGINT) → shutdown.rs broadcast
//!     → server stops accepting → in-flight requests drain → exit
//! ```

pub mod shutdown;
pub mod signals;

pub use shutdown::Shutdown;
