//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML, optional)
//!     → loader.rs (parse & deserialize)
//!     → loader.rs (PORT / BOAT_SERVICE_PORT / BRAND_SERVICE_PORT overrides)
//!     → command line lab selection
//!     → validation.rs (semantic checks)
//!     → LabConfig (validated, immutable)
//!     → shared via Arc with every handler
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; upstream targets never change at runtime
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use schema::LabConfig;
pub use schema::Lab;
pub use schema::ListenerConfig;
pub use schema::UpstreamConfig;
pub use schema::ForwardConfig;
pub use schema::DelayConfig;
