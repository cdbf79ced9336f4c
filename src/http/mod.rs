//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware stack)
//!     → request.rs (request ID assigned or kept)
//!     → routing table picks the lab handler
//!     → response.rs (ApiError → status + JSON body)
//!     → Send to client
//! ```

pub mod request;
pub mod response;
pub mod server;

pub use request::{request_id, MakeRequestUuidV4, X_REQUEST_ID};
pub use response::ApiError;
pub use server::{AppState, HttpServer, StartupError};
