//! HTTP labs: small servers, each demonstrating one HTTP concern.

pub mod aggregate;
pub mod basics;
pub mod boats;
pub mod catalog;
pub mod config;
pub mod forward;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod routing;
pub mod security;
pub mod store;
pub mod upstream;

pub use config::{Lab, LabConfig};
pub use http::HttpServer;
pub use lifecycle::Shutdown;
