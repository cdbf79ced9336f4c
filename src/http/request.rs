//! Request identification.
//!
//! # Responsibilities
//! - Generate a unique request ID (UUID v4) when the caller sent none
//! - Expose the ID to handlers for structured logging
//!
//! # Design Decisions
//! - Request ID added as early as possible for tracing
//! - The same ID is echoed on the response by the propagate layer

use axum::http::{HeaderMap, HeaderName, HeaderValue, Request};
use tower_http::request_id::{MakeRequestId, RequestId};
use uuid::Uuid;

#[allow(clippy::declare_interior_mutable_const)]
pub const X_REQUEST_ID: HeaderName = HeaderName::from_static("x-request-id");

/// Generates v4 UUID request IDs.
#[derive(Debug, Clone, Copy, Default)]
pub struct MakeRequestUuidV4;

impl MakeRequestId for MakeRequestUuidV4 {
    fn make_request_id<B>(&mut self, _request: &Request<B>) -> Option<RequestId> {
        HeaderValue::from_str(&Uuid::new_v4().to_string())
            .ok()
            .map(RequestId::new)
    }
}

/// Read the request ID from headers, or `"unknown"` outside the layer stack.
pub fn request_id(headers: &HeaderMap) -> &str {
    headers
        .get(X_REQUEST_ID)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("unknown")
}
