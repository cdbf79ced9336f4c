//! Forward and mount endpoints.

use axum::{
    body::Body,
    extract::{RawQuery, State},
    http::{header, HeaderMap, Method, Request, Uri, Version},
    response::Response,
};

use crate::forward::target::{parse_target, query_value};
use crate::http::request::request_id;
use crate::http::response::ApiError;
use crate::http::server::AppState;

/// `GET /?url=<absolute-url>`: relay whatever that URL answers.
pub async fn forward_url(
    State(state): State<AppState>,
    headers: HeaderMap,
    RawQuery(query): RawQuery,
) -> Result<Response, ApiError> {
    let raw = query_value(query.as_deref(), "url");
    let target = parse_target(raw.as_deref()).inspect_err(|_| {
        tracing::debug!(request_id = %request_id(&headers), url = ?raw, "Rejecting forward target");
    })?;

    tracing::info!(request_id = %request_id(&headers), target = %target, "Forwarding");

    let request = Request::builder()
        .method(Method::GET)
        .uri(target)
        .body(Body::empty())
        .map_err(|e| ApiError::Unclassified(e.to_string()))?;

    state.forwarder.relay(request).await
}

/// Any method, any path: relay to the configured upstream.
pub async fn mount(State(state): State<AppState>, request: Request<Body>) -> Result<Response, ApiError> {
    let upstream = state
        .mount_target
        .as_ref()
        .ok_or_else(|| ApiError::Unclassified("mount lab has no upstream".to_string()))?;

    let path_and_query = request
        .uri()
        .path_and_query()
        .map(|pq| pq.as_str())
        .unwrap_or("/");
    let uri: Uri = upstream
        .url(path_and_query)
        .parse()
        .map_err(|_| ApiError::BadRequest)?;

    tracing::info!(
        request_id = %request_id(request.headers()),
        method = %request.method(),
        target = %uri,
        "Relaying to mounted upstream"
    );

    let (mut parts, body) = request.into_parts();
    parts.uri = uri;
    parts.version = Version::HTTP_11;
    // The client fills Host in from the new URI.
    parts.headers.remove(header::HOST);

    state.forwarder.relay(Request::from_parts(parts, body)).await
}
