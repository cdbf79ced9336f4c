//! Metrics collection and exposition.
//!
//! # Metrics
//! - `labs_requests_total` (counter): requests by lab, method, status
//! - `labs_request_duration_seconds` (histogram): latency distribution
//! - `labs_upstream_errors_total` (counter): failed upstream calls by upstream, kind

use std::net::SocketAddr;
use std::time::Instant;

use axum::{body::Body, extract::State, http::Request, middleware::Next, response::Response};
use metrics_exporter_prometheus::PrometheusBuilder;

use crate::config::Lab;

/// Install the Prometheus recorder and its scrape listener.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics exporter listening"),
        Err(e) => tracing::error!(error = %e, "Failed to install metrics exporter"),
    }
}

/// Record a finished request.
pub fn record_request(lab: Lab, method: &str, status: u16, start: Instant) {
    let labels = [
        ("lab", lab.as_str().to_string()),
        ("method", method.to_string()),
        ("status", status.to_string()),
    ];
    metrics::counter!("labs_requests_total", &labels).increment(1);
    metrics::histogram!("labs_request_duration_seconds", &labels)
        .record(start.elapsed().as_secs_f64());
}

/// Record a failed upstream call.
pub fn record_upstream_error(upstream: &'static str, kind: &'static str) {
    metrics::counter!("labs_upstream_errors_total", "upstream" => upstream, "kind" => kind)
        .increment(1);
}

/// Middleware recording count and latency of every request.
pub async fn track_requests(State(lab): State<Lab>, request: Request<Body>, next: Next) -> Response {
    let start = Instant::now();
    let method = request.method().to_string();
    let response = next.run(request).await;
    record_request(lab, &method, response.status().as_u16(), start);
    response
}
