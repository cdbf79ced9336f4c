//! Transparent single-hop relay.

use std::time::Duration;

use axum::{
    body::Body,
    http::Request,
    response::Response,
};
use hyper::body::Incoming;
use hyper_rustls::{HttpsConnector, HttpsConnectorBuilder};
use hyper_util::{
    client::legacy::{connect::HttpConnector, Client},
    rt::TokioExecutor,
};

use crate::http::response::ApiError;

/// Sends a prepared request upstream and hands back the response as-is.
#[derive(Clone)]
pub struct Forwarder {
    client: Client<HttpsConnector<HttpConnector>, Body>,
    timeout: Duration,
}

impl Forwarder {
    /// `timeout` bounds the wait for upstream response headers. Both `http`
    /// and `https` targets are reachable.
    pub fn new(timeout: Duration) -> Result<Self, rustls::Error> {
        let connector = HttpsConnectorBuilder::new()
            .with_provider_and_webpki_roots(rustls::crypto::ring::default_provider())?
            .https_or_http()
            .enable_http1()
            .build();
        let client = Client::builder(TokioExecutor::new()).build(connector);
        Ok(Self { client, timeout })
    }

    /// Relay `request`, whose URI must be absolute. The upstream's status,
    /// headers and body come back untouched; redirects are not followed.
    pub async fn relay(&self, request: Request<Body>) -> Result<Response, ApiError> {
        let uri = request.uri().clone();

        match tokio::time::timeout(self.timeout, self.client.request(request)).await {
            Err(_) => {
                tracing::warn!(uri = %uri, timeout_ms = self.timeout.as_millis() as u64, "Upstream timed out");
                Err(ApiError::UpstreamUnavailable(format!("{} timed out", uri)))
            }
            Ok(Err(e)) => {
                tracing::warn!(uri = %uri, error = %e, "Upstream request failed");
                Err(ApiError::UpstreamUnavailable(e.to_string()))
            }
            Ok(Ok(response)) => {
                tracing::debug!(uri = %uri, status = %response.status(), "Upstream responded");
                Ok(passthrough(response))
            }
        }
    }
}

fn passthrough(response: hyper::Response<Incoming>) -> Response {
    let (parts, body) = response.into_parts();
    Response::from_parts(parts, Body::new(body))
}
