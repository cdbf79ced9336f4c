//! JSON upstream client with a hard per-call deadline.
//!
//! # Responsibilities
//! - Issue GET requests to a target's base URL + path
//! - Enforce the configured timeout on the whole exchange
//! - Classify failures into [`UpstreamError`] kinds
//! - Decode the body into the caller's type

use std::time::{Duration, Instant};

use axum::body::Bytes;
use serde::de::DeserializeOwned;

use crate::observability::metrics;
use crate::upstream::types::{UpstreamError, UpstreamResult, UpstreamTarget};

/// Client for JSON collaborators.
#[derive(Debug, Clone)]
pub struct UpstreamClient {
    http: reqwest::Client,
    timeout: Duration,
}

impl UpstreamClient {
    /// Create a client whose calls fail after `timeout`.
    pub fn new(timeout: Duration) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .no_proxy()
            .build()?;
        Ok(Self { http, timeout })
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// GET `target` + `path` and decode the JSON body as `T`.
    pub async fn fetch_json<T: DeserializeOwned>(
        &self,
        target: &UpstreamTarget,
        path: &str,
    ) -> UpstreamResult<T> {
        let url = target.url(path);
        let start = Instant::now();

        let result = self.exchange(&url).await;
        match &result {
            Ok(_) => {
                tracing::debug!(upstream = target.name(), url = %url, elapsed_ms = start.elapsed().as_millis() as u64, "Upstream call succeeded");
            }
            Err(e) => {
                tracing::warn!(upstream = target.name(), url = %url, error = %e, "Upstream call failed");
                metrics::record_upstream_error(target.name(), e.kind());
            }
        }

        let bytes = result?;
        serde_json::from_slice(&bytes).map_err(|e| {
            metrics::record_upstream_error(target.name(), "invalid_body");
            UpstreamError::InvalidBody(e.to_string())
        })
    }

    async fn exchange(&self, url: &str) -> UpstreamResult<Bytes> {
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| self.classify(e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(UpstreamError::Status(status.as_u16()));
        }

        response.bytes().await.map_err(|e| self.classify(e))
    }

    fn classify(&self, error: reqwest::Error) -> UpstreamError {
        if error.is_timeout() {
            UpstreamError::Timeout(self.timeout.as_millis() as u64)
        } else if error.is_decode() {
            UpstreamError::InvalidBody(error.to_string())
        } else {
            UpstreamError::Connect(error.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{routing::get, Router};

    async fn serve(router: Router) -> UpstreamTarget {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let _ = axum::serve(listener, router).await;
        });
        UpstreamTarget::new("test", format!("http://{}", addr))
    }

    #[tokio::test]
    async fn test_deadline_applies_to_every_call() {
        let target = serve(Router::new().route(
            "/slow",
            get(|| async {
                tokio::time::sleep(Duration::from_secs(5)).await;
                "{}"
            }),
        ))
        .await;

        let client = UpstreamClient::new(Duration::from_millis(100)).unwrap();
        assert_eq!(client.timeout(), Duration::from_millis(100));
        let started = Instant::now();
        let err = client.fetch_json::<serde_json::Value>(&target, "/slow").await.unwrap_err();
        assert!(matches!(err, UpstreamError::Timeout(100)));
        assert!(started.elapsed() < Duration::from_secs(2));
    }

    #[tokio::test]
    async fn test_status_and_body_failures() {
        let target = serve(
            Router::new()
                .route("/text", get(|| async { "not json" }))
                .route("/json", get(|| async { r#"{"n": 1}"# })),
        )
        .await;
        let client = UpstreamClient::new(Duration::from_secs(1)).unwrap();

        let err = client.fetch_json::<serde_json::Value>(&target, "/missing").await.unwrap_err();
        assert!(matches!(err, UpstreamError::Status(404)));

        let err = client.fetch_json::<serde_json::Value>(&target, "/text").await.unwrap_err();
        assert!(matches!(err, UpstreamError::InvalidBody(_)));

        let value: serde_json::Value = client.fetch_json(&target, "/json").await.unwrap();
        assert_eq!(value["n"], 1);
    }
}
