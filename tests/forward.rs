//! Forward and mount labs against a fixture upstream.

use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use axum::{
    body::Bytes,
    http::{header, HeaderMap, Method, StatusCode},
    response::{IntoResponse, Response},
    routing::{any, get},
    Router,
};

use http_labs::config::Lab;

mod common;

async fn ok() -> Response {
    (
        [
            (header::CONTENT_TYPE, "application/json"),
            (header::COOKIE, "test"),
        ],
        r#"{"it":"works"}"#,
    )
        .into_response()
}

async fn echo(method: Method, headers: HeaderMap, body: Bytes) -> Response {
    let host = headers
        .get(header::HOST)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    (
        [(header::HeaderName::from_static("x-upstream-host"), host)],
        format!("{} {}", method, String::from_utf8_lossy(&body)),
    )
        .into_response()
}

async fn fixture_upstream() -> (SocketAddr, Arc<AtomicUsize>) {
    let router = Router::new()
        .route("/ok", get(ok))
        .route(
            "/redir",
            get(|| async { (StatusCode::MOVED_PERMANENTLY, [(header::LOCATION, "/ok")]) }),
        )
        .route("/echo", any(echo))
        .route("/echo/{*rest}", any(echo))
        .fallback(|| async { StatusCode::NOT_FOUND });
    let (router, hits) = common::counted(router);
    (common::spawn_router(router).await, hits)
}

fn forward_url(proxy: SocketAddr, target: &str) -> String {
    let query: String = url::form_urlencoded::Serializer::new(String::new())
        .append_pair("url", target)
        .finish();
    common::url(proxy, &format!("/?{}", query))
}

#[tokio::test]
async fn test_forward_relays_status_headers_and_body() {
    let (upstream, _) = fixture_upstream().await;
    let (proxy, shutdown) = common::spawn_lab(common::lab_config(Lab::Forward)).await;
    let client = common::http_client();

    let response = client
        .get(forward_url(proxy, &common::url(upstream, "/ok")))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);
    assert_eq!(response.headers()["content-type"], "application/json");
    assert_eq!(response.headers()["cookie"], "test");
    assert_eq!(response.text().await.unwrap(), r#"{"it":"works"}"#);

    shutdown.trigger();
}

#[tokio::test]
async fn test_forward_relays_redirects_and_errors_verbatim() {
    let (upstream, _) = fixture_upstream().await;
    let (proxy, shutdown) = common::spawn_lab(common::lab_config(Lab::Forward)).await;
    let client = common::http_client();

    let response = client
        .get(forward_url(proxy, &common::url(upstream, "/redir")))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 301);
    assert_eq!(response.headers()["location"], "/ok");

    let response = client
        .get(forward_url(proxy, &common::url(upstream, "/bad-route")))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 404);

    shutdown.trigger();
}

#[tokio::test]
async fn test_forward_rejects_bad_targets_without_upstream_calls() {
    let (_, hits) = fixture_upstream().await;
    let (proxy, shutdown) = common::spawn_lab(common::lab_config(Lab::Forward)).await;
    let client = common::http_client();

    let missing = client.get(common::url(proxy, "/")).send().await.unwrap();
    assert_eq!(missing.status(), 400);

    for target in ["not a url", "/relative", "ftp://example.com/file"] {
        let response = client.get(forward_url(proxy, target)).send().await.unwrap();
        assert_eq!(response.status(), 400, "target {}", target);
    }
    assert_eq!(hits.load(Ordering::SeqCst), 0);

    let unknown = client.get(common::url(proxy, "/elsewhere")).send().await.unwrap();
    assert_eq!(unknown.status(), 404);

    shutdown.trigger();
}

#[tokio::test]
async fn test_mount_relays_any_method_and_path() {
    let (upstream, _) = fixture_upstream().await;
    let mut config = common::lab_config(Lab::Mount);
    config.forward.upstream = Some(common::url(upstream, ""));
    let (proxy, shutdown) = common::spawn_lab(config).await;
    let client = common::http_client();

    let response = client.get(common::url(proxy, "/echo")).send().await.unwrap();
    assert_eq!(response.status(), 200);
    assert_eq!(response.headers()["x-upstream-host"], upstream.to_string());
    assert_eq!(response.text().await.unwrap(), "GET ");

    let response = client
        .post(common::url(proxy, "/echo/deeper?x=1"))
        .body("payload")
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);
    assert_eq!(response.text().await.unwrap(), "POST payload");

    let response = client.get(common::url(proxy, "/missing")).send().await.unwrap();
    assert_eq!(response.status(), 404);

    shutdown.trigger();
}

#[tokio::test]
async fn test_forward_to_dead_upstream_is_server_error() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let dead = listener.local_addr().unwrap();
    drop(listener);

    let (proxy, shutdown) = common::spawn_lab(common::lab_config(Lab::Forward)).await;
    let response = common::http_client()
        .get(forward_url(proxy, &common::url(dead, "/ok")))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 500);

    shutdown.trigger();
}

#[tokio::test]
async fn test_forward_accepts_https_targets() {
    // Plain HTTP on the other end, so the TLS handshake fails after validation passed.
    let (upstream, hits) = fixture_upstream().await;
    let (proxy, shutdown) = common::spawn_lab(common::lab_config(Lab::Forward)).await;

    let response = common::http_client()
        .get(forward_url(proxy, &format!("https://{}/ok", upstream)))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 500);
    assert_eq!(hits.load(Ordering::SeqCst), 0);

    shutdown.trigger();
}
