//! Shared utilities for integration testing.

#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use axum::{
    body::Body,
    extract::State,
    http::Request,
    middleware::{self, Next},
    response::Response,
    Router,
};
use tokio::net::TcpListener;

use http_labs::config::{DelayConfig, Lab, LabConfig};
use http_labs::{HttpServer, Shutdown};

/// Serve `router` on a free loopback port.
pub async fn spawn_router(router: Router) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    serve_on(listener, router)
}

/// Serve `router` on an already bound listener.
pub fn serve_on(listener: TcpListener, router: Router) -> SocketAddr {
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let app = router.into_make_service_with_connect_info::<SocketAddr>();
        let _ = axum::serve(listener, app).await;
    });
    addr
}

/// Config for `lab` with every artificial delay zeroed.
pub fn lab_config(lab: Lab) -> LabConfig {
    LabConfig {
        lab,
        delays: DelayConfig {
            random_ms: 0,
            stream_chunk_ms: 0,
            uppercase_ms: 0,
        },
        ..LabConfig::default()
    }
}

/// Run a full lab server. Dropping the returned handle leaves it running;
/// call `trigger` to stop it.
pub async fn spawn_lab(config: LabConfig) -> (SocketAddr, Shutdown) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let server = HttpServer::new(config).unwrap();
    let shutdown = Shutdown::new();
    let stop = shutdown.subscribe();
    tokio::spawn(async move {
        let _ = server.run(listener, stop).await;
    });
    (addr, shutdown)
}

/// Counts every request that reaches the wrapped router.
pub async fn count_hits(
    State(hits): State<Arc<AtomicUsize>>,
    request: Request<Body>,
    next: Next,
) -> Response {
    hits.fetch_add(1, Ordering::SeqCst);
    next.run(request).await
}

/// `router` with a hit counter in front of it.
pub fn counted(router: Router) -> (Router, Arc<AtomicUsize>) {
    let hits = Arc::new(AtomicUsize::new(0));
    let router = router.layer(middleware::from_fn_with_state(hits.clone(), count_hits));
    (router, hits)
}

/// Client that neither follows redirects nor honours proxy env vars.
pub fn http_client() -> reqwest::Client {
    reqwest::Client::builder()
        .no_proxy()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .unwrap()
}

pub fn url(addr: SocketAddr, path: &str) -> String {
    format!("http://{}{}", addr, path)
}
