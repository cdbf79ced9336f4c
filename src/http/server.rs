//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Build shared state (store, upstream client, forwarder) from config
//! - Create the Axum Router for the configured lab
//! - Wire up middleware (request id, tracing, timeout, body limit, deny list, metrics)
//! - Serve on a listener until shutdown

use axum::{middleware, Router};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use thiserror::Error;
use tokio::sync::broadcast;
use tower_http::{
    limit::RequestBodyLimitLayer,
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::boats::{self, Boat};
use crate::config::LabConfig;
use crate::forward::Forwarder;
use crate::http::request::{MakeRequestUuidV4, X_REQUEST_ID};
use crate::http::response::not_found;
use crate::lifecycle::shutdown;
use crate::observability::metrics;
use crate::routing;
use crate::security::{deny_listed_peers, DenyList};
use crate::store::RecordStore;
use crate::upstream::{UpstreamClient, UpstreamTarget};

/// Failure building the outbound clients at startup.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("upstream client: {0}")]
    Client(#[from] reqwest::Error),

    #[error("relay TLS setup: {0}")]
    Tls(#[from] rustls::Error),
}

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<LabConfig>,
    pub boats: RecordStore<Boat>,
    pub upstream: UpstreamClient,
    pub boat_service: UpstreamTarget,
    pub brand_service: UpstreamTarget,
    pub forwarder: Forwarder,
    pub mount_target: Option<UpstreamTarget>,
}

impl AppState {
    /// State for `config`, with the boats store seeded.
    pub fn new(config: LabConfig) -> Result<Self, StartupError> {
        let upstream = UpstreamClient::new(Duration::from_millis(config.upstreams.timeout_ms))?;
        let forwarder = Forwarder::new(Duration::from_millis(config.forward.timeout_ms))?;
        let boat_service = UpstreamTarget::new("boat", config.upstreams.boat_url.clone());
        let brand_service = UpstreamTarget::new("brand", config.upstreams.brand_url.clone());
        let mount_target = config
            .forward
            .upstream
            .clone()
            .map(|url| UpstreamTarget::new("mount", url));

        Ok(Self {
            config: Arc::new(config),
            boats: boats::seeded_store(),
            upstream,
            boat_service,
            brand_service,
            forwarder,
            mount_target,
        })
    }

    /// Replace the boats store.
    pub fn with_boats(mut self, store: RecordStore<Boat>) -> Self {
        self.boats = store;
        self
    }
}

/// HTTP server for one lab.
pub struct HttpServer {
    router: Router,
    config: Arc<LabConfig>,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: LabConfig) -> Result<Self, StartupError> {
        Ok(Self::with_state(AppState::new(config)?))
    }

    /// Create a server around prepared state.
    pub fn with_state(state: AppState) -> Self {
        let config = Arc::clone(&state.config);
        let router = Self::build_router(&config, state);
        Self { router, config }
    }

    /// Build the Axum router with all middleware layers.
    #[allow(deprecated)]
    fn build_router(config: &LabConfig, state: AppState) -> Router {
        let deny = DenyList::new(&config.security.denied_ips);

        routing::routes_for(config.lab)
            .fallback(not_found)
            .with_state(state)
            .layer(middleware::from_fn_with_state(config.lab, metrics::track_requests))
            .layer(middleware::from_fn_with_state(deny, deny_listed_peers))
            .layer(RequestBodyLimitLayer::new(config.security.max_body_size))
            .layer(TimeoutLayer::new(Duration::from_secs(config.timeouts.request_secs)))
            .layer(PropagateRequestIdLayer::new(X_REQUEST_ID))
            .layer(TraceLayer::new_for_http())
            .layer(SetRequestIdLayer::new(X_REQUEST_ID, MakeRequestUuidV4))
    }

    /// The fully layered router, for in-process testing.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Run the server, accepting connections on the given listener until `stop` fires.
    pub async fn run(
        self,
        listener: TcpListener,
        stop: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            lab = %self.config.lab,
            "HTTP server starting"
        );

        let app = self.router.into_make_service_with_connect_info::<SocketAddr>();

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown::wait(stop))
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &LabConfig {
        &self.config
    }
}
