//! Peer address deny list.
//!
//! Requests from a listed address are answered with 403 before any route
//! runs. IPv4-mapped IPv6 peers match their IPv4 entry.

use std::collections::HashSet;
use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;

use axum::{
    body::Body,
    extract::{ConnectInfo, State},
    http::Request,
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::http::response::ApiError;

/// Addresses refused by [`deny_listed_peers`].
#[derive(Debug, Clone, Default)]
pub struct DenyList {
    ips: Arc<HashSet<IpAddr>>,
}

impl DenyList {
    pub fn new(ips: &[IpAddr]) -> Self {
        Self {
            ips: Arc::new(ips.iter().map(|ip| ip.to_canonical()).collect()),
        }
    }

    pub fn is_denied(&self, ip: IpAddr) -> bool {
        self.ips.contains(&ip.to_canonical())
    }

    pub fn is_empty(&self) -> bool {
        self.ips.is_empty()
    }
}

/// Middleware rejecting denied peers with 403.
pub async fn deny_listed_peers(
    State(deny): State<DenyList>,
    request: Request<Body>,
    next: Next,
) -> Response {
    if !deny.is_empty() {
        let peer = request
            .extensions()
            .get::<ConnectInfo<SocketAddr>>()
            .map(|ConnectInfo(addr)| addr.ip());
        if let Some(ip) = peer.filter(|ip| deny.is_denied(*ip)) {
            tracing::warn!(peer = %ip, path = %request.uri().path(), "Denied peer");
            return ApiError::Forbidden.into_response();
        }
    }
    next.run(request).await
}
