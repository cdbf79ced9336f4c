//! Route table.
//!
//! Every lab's routes are registered here and nowhere else. The table is
//! built once at startup; unmatched paths fall through to the server's 404
//! fallback.

use axum::{
    routing::{any, get, post},
    Router,
};

use crate::aggregate::aggregate_boat;
use crate::basics::{methods, random, stream, uppercase, view};
use crate::boats::{create_boat, delete_boat, read_boat, update_boat};
use crate::config::Lab;
use crate::forward::{forward_url, mount};
use crate::http::server::AppState;

/// Routes served by `lab`.
pub fn routes_for(lab: Lab) -> Router<AppState> {
    match lab {
        Lab::Random => Router::new().route("/", get(random::random_text)),
        Lab::Methods => Router::new().route("/", get(methods::get_root).post(methods::post_root)),
        Lab::View => Router::new().route("/me", get(view::me)),
        Lab::Stream => Router::new().route("/data", get(stream::data)),
        Lab::Boats => Router::new()
            .route("/boat", post(create_boat))
            .route("/boat/{id}", get(read_boat).put(update_boat).delete(delete_boat)),
        Lab::Aggregate => Router::new().route("/{id}", get(aggregate_boat)),
        Lab::Forward => Router::new().route("/", get(forward_url)),
        Lab::Mount => Router::new()
            .route("/", any(mount))
            .route("/{*path}", any(mount)),
        Lab::Uppercase => Router::new().route("/", get(uppercase::shout)),
    }
}
