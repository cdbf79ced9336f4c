//! `GET /` answering a fresh random token.

use std::time::Duration;

use axum::extract::State;
use base64::{engine::general_purpose::STANDARD, Engine as _};

use crate::http::server::AppState;

/// Ten random bytes, standard base64.
pub fn random_token() -> String {
    let bytes: [u8; 10] = rand::random();
    STANDARD.encode(bytes)
}

pub async fn random_text(State(state): State<AppState>) -> String {
    tokio::time::sleep(Duration::from_millis(state.config.delays.random_ms)).await;
    random_token()
}
