//! `GET /` and `POST /` on the same path.

use axum::Json;
use serde_json::{json, Value};

use crate::http::response::ApiError;

pub async fn get_root() -> Json<Value> {
    Json(json!({ "root": true }))
}

pub async fn post_root() -> ApiError {
    ApiError::MethodNotAllowed
}
