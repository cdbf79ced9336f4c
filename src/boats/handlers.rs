//! Boat endpoints.

use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    Json,
};
use serde::Serialize;

use crate::boats::schema::{Boat, BoatEnvelope, ValidatedJson};
use crate::http::request::request_id;
use crate::http::response::ApiError;
use crate::http::server::AppState;

#[derive(Debug, Serialize)]
pub struct CreatedBoat {
    pub id: String,
}

pub async fn create_boat(
    State(state): State<AppState>,
    headers: HeaderMap,
    ValidatedJson(body): ValidatedJson<BoatEnvelope>,
) -> Result<(StatusCode, Json<CreatedBoat>), ApiError> {
    let id = state.boats.insert_next(body.data);

    tracing::info!(request_id = %request_id(&headers), id = %id, "Boat created");
    Ok((StatusCode::CREATED, Json(CreatedBoat { id })))
}

pub async fn read_boat(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Boat>, ApiError> {
    Ok(Json(state.boats.read(&id)?))
}

pub async fn update_boat(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
    ValidatedJson(body): ValidatedJson<BoatEnvelope>,
) -> Result<StatusCode, ApiError> {
    state.boats.update(&id, body.data)?;

    tracing::info!(request_id = %request_id(&headers), id = %id, "Boat updated");
    Ok(StatusCode::NO_CONTENT)
}

pub async fn delete_boat(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    state.boats.delete(&id)?;

    tracing::info!(request_id = %request_id(&headers), id = %id, "Boat deleted");
    Ok(StatusCode::NO_CONTENT)
}
