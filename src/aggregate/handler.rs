//! `GET /{id}` aggregation handler.

use axum::{
    extract::{Path, State},
    http::HeaderMap,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::aggregate::classify::classify;
use crate::catalog::{listings, BoatListing, BrandListing};
use crate::http::request::request_id;
use crate::http::response::ApiError;
use crate::http::server::AppState;

/// Merged view of one boat and its brand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregatedBoat {
    pub id: u64,
    pub color: String,
    pub brand: String,
}

pub async fn aggregate_boat(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<Json<AggregatedBoat>, ApiError> {
    let request_id = request_id(&headers);

    let Some(id) = listings::parse_id(&id) else {
        tracing::debug!(request_id = %request_id, id = %id, "Rejecting malformed boat id");
        return Err(ApiError::BadRequest);
    };

    let boat: BoatListing = state
        .upstream
        .fetch_json(&state.boat_service, &format!("/{}", id))
        .await
        .map_err(classify)?;

    let brand: BrandListing = state
        .upstream
        .fetch_json(&state.brand_service, &format!("/{}", boat.brand))
        .await
        .map_err(classify)?;

    tracing::debug!(request_id = %request_id, id = boat.id, brand = %brand.name, "Boat aggregated");

    Ok(Json(AggregatedBoat {
        id: boat.id,
        color: boat.color,
        brand: brand.name,
    }))
}
