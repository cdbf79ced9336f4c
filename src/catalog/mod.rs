//! Boat and brand catalog services.
//!
//! These are the two upstream collaborators the aggregate lab fans out to.
//! Each is a plain `GET /{id}` JSON service with one deliberately missing id.
//! They run standalone through the `catalog-service` binary and in-process
//! in tests.

pub mod listings;

use axum::{extract::Path, http::StatusCode, routing::get, Json, Router};
use clap::ValueEnum;

pub use listings::{BoatListing, BrandListing, MISSING_BOAT, MISSING_BRAND};

/// Which catalog to serve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CatalogService {
    Boat,
    Brand,
}

impl CatalogService {
    pub fn label(&self) -> &'static str {
        match self {
            CatalogService::Boat => "Boat",
            CatalogService::Brand => "Brand",
        }
    }

    /// Router answering `GET /{id}` for this catalog.
    pub fn router(self) -> Router {
        let router = match self {
            CatalogService::Boat => Router::new().route("/{id}", get(boat_by_id)),
            CatalogService::Brand => Router::new().route("/{id}", get(brand_by_id)),
        };
        router.fallback(|| async { StatusCode::BAD_REQUEST })
    }
}

async fn boat_by_id(Path(id): Path<String>) -> Result<Json<BoatListing>, StatusCode> {
    let id = listings::parse_id(&id).ok_or(StatusCode::BAD_REQUEST)?;
    listings::boat(id).map(Json).ok_or(StatusCode::NOT_FOUND)
}

async fn brand_by_id(Path(id): Path<String>) -> Result<Json<BrandListing>, StatusCode> {
    let id = listings::parse_id(&id).ok_or(StatusCode::BAD_REQUEST)?;
    listings::brand(id).map(Json).ok_or(StatusCode::NOT_FOUND)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use tower::ServiceExt;

    async fn get_status(service: CatalogService, uri: &str) -> StatusCode {
        service
            .router()
            .oneshot(Request::get(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
            .status()
    }

    #[tokio::test]
    async fn test_boat_catalog_statuses() {
        assert_eq!(get_status(CatalogService::Boat, "/1").await, StatusCode::OK);
        assert_eq!(get_status(CatalogService::Boat, "/2").await, StatusCode::NOT_FOUND);
        assert_eq!(get_status(CatalogService::Boat, "/abc").await, StatusCode::BAD_REQUEST);
        assert_eq!(get_status(CatalogService::Boat, "/").await, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_brand_catalog_statuses() {
        assert_eq!(get_status(CatalogService::Brand, "/231").await, StatusCode::OK);
        assert_eq!(get_status(CatalogService::Brand, "/234").await, StatusCode::NOT_FOUND);
        assert_eq!(get_status(CatalogService::Brand, "/1").await, StatusCode::NOT_FOUND);
        assert_eq!(get_status(CatalogService::Brand, "/x1").await, StatusCode::BAD_REQUEST);
    }
}
