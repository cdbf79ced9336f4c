//! Request-shape validation for boat payloads.
//!
//! A body passes when it is a JSON object with a `data` object holding
//! string `brand` and `color` fields. Anything else in either object is
//! dropped during deserialization. Failures never reach the handler.

use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::error::Category;

use crate::http::response::ApiError;

/// A stored boat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Boat {
    pub brand: String,
    pub color: String,
}

impl Boat {
    pub fn new(brand: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            brand: brand.into(),
            color: color.into(),
        }
    }
}

/// Body of `POST /boat` and `PUT /boat/{id}`.
#[derive(Debug, Clone, Deserialize)]
pub struct BoatEnvelope {
    pub data: Boat,
}

/// JSON body extractor that answers shape mismatches with 400.
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|rejection| ApiError::SchemaViolation(rejection.body_text()))?;
        parse_body(&bytes).map(ValidatedJson)
    }
}

const NOT_JSON: &str = "body must be a JSON object";

/// Decode `bytes` as `T`, describing any mismatch.
pub fn parse_body<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, ApiError> {
    if bytes.is_empty() {
        return Err(ApiError::SchemaViolation(NOT_JSON.to_string()));
    }
    serde_json::from_slice(bytes).map_err(|e| ApiError::SchemaViolation(describe(&e)))
}

/// Field-level description of a decode failure, without input positions.
fn describe(error: &serde_json::Error) -> String {
    match error.classify() {
        Category::Data => {
            let text = error.to_string();
            let detail = text.split(" at line ").next().unwrap_or(&text);
            format!("body: {}", detail)
        }
        Category::Syntax | Category::Eof | Category::Io => NOT_JSON.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extra_fields_are_stripped() {
        let envelope: BoatEnvelope = parse_body(
            br#"{"data": {"brand": "test", "color": "test", "length": 40}, "owner": "x"}"#,
        )
        .unwrap();
        assert_eq!(envelope.data, Boat::new("test", "test"));
    }

    #[test]
    fn test_missing_field_is_rejected() {
        let err = parse_body::<BoatEnvelope>(br#"{"data": {"brand": "test"}}"#).unwrap_err();
        match err {
            ApiError::SchemaViolation(detail) => assert!(detail.contains("color")),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_violation_messages_are_stable() {
        let message = |body: &[u8]| match parse_body::<BoatEnvelope>(body) {
            Err(ApiError::SchemaViolation(detail)) => detail,
            other => panic!("unexpected result: {other:?}"),
        };

        assert_eq!(message(br#"{"data": {"brand": "test"}}"#), "body: missing field `color`");
        assert_eq!(
            message(br#"{"data": {"brand": 1, "color": "test"}}"#),
            "body: invalid type: integer `1`, expected a string"
        );
        assert_eq!(message(b"{\"data\": "), "body must be a JSON object");
        assert_eq!(message(b"not json"), "body must be a JSON object");
        assert!(!message(br#"{"boat": {}}"#).contains("line"));
    }

    #[test]
    fn test_renamed_field_is_rejected() {
        assert!(parse_body::<BoatEnvelope>(br#"{"data": {"make": "test", "color": "test"}}"#).is_err());
        assert!(parse_body::<BoatEnvelope>(br#"{"boat": {"brand": "test", "color": "test"}}"#).is_err());
    }

    #[test]
    fn test_wrong_types_are_rejected() {
        assert!(parse_body::<BoatEnvelope>(br#"{"data": {"brand": 1, "color": "test"}}"#).is_err());
        assert!(parse_body::<BoatEnvelope>(br#"{"data": "brand"}"#).is_err());
        assert!(parse_body::<BoatEnvelope>(b"").is_err());
        assert!(parse_body::<BoatEnvelope>(b"not json").is_err());
    }
}
