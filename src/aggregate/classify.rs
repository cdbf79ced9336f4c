//! Upstream failure to caller-facing error.

use crate::http::response::ApiError;
use crate::upstream::UpstreamError;

/// Map an upstream failure from either catalog onto the lab's error vocabulary.
///
/// | upstream              | caller |
/// |-----------------------|--------|
/// | status 404            | 404    |
/// | status 400            | 400    |
/// | connect / timeout     | 500    |
/// | anything else         | 500    |
pub fn classify(error: UpstreamError) -> ApiError {
    match error {
        UpstreamError::Status(404) => ApiError::NotFound,
        UpstreamError::Status(400) => ApiError::BadRequest,
        e @ (UpstreamError::Connect(_) | UpstreamError::Timeout(_)) => {
            ApiError::UpstreamUnavailable(e.to_string())
        }
        other => ApiError::Unclassified(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn test_classification_table() {
        let cases = [
            (UpstreamError::Status(404), StatusCode::NOT_FOUND),
            (UpstreamError::Status(400), StatusCode::BAD_REQUEST),
            (UpstreamError::Status(503), StatusCode::INTERNAL_SERVER_ERROR),
            (UpstreamError::Status(418), StatusCode::INTERNAL_SERVER_ERROR),
            (UpstreamError::Connect("refused".into()), StatusCode::INTERNAL_SERVER_ERROR),
            (UpstreamError::Timeout(1250), StatusCode::INTERNAL_SERVER_ERROR),
            (UpstreamError::InvalidBody("eof".into()), StatusCode::INTERNAL_SERVER_ERROR),
        ];
        for (error, expected) in cases {
            assert_eq!(classify(error).status(), expected);
        }
    }

    #[test]
    fn test_service_down_is_upstream_unavailable() {
        assert!(matches!(
            classify(UpstreamError::Timeout(10)),
            ApiError::UpstreamUnavailable(_)
        ));
        assert!(matches!(
            classify(UpstreamError::InvalidBody("x".into())),
            ApiError::Unclassified(_)
        ));
    }
}
