//! Validation of caller-supplied forward targets.

use axum::http::Uri;
use url::{form_urlencoded, Url};

use crate::http::response::ApiError;

/// First value of `name` in a raw query string.
pub fn query_value(query: Option<&str>, name: &str) -> Option<String> {
    let query = query?;
    form_urlencoded::parse(query.as_bytes())
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.into_owned())
}

/// Parse a forward target. Missing, relative, or non-web values are rejected.
pub fn parse_target(raw: Option<&str>) -> Result<Uri, ApiError> {
    let raw = raw.map(str::trim).filter(|s| !s.is_empty()).ok_or(ApiError::BadRequest)?;

    let url = Url::parse(raw).map_err(|_| ApiError::BadRequest)?;
    if !matches!(url.scheme(), "http" | "https") || !url.has_host() {
        return Err(ApiError::BadRequest);
    }

    url.as_str().parse::<Uri>().map_err(|_| ApiError::BadRequest)
}
