//! `GET /?un=` uppercasing one or many values.

use std::time::Duration;

use axum::{
    extract::{RawQuery, State},
    response::{IntoResponse, Response},
    Json,
};
use url::form_urlencoded;

use crate::http::server::AppState;

/// Every `un` value, uppercased. `un[]` counts as `un`.
pub fn shouted_values(query: Option<&str>) -> Vec<String> {
    let Some(query) = query else {
        return Vec::new();
    };
    form_urlencoded::parse(query.as_bytes())
        .filter(|(key, _)| key == "un" || key == "un[]")
        .map(|(_, value)| value.to_uppercase())
        .collect()
}

/// One value answers as text, several as a JSON array, none as an empty body.
pub async fn shout(State(state): State<AppState>, RawQuery(query): RawQuery) -> Response {
    tokio::time::sleep(Duration::from_millis(state.config.delays.uppercase_ms)).await;

    let mut values = shouted_values(query.as_deref());
    match values.len() {
        0 => String::new().into_response(),
        1 => values.remove(0).into_response(),
        _ => Json(values).into_response(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_value() {
        assert_eq!(shouted_values(Some("un=xxab12")), vec!["XXAB12"]);
    }

    #[test]
    fn test_repeated_values() {
        assert_eq!(shouted_values(Some("un=a&un=b&other=c")), vec!["A", "B"]);
        assert_eq!(shouted_values(Some("un[]=a&un[]=b")), vec!["A", "B"]);
    }

    #[test]
    fn test_odd_queries_do_not_panic() {
        assert!(shouted_values(None).is_empty());
        assert!(shouted_values(Some("")).is_empty());
        assert!(shouted_values(Some("un[x]=1&&=&un")).len() == 1);
        assert_eq!(shouted_values(Some("un=%C3%A9t%C3%A9")), vec!["ÉTÉ"]);
    }
}
