//! `GET /data` streaming one word at a time.

use std::convert::Infallible;
use std::time::Duration;

use axum::{
    body::Body,
    extract::State,
    http::header,
    response::{IntoResponse, Response},
};
use futures_util::{stream, Stream, StreamExt};

use crate::http::server::AppState;

pub const WORDS: [&str; 6] = ["this", "is", "a", "stream", "of", "data"];

/// `WORDS` as `<br>`-terminated chunks, each preceded by `delay`.
pub fn word_stream(delay: Duration) -> impl Stream<Item = Result<String, Infallible>> {
    stream::iter(WORDS).then(move |word| async move {
        tokio::time::sleep(delay).await;
        Ok(format!("{}<br>", word))
    })
}

pub async fn data(State(state): State<AppState>) -> Response {
    let delay = Duration::from_millis(state.config.delays.stream_chunk_ms);
    (
        [(header::CONTENT_TYPE, "text/html; charset=utf-8")],
        Body::from_stream(word_stream(delay)),
    )
        .into_response()
}
