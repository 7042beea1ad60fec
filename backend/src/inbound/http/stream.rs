//! Character streaming endpoint.
//!
//! ```text
//! GET /api/stream-text
//! ```

use std::convert::Infallible;

use actix_web::http::header;
use actix_web::web::Bytes;
use actix_web::{HttpResponse, get, web};
use futures_util::StreamExt;
use tracing::debug;

use crate::domain::{Error, stream_characters};
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;

/// Stream freshly generated lorem text one character per tick.
///
/// The response is chunked `text/plain` and ends once the text is exhausted.
/// Dropping the connection drops the stream.
#[get("/stream-text")]
pub async fn stream_text(state: web::Data<HttpState>) -> ApiResult<HttpResponse> {
    let settings = state.stream;
    let text = state
        .text
        .paragraphs(settings.paragraphs)
        .map_err(|err| Error::internal(format!("stream text generation failed: {err}")))?;
    debug!(
        chars = text.chars().count(),
        interval_ms = u64::try_from(settings.interval.as_millis()).unwrap_or(u64::MAX),
        "starting text stream"
    );

    let body = stream_characters(text, settings.interval).map(|ch| {
        let mut buf = [0_u8; 4];
        Ok::<_, Infallible>(Bytes::copy_from_slice(ch.encode_utf8(&mut buf).as_bytes()))
    });
    Ok(HttpResponse::Ok()
        .content_type("text/plain")
        .insert_header((header::CACHE_CONTROL, "no-cache"))
        .insert_header((header::X_CONTENT_TYPE_OPTIONS, "nosniff"))
        .streaming(body))
}
