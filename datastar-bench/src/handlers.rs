//! Route handlers
//!
//! Each handler is timed from entry until its response value is built. The
//! body is written by hyper after the handler returns.

use axum::{
    body::Bytes,
    extract::State,
    response::{Html, IntoResponse, Response},
};
use futures::stream::{self, StreamExt};
use std::convert::Infallible;
use tracing::Level;

use crate::{
    error::Result,
    sse::{Event, KeepAlive, Sse, SseConfig},
    state::AppState,
    timing::HandlerTimer,
};

/// `GET /`: the index page
pub async fn index(State(state): State<AppState>) -> Html<Bytes> {
    let timer = HandlerTimer::start("index", Level::INFO);
    let page = Html(state.assets().index.bytes());
    timer.finish();
    page
}

/// `GET /log`: the index page under its own timing label
pub async fn index_logged(State(state): State<AppState>) -> Html<Bytes> {
    let timer = HandlerTimer::start("log", Level::INFO);
    let page = Html(state.assets().index.bytes());
    timer.finish();
    page
}

/// `GET /sse`: one Datastar patch event carrying the SSE page
pub async fn sse(State(state): State<AppState>) -> Result<Response> {
    let timer = HandlerTimer::start("sse", Level::INFO);
    let config = state.sse_config();
    let event = config.patch(state.assets().sse.text()).into_event()?;
    let response = patch_stream(event, config);
    timer.finish();
    Ok(response)
}

/// Wrap a single event in an event-stream response
///
/// The stream ends after the event unless `hold_open` is set, in which case
/// it idles until the client disconnects, sending keep-alive comments when
/// an interval is configured.
fn patch_stream(event: Event, config: &SseConfig) -> Response {
    let once = stream::once(async move { Ok::<_, Infallible>(event) });

    if !config.hold_open {
        return Sse::new(once).into_response();
    }

    let sse = Sse::new(once.chain(stream::pending()));
    match config.keep_alive_interval() {
        Some(interval) => sse
            .keep_alive(KeepAlive::new().interval(interval))
            .into_response(),
        None => sse.into_response(),
    }
}
