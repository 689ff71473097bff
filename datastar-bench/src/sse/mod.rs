//! Server-Sent Events support for Datastar.
//!
//! Datastar drives the page from the server: the browser opens an event
//! stream and the server answers with patch events describing which DOM
//! elements to morph. This module builds those events on top of axum's
//! built-in SSE types.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use datastar_bench::sse::{Event, PatchElements, Sse};
//! use futures::stream::{self, Stream};
//! use std::convert::Infallible;
//!
//! async fn handler() -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
//!     let event = PatchElements::new("<p id=\"hello\">Hello</p>")
//!         .into_event()
//!         .expect("static patch");
//!     Sse::new(stream::once(async move { Ok(event) }))
//! }
//! ```
//!
//! ```html
//! <!-- In your HTML -->
//! <body data-on-load="@get('/sse')">
//!   <p id="hello"></p>
//! </body>
//! ```

mod config;
mod patch;

// Re-exports
pub use config::SseConfig;
pub use patch::{ElementPatchMode, PatchElements, PatchError, DEFAULT_RETRY, PATCH_ELEMENTS_EVENT};

// Re-export axum SSE types for convenience
pub use axum::response::sse::{Event, KeepAlive, Sse};
