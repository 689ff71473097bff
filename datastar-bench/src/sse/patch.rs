//! Datastar `patch-elements` events.
//!
//! Datastar's SSE protocol carries DOM patches as named events whose data
//! lines are `key value` pairs. A patch that morphs the page's `<main>`
//! element looks like this on the wire:
//!
//! ```text
//! event: datastar-patch-elements
//! data: selector #content
//! data: mode inner
//! data: elements <main id="content">
//! data: elements   <p>Hello</p>
//! data: elements </main>
//!
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use datastar_bench::sse::{ElementPatchMode, PatchElements};
//!
//! let event = PatchElements::new("<p id=\"greeting\">Hello</p>")
//!     .mode(ElementPatchMode::Outer)
//!     .into_event()?;
//! ```

use axum::response::sse::Event;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;
use thiserror::Error;

/// Event name Datastar listens for when patching elements.
pub const PATCH_ELEMENTS_EVENT: &str = "datastar-patch-elements";

/// Reconnect delay Datastar clients assume when no `retry:` field is sent.
pub const DEFAULT_RETRY: Duration = Duration::from_millis(1000);

/// Errors raised while building a patch event.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatchError {
    /// Event ids must fit on a single SSE line.
    #[error("event id must not contain line breaks or NUL characters")]
    InvalidEventId,

    /// Selectors are sent as a single data line.
    #[error("selector must not contain line breaks")]
    InvalidSelector,
}

/// How the client applies the patched elements to the DOM.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementPatchMode {
    /// Morph the outer HTML of the target (default).
    #[default]
    Outer,
    /// Morph the inner HTML of the target.
    Inner,
    /// Replace the target without morphing.
    Replace,
    /// Insert as first child.
    Prepend,
    /// Insert as last child.
    Append,
    /// Insert before the target.
    Before,
    /// Insert after the target.
    After,
    /// Remove the target.
    Remove,
}

impl ElementPatchMode {
    /// Get the value sent on the `mode` data line.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Outer => "outer",
            Self::Inner => "inner",
            Self::Replace => "replace",
            Self::Prepend => "prepend",
            Self::Append => "append",
            Self::Before => "before",
            Self::After => "after",
            Self::Remove => "remove",
        }
    }
}

impl fmt::Display for ElementPatchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Builder for a single `datastar-patch-elements` event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatchElements {
    /// HTML to patch in.
    pub elements: String,
    /// CSS selector of the target; when absent the client matches by element id.
    pub selector: Option<String>,
    /// Patch mode.
    pub mode: ElementPatchMode,
    /// Wrap the patch in a view transition.
    pub use_view_transition: bool,
    /// Event ID for reconnection (optional).
    pub id: Option<String>,
    /// Reconnect delay hint.
    pub retry: Duration,
}

impl PatchElements {
    /// Create a patch that morphs `elements` into the page.
    #[must_use]
    pub fn new(elements: impl Into<String>) -> Self {
        Self {
            elements: elements.into(),
            selector: None,
            mode: ElementPatchMode::default(),
            use_view_transition: false,
            id: None,
            retry: DEFAULT_RETRY,
        }
    }

    /// Set the target selector. An empty selector clears it.
    #[must_use]
    pub fn selector(mut self, selector: impl Into<String>) -> Self {
        let selector = selector.into();
        self.selector = (!selector.is_empty()).then_some(selector);
        self
    }

    /// Set the patch mode.
    #[must_use]
    pub fn mode(mut self, mode: ElementPatchMode) -> Self {
        self.mode = mode;
        self
    }

    /// Enable or disable view transitions.
    #[must_use]
    pub fn use_view_transition(mut self, enabled: bool) -> Self {
        self.use_view_transition = enabled;
        self
    }

    /// Set the event ID.
    #[must_use]
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Set the retry interval.
    #[must_use]
    pub fn retry(mut self, retry: Duration) -> Self {
        self.retry = retry;
        self
    }

    /// Data lines in the order Datastar reads them, without the `data: ` prefix.
    ///
    /// Line endings in the HTML are normalised to `\n` and every resulting
    /// line becomes its own `elements` entry.
    #[must_use]
    pub fn data_lines(&self) -> Vec<String> {
        let mut lines = Vec::new();

        if let Some(selector) = &self.selector {
            lines.push(format!("selector {selector}"));
        }
        if self.mode != ElementPatchMode::Outer {
            lines.push(format!("mode {}", self.mode));
        }
        if self.use_view_transition {
            lines.push("useViewTransition true".to_string());
        }
        if !self.elements.is_empty() {
            let normalized = self.elements.replace("\r\n", "\n").replace('\r', "\n");
            lines.extend(normalized.split('\n').map(|line| format!("elements {line}")));
        }

        lines
    }

    /// Convert to axum Event.
    ///
    /// # Errors
    ///
    /// Returns an error if the id or selector would break SSE framing.
    pub fn into_event(self) -> Result<Event, PatchError> {
        if let Some(id) = &self.id {
            if id.contains(['\r', '\n', '\0']) {
                return Err(PatchError::InvalidEventId);
            }
        }
        if let Some(selector) = &self.selector {
            if selector.contains(['\r', '\n']) {
                return Err(PatchError::InvalidSelector);
            }
        }

        let lines = self.data_lines();
        let mut event = Event::default().event(PATCH_ELEMENTS_EVENT);

        if let Some(id) = self.id {
            event = event.id(id);
        }
        if self.retry != DEFAULT_RETRY {
            event = event.retry(self.retry);
        }
        if !lines.is_empty() {
            event = event.data(lines.join("\n"));
        }

        Ok(event)
    }
}
