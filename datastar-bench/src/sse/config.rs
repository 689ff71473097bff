//! SSE configuration types.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::patch::{ElementPatchMode, PatchElements};

/// SSE stream configuration.
///
/// # Example
///
/// ```toml
/// [sse]
/// retry_ms = 1000
/// keep_alive_interval_secs = 15
/// hold_open = false
/// selector = "#content"
/// mode = "inner"
/// use_view_transition = false
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SseConfig {
    /// Retry interval for clients in milliseconds (default: 1000).
    ///
    /// Only sent in the `retry:` field when it differs from Datastar's default.
    #[serde(default = "default_retry_ms")]
    pub retry_ms: u64,

    /// Keep-alive interval in seconds (0 = no keep-alive, default: 15).
    ///
    /// Only relevant when `hold_open` is set.
    #[serde(default = "default_keep_alive_interval")]
    pub keep_alive_interval_secs: u64,

    /// Keep the stream open after the patch has been sent (default: false).
    #[serde(default)]
    pub hold_open: bool,

    /// CSS selector the patch targets (empty: match by element id).
    #[serde(default)]
    pub selector: String,

    /// Patch mode (default: outer).
    #[serde(default)]
    pub mode: ElementPatchMode,

    /// Wrap patches in a view transition (default: false).
    #[serde(default)]
    pub use_view_transition: bool,
}

impl SseConfig {
    /// Get the retry interval as a Duration.
    #[must_use]
    pub fn retry(&self) -> Duration {
        Duration::from_millis(self.retry_ms)
    }

    /// Get the keep-alive interval as a Duration, or None if disabled.
    #[must_use]
    pub fn keep_alive_interval(&self) -> Option<Duration> {
        if self.keep_alive_interval_secs == 0 {
            None
        } else {
            Some(Duration::from_secs(self.keep_alive_interval_secs))
        }
    }

    /// Build a patch for `elements` using the configured options.
    #[must_use]
    pub fn patch(&self, elements: impl Into<String>) -> PatchElements {
        PatchElements::new(elements)
            .selector(self.selector.as_str())
            .mode(self.mode)
            .use_view_transition(self.use_view_transition)
            .retry(self.retry())
    }
}

impl Default for SseConfig {
    fn default() -> Self {
        Self {
            retry_ms: default_retry_ms(),
            keep_alive_interval_secs: default_keep_alive_interval(),
            hold_open: false,
            selector: String::new(),
            mode: ElementPatchMode::default(),
            use_view_transition: false,
        }
    }
}

fn default_retry_ms() -> u64 {
    1000
}

fn default_keep_alive_interval() -> u64 {
    15
}
