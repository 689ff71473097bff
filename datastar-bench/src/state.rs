//! Application state management

use std::sync::Arc;

use crate::{assets::Assets, sse::SseConfig};

/// Application state shared across handlers
///
/// Everything in here is read-only after startup, so handlers never lock.
#[derive(Debug, Clone)]
pub struct AppState {
    assets: Arc<Assets>,
    sse: Arc<SseConfig>,
}

impl AppState {
    /// Create a new AppState from loaded pages and stream settings
    pub fn new(assets: Assets, sse: SseConfig) -> Self {
        Self {
            assets: Arc::new(assets),
            sse: Arc::new(sse),
        }
    }

    /// Get the pages
    pub fn assets(&self) -> &Assets {
        &self.assets
    }

    /// Get the patch stream settings
    pub fn sse_config(&self) -> &SseConfig {
        &self.sse
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Assets::embedded(), SseConfig::default())
    }
}
