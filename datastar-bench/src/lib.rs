//! # datastar-bench
//!
//! A small HTTP server for measuring how quickly a static page can be served,
//! either as a plain HTML response or as a single Datastar patch event over
//! server-sent events.
//!
//! ## Routes
//!
//! - `GET /`: the index page, timing logged at INFO
//! - `GET /log`: the index page, timing logged at INFO
//! - `GET /sse`: an event stream carrying one `datastar-patch-elements` event
//!
//! Each route can be switched off in configuration.
//!
//! ## Example
//!
//! ```rust,no_run
//! use datastar_bench::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     // Load configuration
//!     let config = Config::load()?;
//!
//!     // Initialize tracing
//!     init_tracing(&config)?;
//!
//!     // Pages are read before the listener is bound
//!     let assets = Assets::load(&config.assets).await?;
//!     let state = AppState::new(assets, config.sse.clone());
//!     let app = router(state, &config.routes);
//!
//!     // Run server
//!     Server::new(config).serve(app).await
//! }
//! ```

pub mod assets;
pub mod config;
pub mod error;
pub mod handlers;
pub mod observability;
pub mod routes;
pub mod server;
pub mod sse;
pub mod state;
pub mod timing;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::assets::{AssetSource, Assets, Document};
    pub use crate::config::{AssetsConfig, Config, LogFormat, RoutesConfig, ServiceConfig};
    pub use crate::error::{Error, Result};
    pub use crate::observability::init_tracing;
    pub use crate::routes::router;
    pub use crate::server::Server;
    pub use crate::sse::{ElementPatchMode, PatchElements, SseConfig};
    pub use crate::state::AppState;
    pub use crate::timing::HandlerTimer;
}
