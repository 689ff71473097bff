//! HTTP server
//!
//! The server runs until the process is killed. There is no graceful
//! shutdown, no request timeout and no connection limit.

use axum::Router;
use tokio::net::TcpListener;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};

use crate::{
    config::Config,
    error::{Error, Result},
};

/// Server instance
pub struct Server {
    config: Config,
}

impl Server {
    /// Create a new server instance
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Bind the configured address and serve `app` forever
    ///
    /// # Errors
    ///
    /// Returns [`Error::Bind`] if the address is unavailable. Bind failures
    /// are not retried.
    pub async fn serve(self, app: Router) -> Result<()> {
        let addr = self.config.service.socket_addr();

        tracing::info!("Starting {} on {}", self.config.service.name, addr);

        let listener = TcpListener::bind(addr)
            .await
            .map_err(|source| Error::Bind { addr, source })?;

        self.serve_on(listener, app).await
    }

    /// Serve `app` on an already bound listener
    pub async fn serve_on(self, listener: TcpListener, app: Router) -> Result<()> {
        let app = if self.config.service.trace_requests {
            tracing::info!("Request tracing: enabled");
            app.layer(
                TraceLayer::new_for_http()
                    .make_span_with(DefaultMakeSpan::new().include_headers(true))
                    .on_response(DefaultOnResponse::new().include_headers(true)),
            )
        } else {
            app
        };

        tracing::info!("Server listening on http://{}", listener.local_addr()?);

        axum::serve(listener, app).await?;

        Ok(())
    }
}
