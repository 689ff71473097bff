//! Route table

use axum::{routing::get, Router};

use crate::{config::RoutesConfig, handlers, state::AppState};

/// Build the router for the enabled routes
///
/// Routes are fixed once built; anything not registered answers with 404.
pub fn router(state: AppState, routes: &RoutesConfig) -> Router {
    let mut router = Router::new();

    if routes.index {
        router = router.route("/", get(handlers::index));
    }
    if routes.logged {
        router = router.route("/log", get(handlers::index_logged));
    }
    if routes.sse {
        router = router.route("/sse", get(handlers::sse));
    }

    if !(routes.index || routes.logged || routes.sse) {
        tracing::warn!("All routes are disabled; every request will return 404");
    }

    router.with_state(state)
}
