pub mod events;
pub mod health;

use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the application route tree.
///
/// ```text
/// /           events listing (HTML)
/// /health     liveness check (JSON)
/// *           404 error page
/// ```
pub fn app_routes() -> Router<AppState> {
    Router::new()
        .merge(health::router())
        .merge(events::router())
        .fallback(handlers::events::not_found)
}
