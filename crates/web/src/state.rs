use std::sync::Arc;

use vendorwize_upstream::EventsApi;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable and read-only; nothing here changes between requests.
#[derive(Clone)]
pub struct AppState {
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Client for the upstream events API.
    pub events_api: EventsApi,
}
