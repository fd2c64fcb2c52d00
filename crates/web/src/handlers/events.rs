//! Handlers for the events listing page.

use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::http::Uri;
use axum::response::Html;
use vendorwize_core::render::{render_events_page, RenderContext};
use vendorwize_upstream::NearbyQuery;

use crate::error::{AppError, AppResult};
use crate::query::ListingParams;
use crate::state::AppState;

/// GET /
///
/// Fetch events near the requested coordinates and render the listing.
/// Malformed query strings fall back to the default location; upstream
/// failures render the error page.
pub async fn list_events(
    State(state): State<AppState>,
    params: Result<Query<ListingParams>, QueryRejection>,
) -> AppResult<Html<String>> {
    let params = match params {
        Ok(Query(params)) => params,
        Err(rejection) => {
            tracing::debug!(error = %rejection, "Ignoring malformed query string");
            ListingParams::default()
        }
    };
    let location = params.resolve(&state.config.default_location_label);

    let events = state
        .events_api
        .events_near(NearbyQuery {
            latitude: location.latitude,
            longitude: location.longitude,
            radius: location.radius,
        })
        .await?;

    tracing::info!(
        count = events.len(),
        lat = location.latitude,
        lng = location.longitude,
        radius = location.radius,
        "Rendering events page"
    );

    let ctx = RenderContext::now(state.config.display_timezone);
    Ok(Html(render_events_page(&events, &location, &ctx)))
}

/// Fallback for unmatched routes.
pub async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(uri.path().to_string())
}
