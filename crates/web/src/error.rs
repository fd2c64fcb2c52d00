use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use vendorwize_core::render::render_error_page;
use vendorwize_upstream::EventsApiError;

/// Shown when the upstream events API could not be used.
pub const LOAD_FAILED_MESSAGE: &str = "Failed to load events. Please try again later.";

/// Shown for routes that do not exist.
pub const NOT_FOUND_MESSAGE: &str = "The page you were looking for does not exist.";

/// Shown for anything unexpected, including panics while rendering.
pub const INTERNAL_ERROR_MESSAGE: &str = "An unexpected error occurred. Please try again later.";

/// Application-level error type for HTTP handlers.
///
/// Implements [`IntoResponse`] by logging the detail server-side and
/// rendering the HTML error page with a generic message. Error detail never
/// reaches the client.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// The upstream events API failed (network, status, or body).
    #[error("Upstream error: {0}")]
    Upstream(#[from] EventsApiError),

    /// No route matched the request.
    #[error("Not found: {0}")]
    NotFound(String),

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            // Upstream failures keep a 200 so the error page renders as a
            // normal page in every browser and proxy.
            AppError::Upstream(err) => {
                tracing::error!(error = %err, "Failed to fetch events");
                (StatusCode::OK, LOAD_FAILED_MESSAGE)
            }
            AppError::NotFound(path) => {
                tracing::debug!(%path, "No route matched");
                (StatusCode::NOT_FOUND, NOT_FOUND_MESSAGE)
            }
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR_MESSAGE)
            }
        };

        (status, Html(render_error_page(message))).into_response()
    }
}
