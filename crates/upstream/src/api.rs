//! REST client for the events API.
//!
//! Wraps `GET {api_url}/api/events/near` using [`reqwest`]. A single request
//! is made per call; there is no retry, and no timeout unless one is
//! configured.

use std::time::Duration;

use serde::Deserialize;
use vendorwize_core::event::Event;

/// Path of the nearby-events endpoint, relative to the API base URL.
pub const EVENTS_NEAR_PATH: &str = "/api/events/near";

/// HTTP client for the upstream events API.
#[derive(Debug, Clone)]
pub struct EventsApi {
    client: reqwest::Client,
    api_url: String,
}

/// Coordinates and radius for a nearby-events lookup.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NearbyQuery {
    pub latitude: f64,
    pub longitude: f64,
    /// Radius in miles.
    pub radius: f64,
}

/// Response envelope returned by the nearby-events endpoint.
#[derive(Debug, Deserialize)]
pub struct EventsResponse {
    pub events: Vec<Event>,
}

/// Errors from the events API layer.
#[derive(Debug, thiserror::Error)]
pub enum EventsApiError {
    /// The HTTP request itself failed (network, DNS, TLS, timeout, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The API returned a non-2xx status code.
    #[error("Events API error ({status}): {body}")]
    ApiError {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },

    /// The body was not the expected `{ "events": [...] }` JSON.
    #[error("Malformed events response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl EventsApi {
    /// Create a client for the API at `api_url` (e.g. `https://api.example.com`).
    ///
    /// A trailing slash on `api_url` is ignored. `timeout` bounds each whole
    /// request; `None` leaves the client default (no timeout).
    pub fn new(
        api_url: impl Into<String>,
        timeout: Option<Duration>,
    ) -> Result<Self, EventsApiError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self::with_client(builder.build()?, api_url))
    }

    /// Create a client reusing an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, api_url: impl Into<String>) -> Self {
        let api_url = api_url.into().trim_end_matches('/').to_string();
        Self { client, api_url }
    }

    /// Base URL requests are issued against.
    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// Fetch events near the given coordinates, in the order the API returns them.
    pub async fn events_near(&self, query: NearbyQuery) -> Result<Vec<Event>, EventsApiError> {
        let url = format!("{}{}", self.api_url, EVENTS_NEAR_PATH);
        tracing::debug!(
            %url,
            lat = query.latitude,
            lng = query.longitude,
            radius = query.radius,
            "Fetching nearby events"
        );

        let response = self
            .client
            .get(url)
            .query(&[
                ("lat", query.latitude.to_string()),
                ("lng", query.longitude.to_string()),
                ("radius", query.radius.to_string()),
            ])
            .send()
            .await?;

        let body = Self::ensure_success(response).await?.text().await?;
        let parsed: EventsResponse = serde_json::from_str(&body)?;

        tracing::debug!(count = parsed.events.len(), "Received nearby events");
        Ok(parsed.events)
    }

    // ---- private helpers ----

    /// Return the response unchanged on a success status, or an
    /// [`EventsApiError::ApiError`] carrying the status and body text.
    async fn ensure_success(
        response: reqwest::Response,
    ) -> Result<reqwest::Response, EventsApiError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(EventsApiError::ApiError {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }
}
