#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::{Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use vendorwize_upstream::EventsApi;
use vendorwize_web::config::ServerConfig;
use vendorwize_web::router::build_app_router;
use vendorwize_web::state::AppState;

/// Build a test `ServerConfig` pointing at `api_url`.
pub fn test_config(api_url: &str) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        api_url: api_url.to_string(),
        upstream_timeout_secs: Some(5),
        display_timezone: chrono_tz::America::New_York,
        default_location_label: "Raleigh, NC".to_string(),
    }
}

/// Build the full application router (same middleware stack as production)
/// talking to the upstream API at `api_url`.
pub fn build_test_app(api_url: &str) -> Router {
    build_test_app_with_config(test_config(api_url))
}

/// Build the full application router from an explicit config.
pub fn build_test_app_with_config(config: ServerConfig) -> Router {
    let events_api = EventsApi::new(
        config.api_url.clone(),
        config.upstream_timeout_secs.map(Duration::from_secs),
    )
    .unwrap();

    let state = AppState {
        config: Arc::new(config),
        events_api,
    };

    build_app_router(state)
}

/// Serve `router` on an ephemeral local port and return its base URL.
pub async fn spawn_upstream(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

/// Stub upstream that waits `delay` before answering with `body`.
pub async fn spawn_slow_events_upstream(delay: Duration, body: serde_json::Value) -> String {
    let router = Router::new().route(
        "/api/events/near",
        axum::routing::get(move || {
            let body = body.clone();
            async move {
                tokio::time::sleep(delay).await;
                axum::Json(body)
            }
        }),
    );
    spawn_upstream(router).await
}

/// Stub upstream that answers `/api/events/near` with `body`.
pub async fn spawn_events_upstream(body: serde_json::Value) -> String {
    let router = Router::new().route(
        "/api/events/near",
        axum::routing::get(move || {
            let body = body.clone();
            async move { axum::Json(body) }
        }),
    );
    spawn_upstream(router).await
}

/// Base URL with nothing listening on it.
pub async fn dead_upstream() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}

/// Send a GET request to `uri` through the app.
pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    app.oneshot(request).await.unwrap()
}

/// Collect a response body as UTF-8 text.
pub async fn body_text(response: Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

/// Collect a response body as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// A minimal upstream event record.
pub fn event_json(id: &str, name: &str) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "name": name,
        "city": "Raleigh",
        "state": "NC",
        "startDate": "2026-11-07T14:00:00Z",
        "endDate": "2026-11-07T20:00:00Z",
    })
}
