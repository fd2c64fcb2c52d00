//! Integration tests for the events listing page (`GET /`).
//!
//! Each test stands up a stub upstream events API on a local port and drives
//! the real router (with its full middleware stack) against it.

mod common;

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::extract::Query;
use axum::http::StatusCode;
use axum::routing::get as get_route;
use axum::Router;
use common::{body_text, event_json, get};
use vendorwize_web::error::LOAD_FAILED_MESSAGE;

type SeenParams = Arc<Mutex<Vec<HashMap<String, String>>>>;

/// Stub upstream that records every query string it receives.
async fn recording_upstream(body: serde_json::Value) -> (String, SeenParams) {
    let seen: SeenParams = Arc::default();
    let seen_clone = Arc::clone(&seen);
    let router = Router::new().route(
        "/api/events/near",
        get_route(move |Query(params): Query<HashMap<String, String>>| {
            let seen = Arc::clone(&seen_clone);
            let body = body.clone();
            async move {
                seen.lock().unwrap().push(params);
                axum::Json(body)
            }
        }),
    );
    (common::spawn_upstream(router).await, seen)
}

// ---------------------------------------------------------------------------
// Test: events are rendered as cards, in upstream order, as HTML
// ---------------------------------------------------------------------------

#[tokio::test]
async fn renders_events_in_upstream_order() {
    let upstream = common::spawn_events_upstream(serde_json::json!({
        "events": [
            event_json("b", "Boylan Heights Artwalk"),
            event_json("a", "Apex Farmers Market"),
        ]
    }))
    .await;
    let app = common::build_test_app(&upstream);

    let response = get(app, "/").await;

    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response.headers()["content-type"].to_str().unwrap().to_string();
    assert!(content_type.starts_with("text/html"), "got {content_type}");

    let html = body_text(response).await;
    assert_eq!(html.matches(r#"class="event-card""#).count(), 2);
    let boylan = html.find("Boylan Heights Artwalk").unwrap();
    let apex = html.find("Apex Farmers Market").unwrap();
    assert!(boylan < apex);
}

// ---------------------------------------------------------------------------
// Test: empty upstream list renders the placeholder and no cards
// ---------------------------------------------------------------------------

#[tokio::test]
async fn empty_list_renders_placeholder() {
    let upstream = common::spawn_events_upstream(serde_json::json!({ "events": [] })).await;
    let app = common::build_test_app(&upstream);

    let html = body_text(get(app, "/").await).await;

    assert!(html.contains("No events found in your area. Check back soon!"));
    assert!(!html.contains(r#"class="event-card""#));
}

// ---------------------------------------------------------------------------
// Test: missing attendance omits the line; seven tags show five
// ---------------------------------------------------------------------------

#[tokio::test]
async fn card_details_follow_record_fields() {
    let mut tagged = event_json("t", "Tag Fest");
    tagged["tags"] = serde_json::json!(["a1", "a2", "a3", "a4", "a5", "a6", "a7"]);
    tagged["category"] = serde_json::json!("craft_fair");
    tagged["boothFeeMin"] = serde_json::json!(500);
    tagged["boothFeeMax"] = serde_json::json!(1500);

    let upstream = common::spawn_events_upstream(serde_json::json!({ "events": [tagged] })).await;
    let app = common::build_test_app(&upstream);

    let html = body_text(get(app, "/").await).await;

    assert!(!html.contains("expected</span>"));
    assert_eq!(html.matches(r#"class="event-tag""#).count(), 5);
    assert!(!html.contains("#a6"));
    assert!(html.contains("craft fair</span>"));
    assert!(html.contains("$5 - $15"));
}

// ---------------------------------------------------------------------------
// Test: defaults are forwarded upstream and the default label is shown
// ---------------------------------------------------------------------------

#[tokio::test]
async fn default_coordinates_are_forwarded() {
    let (upstream, seen) = recording_upstream(serde_json::json!({ "events": [] })).await;
    let app = common::build_test_app(&upstream);

    let html = body_text(get(app, "/").await).await;

    let seen = seen.lock().unwrap();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0]["lat"], "35.7796");
    assert_eq!(seen[0]["lng"], "-78.6382");
    assert_eq!(seen[0]["radius"], "50");
    assert!(html.contains("Find vendor events near Raleigh, NC (50 mile radius)"));
}

// ---------------------------------------------------------------------------
// Test: explicit coordinates are forwarded and shown
// ---------------------------------------------------------------------------

#[tokio::test]
async fn explicit_coordinates_are_forwarded() {
    let (upstream, seen) = recording_upstream(serde_json::json!({ "events": [] })).await;
    let app = common::build_test_app(&upstream);

    let html = body_text(get(app, "/?lat=35.9132&lng=-79.0558&radius=25").await).await;

    let seen = seen.lock().unwrap();
    assert_eq!(seen[0]["lat"], "35.9132");
    assert_eq!(seen[0]["lng"], "-79.0558");
    assert_eq!(seen[0]["radius"], "25");
    assert!(html.contains("near 35.9132, -79.0558 (25 mile radius)"));
}

// ---------------------------------------------------------------------------
// Test: unparseable query values are normalised, never an error
// ---------------------------------------------------------------------------

#[tokio::test]
async fn malformed_query_falls_back_to_defaults() {
    let (upstream, seen) = recording_upstream(serde_json::json!({ "events": [] })).await;
    let app = common::build_test_app(&upstream);

    let response = get(app, "/?lat=abc&lng=&radius=wide&lat=again").await;

    assert_eq!(response.status(), StatusCode::OK);
    let seen = seen.lock().unwrap();
    assert_eq!(seen[0]["lat"], "35.7796");
    assert_eq!(seen[0]["lng"], "-78.6382");
    assert_eq!(seen[0]["radius"], "50");
}

// ---------------------------------------------------------------------------
// Test: unreachable upstream renders the error page with 200
// ---------------------------------------------------------------------------

#[tokio::test]
async fn unreachable_upstream_renders_error_page() {
    let app = common::build_test_app(&common::dead_upstream().await);

    let response = get(app, "/").await;

    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains("Something went wrong"));
    assert!(html.contains(LOAD_FAILED_MESSAGE));
    assert!(!html.contains("HTTP request failed"));
    assert!(!html.contains("event-card"));
}

// ---------------------------------------------------------------------------
// Test: upstream error status renders the error page without its body
// ---------------------------------------------------------------------------

#[tokio::test]
async fn upstream_error_status_renders_error_page() {
    let router = Router::new().route(
        "/api/events/near",
        get_route(|| async {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "panic at repository.rs:88 connection refused",
            )
        }),
    );
    let app = common::build_test_app(&common::spawn_upstream(router).await);

    let response = get(app, "/").await;

    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains(LOAD_FAILED_MESSAGE));
    assert!(!html.contains("repository.rs"));
}

// ---------------------------------------------------------------------------
// Test: a non-JSON upstream body renders the error page
// ---------------------------------------------------------------------------

#[tokio::test]
async fn non_json_upstream_renders_error_page() {
    let router = Router::new().route(
        "/api/events/near",
        get_route(|| async { "<html>gateway</html>" }),
    );
    let app = common::build_test_app(&common::spawn_upstream(router).await);

    let html = body_text(get(app, "/").await).await;

    assert!(html.contains(LOAD_FAILED_MESSAGE));
    assert!(!html.contains("gateway"));
}

// ---------------------------------------------------------------------------
// Test: an upstream slower than the client timeout renders the error page
// ---------------------------------------------------------------------------

#[tokio::test]
async fn slow_upstream_past_client_timeout_renders_error_page() {
    let upstream = common::spawn_slow_events_upstream(
        Duration::from_secs(3),
        serde_json::json!({ "events": [] }),
    )
    .await;
    let mut config = common::test_config(&upstream);
    config.upstream_timeout_secs = Some(1);
    let app = common::build_test_app_with_config(config);

    let response = get(app, "/").await;

    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains("Something went wrong"));
    assert!(html.contains(LOAD_FAILED_MESSAGE));
}

// ---------------------------------------------------------------------------
// Test: without a client timeout, a slow upstream still renders the listing
// ---------------------------------------------------------------------------

#[tokio::test]
async fn slow_upstream_without_timeout_is_waited_for() {
    let upstream = common::spawn_slow_events_upstream(
        Duration::from_millis(1500),
        serde_json::json!({ "events": [event_json("s", "Slowpoke Swap Meet")] }),
    )
    .await;
    let mut config = common::test_config(&upstream);
    config.upstream_timeout_secs = None;
    let app = common::build_test_app_with_config(config);

    let response = get(app, "/").await;

    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains("Slowpoke Swap Meet"));
    assert!(!html.contains(LOAD_FAILED_MESSAGE));
}

// ---------------------------------------------------------------------------
// Test: float-typed counts and fees from the upstream still render
// ---------------------------------------------------------------------------

#[tokio::test]
async fn float_counts_render_as_integers() {
    let mut event = event_json("f", "Float Fair");
    event["expectedAttendance"] = serde_json::json!(1500.0);
    event["boothFeeMin"] = serde_json::json!(2500.0);
    event["boothFeeMax"] = serde_json::json!("5000");

    let upstream = common::spawn_events_upstream(serde_json::json!({ "events": [event] })).await;
    let app = common::build_test_app(&upstream);

    let response = get(app, "/").await;

    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains("Float Fair"));
    assert!(html.contains("1,500 expected"));
    assert!(html.contains("$25 - $50"));
    assert!(!html.contains(LOAD_FAILED_MESSAGE));
}
