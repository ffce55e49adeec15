//! Integration tests for the blog API endpoints.
//!
//! Tests use Axum's `Router` directly via `tower::ServiceExt` without
//! starting a TCP server, with a zero-latency in-memory store injected
//! in place of the hybrid selector. This validates handler logic and
//! routing without needing a live network connection or database.

#![allow(clippy::unwrap_used)]

use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use nazolog_server::router::build_router;
use nazolog_server::state::AppState;
use nazolog_store::{EventStore, MemoryStore};
use serde_json::{Value, json};
use tower::ServiceExt;

/// Gate password configured for every test state.
const TEST_PASSWORD: &str = "test-password";

fn make_test_state() -> Arc<AppState> {
    let store: Arc<dyn EventStore> =
        Arc::new(MemoryStore::new().with_latency(Duration::ZERO, Duration::ZERO));
    Arc::new(AppState::new(store, String::from(TEST_PASSWORD)))
}

async fn body_to_json(body: Body) -> Value {
    let bytes = axum::body::to_bytes(body, usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn json_request(method: &str, path: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(path)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_vec(body).unwrap()))
        .unwrap()
}

fn create_body(title: &str, date: &str, published: bool) -> Value {
    json!({
        "participationDate": date,
        "title": title,
        "organization": "テスト団体",
        "format": "ホール型",
        "overview": "テスト概要",
        "published": published,
    })
}

// =========================================================================
// Status page and routing
// =========================================================================

#[tokio::test]
async fn index_returns_html() {
    let router = build_router(make_test_state());

    let response = router
        .oneshot(Request::get("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response
        .headers()
        .get("content-type")
        .unwrap()
        .to_str()
        .unwrap();
    assert!(content_type.contains("text/html"));
}

#[tokio::test]
async fn nonexistent_route_returns_404() {
    let router = build_router(make_test_state());

    let response = router
        .oneshot(
            Request::get("/api/nonexistent")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// =========================================================================
// Listing
// =========================================================================

#[tokio::test]
async fn published_listing_serves_seed_events_sorted() {
    let router = build_router(make_test_state());

    let response = router
        .oneshot(Request::get("/api/events").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_to_json(response.into_body()).await;
    assert_eq!(body["count"], 3);
    // Participation date descending: 12-15, 12-10, 11-20.
    assert_eq!(body["events"][0]["slug"], "conan-escape-game-2024");
    assert_eq!(body["events"][1]["slug"], "hotel-mystery-room-2024");
    assert_eq!(body["events"][2]["slug"], "tokyo-station-mystery-2024");
}

#[tokio::test]
async fn admin_listing_includes_drafts() {
    let state = make_test_state();
    let router = build_router(Arc::clone(&state));

    // A draft does not appear publicly but does in the admin view.
    let response = router
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/events",
            &create_body("下書き", "2025-01-05T00:00:00Z", false),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let published = body_to_json(
        router
            .clone()
            .oneshot(Request::get("/api/events").body(Body::empty()).unwrap())
            .await
            .unwrap()
            .into_body(),
    )
    .await;
    assert_eq!(published["count"], 3);

    let all = body_to_json(
        router
            .oneshot(Request::get("/api/events/all").body(Body::empty()).unwrap())
            .await
            .unwrap()
            .into_body(),
    )
    .await;
    assert_eq!(all["count"], 4);
}

// =========================================================================
// Single-event lookup
// =========================================================================

#[tokio::test]
async fn get_event_by_id() {
    let router = build_router(make_test_state());

    let response = router
        .oneshot(
            Request::get("/api/events/sample-2")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_to_json(response.into_body()).await;
    assert_eq!(body["organization"], "謎解き東京");
    assert_eq!(body["format"], "周遊型");
}

#[tokio::test]
async fn get_event_unknown_id_returns_404() {
    let router = build_router(make_test_state());

    let response = router
        .oneshot(
            Request::get("/api/events/no-such-id")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn get_event_by_slug() {
    let router = build_router(make_test_state());

    let response = router
        .oneshot(
            Request::get("/api/events/slug/hotel-mystery-room-2024")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_to_json(response.into_body()).await;
    assert_eq!(body["id"], "sample-3");
}

#[tokio::test]
async fn get_event_unassigned_slug_returns_404() {
    let router = build_router(make_test_state());

    let response = router
        .oneshot(
            Request::get("/api/events/slug/never-assigned")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// =========================================================================
// Create
// =========================================================================

#[tokio::test]
async fn create_then_fetch_round_trips() {
    let router = build_router(make_test_state());

    let response = router
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/events",
            &create_body("新作イベント", "2025-02-01T00:00:00Z", true),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = body_to_json(response.into_body()).await;
    let id = body["id"].as_str().unwrap().to_owned();
    assert!(id.starts_with("event_"));

    let fetched = body_to_json(
        router
            .oneshot(
                Request::get(format!("/api/events/{id}"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap()
            .into_body(),
    )
    .await;
    assert_eq!(fetched["title"], "新作イベント");
    assert_eq!(fetched["createdAt"], fetched["updatedAt"]);
    // No slug was supplied, so a 12-character one was generated.
    assert_eq!(fetched["slug"].as_str().unwrap().len(), 12);
}

#[tokio::test]
async fn create_with_missing_title_returns_400() {
    let router = build_router(make_test_state());

    let response = router
        .oneshot(json_request(
            "POST",
            "/api/events",
            &create_body("", "2025-02-01T00:00:00Z", true),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// =========================================================================
// Update and delete
// =========================================================================

#[tokio::test]
async fn update_merges_and_preserves_slug() {
    let router = build_router(make_test_state());

    let response = router
        .clone()
        .oneshot(json_request(
            "PUT",
            "/api/events/sample-1",
            &json!({ "title": "X" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_to_json(response.into_body()).await;
    assert_eq!(body["success"], true);

    let fetched = body_to_json(
        router
            .oneshot(
                Request::get("/api/events/sample-1")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap()
            .into_body(),
    )
    .await;
    assert_eq!(fetched["title"], "X");
    assert_eq!(fetched["slug"], "conan-escape-game-2024");
    assert_eq!(fetched["organization"], "SCRAP");
}

#[tokio::test]
async fn update_nonexistent_id_reports_failure_without_error_status() {
    let router = build_router(make_test_state());

    let response = router
        .oneshot(json_request(
            "PUT",
            "/api/events/nonexistent-id",
            &json!({ "title": "Y" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_to_json(response.into_body()).await;
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn delete_succeeds_once_then_reports_failure() {
    let router = build_router(make_test_state());

    let first = router
        .clone()
        .oneshot(
            Request::delete("/api/events/sample-3")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(body_to_json(first.into_body()).await["success"], true);

    let fetch = router
        .clone()
        .oneshot(
            Request::get("/api/events/sample-3")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(fetch.status(), StatusCode::NOT_FOUND);

    let second = router
        .oneshot(
            Request::delete("/api/events/sample-3")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(body_to_json(second.into_body()).await["success"], false);
}

// =========================================================================
// Password gate
// =========================================================================

#[tokio::test]
async fn auth_accepts_the_configured_password() {
    let router = build_router(make_test_state());

    let response = router
        .oneshot(json_request(
            "POST",
            "/api/auth",
            &json!({ "password": TEST_PASSWORD }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_to_json(response.into_body()).await;
    assert_eq!(body["success"], true);
}

#[tokio::test]
async fn auth_rejects_a_wrong_password() {
    let router = build_router(make_test_state());

    let response = router
        .oneshot(json_request(
            "POST",
            "/api/auth",
            &json!({ "password": "wrong" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body = body_to_json(response.into_body()).await;
    assert_eq!(body["success"], false);
}
