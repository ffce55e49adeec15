//! REST API endpoint handlers for the blog server.
//!
//! All handlers delegate to the injected
//! [`EventStore`](nazolog_store::EventStore) via the shared [`AppState`].
//!
//! # Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | `GET` | `/` | Minimal HTML status page |
//! | `GET` | `/api/events` | List published events |
//! | `GET` | `/api/events/all` | List all events (admin view) |
//! | `GET` | `/api/events/:id` | Get a single event by id |
//! | `GET` | `/api/events/slug/:slug` | Get a single event by slug |
//! | `POST` | `/api/events` | Create an event |
//! | `PUT` | `/api/events/:id` | Partially update an event |
//! | `DELETE` | `/api/events/:id` | Delete an event |
//! | `POST` | `/api/auth` | Password gate check |
//!
//! Update and delete mirror the store contract: they respond 200 with
//! `{"success": false}` on failure rather than an error status.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse};
use chrono::{DateTime, Utc};
use nazolog_types::{
    CreateMysteryEvent, EventFormat, EventId, MysteryEvent, UpdateMysteryEvent, generate_slug,
};

use crate::error::ApiError;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request payload structs
// ---------------------------------------------------------------------------

/// Request body for `POST /api/events`.
///
/// Same shape as [`CreateMysteryEvent`] except the slug is optional:
/// when omitted or empty a random one is generated, matching what the
/// admin form does before submitting.
#[derive(Debug, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateEventRequest {
    /// The day the author participated in the event.
    pub participation_date: DateTime<Utc>,
    /// Event title. Required non-empty.
    pub title: String,
    /// Organizing company or group. Required non-empty.
    pub organization: String,
    /// Event style.
    pub format: EventFormat,
    /// Short description. Required non-empty.
    pub overview: String,
    /// What left an impression. Defaults to empty.
    #[serde(default)]
    pub impression: String,
    /// Notes on the final puzzle. Defaults to empty.
    #[serde(default)]
    pub final_mystery: String,
    /// Whether the event is publicly visible from the start.
    #[serde(default)]
    pub published: bool,
    /// Optional pre-generated slug.
    #[serde(default)]
    pub slug: Option<String>,
}

/// Request body for `POST /api/auth`.
#[derive(Debug, serde::Deserialize)]
pub struct AuthRequest {
    /// The submitted gate password, in plaintext.
    pub password: String,
}

// ---------------------------------------------------------------------------
// GET / -- minimal HTML status page
// ---------------------------------------------------------------------------

/// Serve a minimal HTML page showing server status and API links.
pub async fn index() -> impl IntoResponse {
    Html(
        r#"<!DOCTYPE html>
<html lang="ja">
<head>
    <meta charset="utf-8">
    <title>nazolog</title>
    <style>
        body {
            background: #0d1117;
            color: #c9d1d9;
            font-family: 'Cascadia Code', 'Fira Code', 'Consolas', monospace;
            padding: 2rem;
            max-width: 800px;
            margin: 0 auto;
        }
        h1 { color: #58a6ff; margin-bottom: 0.25rem; }
        .subtitle { color: #8b949e; margin-top: 0; }
        a { color: #58a6ff; text-decoration: none; }
        a:hover { text-decoration: underline; }
        ul { list-style: none; padding: 0; }
        li { padding: 0.3rem 0; }
        .status { color: #3fb950; font-weight: bold; }
    </style>
</head>
<body>
    <h1>nazolog</h1>
    <p class="subtitle">謎解きイベント参加記録ブログ API</p>

    <p>Status: <span class="status">RUNNING</span></p>

    <h2>API Endpoints</h2>
    <ul>
        <li>GET <a href="/api/events">/api/events</a> -- Published events</li>
        <li>GET <a href="/api/events/all">/api/events/all</a> -- All events (admin)</li>
        <li>GET /api/events/:id -- Single event by id</li>
        <li>GET /api/events/slug/:slug -- Single event by slug</li>
        <li>POST /api/events -- Create an event</li>
        <li>PUT /api/events/:id -- Update an event</li>
        <li>DELETE /api/events/:id -- Delete an event</li>
        <li>POST /api/auth -- Password gate</li>
    </ul>
</body>
</html>"#,
    )
}

// ---------------------------------------------------------------------------
// GET /api/events -- published events
// ---------------------------------------------------------------------------

/// List all published events, sorted by participation date descending.
pub async fn list_published(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, ApiError> {
    let events = state.store.list_published().await?;
    Ok(Json(event_list_body(&events)))
}

// ---------------------------------------------------------------------------
// GET /api/events/all -- every event, admin view
// ---------------------------------------------------------------------------

/// List every event including unpublished drafts.
///
/// Intended for the admin screens behind the password gate; the gate is
/// cosmetic, so nothing here is actually secret.
pub async fn list_all(State(state): State<Arc<AppState>>) -> Result<impl IntoResponse, ApiError> {
    let events = state.store.list_all().await?;
    Ok(Json(event_list_body(&events)))
}

// ---------------------------------------------------------------------------
// GET /api/events/:id -- single event by id
// ---------------------------------------------------------------------------

/// Return a single event by its store-assigned id.
pub async fn get_event(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<MysteryEvent>, ApiError> {
    let id = EventId::from(id);
    let event = state
        .store
        .get_by_id(&id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("event {id}")))?;

    Ok(Json(event))
}

// ---------------------------------------------------------------------------
// GET /api/events/slug/:slug -- single event by slug
// ---------------------------------------------------------------------------

/// Return a single event by its public URL slug.
pub async fn get_event_by_slug(
    State(state): State<Arc<AppState>>,
    Path(slug): Path<String>,
) -> Result<Json<MysteryEvent>, ApiError> {
    let event = state
        .store
        .get_by_slug(&slug)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("event with slug {slug}")))?;

    Ok(Json(event))
}

// ---------------------------------------------------------------------------
// POST /api/events -- create
// ---------------------------------------------------------------------------

/// Create a new event and return its store-assigned id.
///
/// Required-field validation happens here, not in the store: the store
/// accepts whatever it is given, exactly like the admin form is the only
/// validator in the reference behavior.
pub async fn create_event(
    State(state): State<Arc<AppState>>,
    Json(request): Json<CreateEventRequest>,
) -> Result<impl IntoResponse, ApiError> {
    if request.title.is_empty() || request.organization.is_empty() || request.overview.is_empty() {
        return Err(ApiError::BadRequest(String::from(
            "title, organization, and overview are required",
        )));
    }

    let slug = request
        .slug
        .filter(|s| !s.is_empty())
        .unwrap_or_else(generate_slug);

    let data = CreateMysteryEvent {
        participation_date: request.participation_date,
        title: request.title,
        organization: request.organization,
        format: request.format,
        overview: request.overview,
        impression: request.impression,
        final_mystery: request.final_mystery,
        published: request.published,
        slug,
    };

    let id = state.store.create(&data).await?;
    tracing::info!(id = %id, title = %data.title, "Event created");

    Ok((
        StatusCode::CREATED,
        Json(serde_json::json!({ "id": id })),
    ))
}

// ---------------------------------------------------------------------------
// PUT /api/events/:id -- partial update
// ---------------------------------------------------------------------------

/// Merge the supplied fields into an event.
///
/// Responds 200 with `{"success": false}` when the id is unknown or the
/// write fails (the store swallows those failures by contract).
pub async fn update_event(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(data): Json<UpdateMysteryEvent>,
) -> impl IntoResponse {
    let id = EventId::from(id);
    let success = state.store.update(&id, &data).await;
    if !success {
        tracing::warn!(id = %id, "Event update reported failure");
    }

    Json(serde_json::json!({ "success": success }))
}

// ---------------------------------------------------------------------------
// DELETE /api/events/:id -- hard delete
// ---------------------------------------------------------------------------

/// Delete an event by id.
///
/// Responds 200 with `{"success": false}` when the id is unknown or the
/// write fails.
pub async fn delete_event(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    let id = EventId::from(id);
    let success = state.store.delete(&id).await;
    if !success {
        tracing::warn!(id = %id, "Event delete reported failure");
    }

    Json(serde_json::json!({ "success": success }))
}

// ---------------------------------------------------------------------------
// POST /api/auth -- password gate
// ---------------------------------------------------------------------------

/// Check the submitted password against the configured secret.
///
/// This is a convenience gate, not authentication: the response carries
/// no token or session, and the client merely persists a local flag plus
/// a timestamp it honors for 30 days. Anyone talking to the API directly
/// bypasses it entirely.
pub async fn authenticate(
    State(state): State<Arc<AppState>>,
    Json(request): Json<AuthRequest>,
) -> impl IntoResponse {
    if state.verify_password(&request.password) {
        (StatusCode::OK, Json(serde_json::json!({ "success": true })))
    } else {
        (
            StatusCode::UNAUTHORIZED,
            Json(serde_json::json!({ "success": false })),
        )
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Build the `{"count", "events"}` body shared by both list endpoints.
fn event_list_body(events: &[MysteryEvent]) -> serde_json::Value {
    serde_json::json!({
        "count": events.len(),
        "events": events,
    })
}
