//! Axum router construction for the blog API.
//!
//! Assembles all routes into a single [`Router`] with CORS middleware
//! enabled so the browser frontend can call the API cross-origin.

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Build the complete Axum router for the blog server.
///
/// The router includes:
/// - `GET /` -- minimal HTML status page
/// - `GET /api/events` -- published events
/// - `POST /api/events` -- create an event
/// - `GET /api/events/all` -- all events (admin view)
/// - `GET /api/events/slug/:slug` -- single event by slug
/// - `GET|PUT|DELETE /api/events/:id` -- single event by id
/// - `POST /api/auth` -- password gate
///
/// CORS is configured to allow any origin for development. In
/// production this should be restricted.
pub fn build_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Status page
        .route("/", get(handlers::index))
        // Password gate
        .route("/api/auth", post(handlers::authenticate))
        // REST API
        .route(
            "/api/events",
            get(handlers::list_published).post(handlers::create_event),
        )
        .route("/api/events/all", get(handlers::list_all))
        .route("/api/events/slug/{slug}", get(handlers::get_event_by_slug))
        .route(
            "/api/events/{id}",
            get(handlers::get_event)
                .put(handlers::update_event)
                .delete(handlers::delete_event),
        )
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
