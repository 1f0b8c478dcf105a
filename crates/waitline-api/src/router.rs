//! Axum router construction for the Waitline API.
//!
//! Assembles all routes into a single [`Router`] with CORS middleware
//! enabled so the Vue dev server (a different origin) can call the API.

use std::sync::Arc;

use axum::routing::get;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Build the complete Axum router for the Waitline server.
///
/// The router includes:
/// - `GET /` -- minimal HTML status page
/// - `GET /api/restaurants` -- restaurants with crowd colors
/// - `POST /api/restaurants/:id/queue` -- join the waiting line
/// - `DELETE /api/restaurants/:id/queue` -- leave the waiting line
/// - `GET /api/restaurants/:id/queue/status` -- public queue view
/// - `GET /api/restaurants/:id/queue/next` -- operator call board
/// - `GET /api/user/:user_id/queue` -- a guest's place in line
/// - `GET /api/restaurants/:id/tables` -- seat map
/// - `POST /api/restaurants/:id/tables/:table_id/status` -- seat or clear
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
        // Discovery
        .route("/api/restaurants", get(handlers::list_restaurants))
        // Queue
        .route(
            "/api/restaurants/{restaurant_id}/queue",
            axum::routing::post(handlers::join_queue).delete(handlers::leave_queue),
        )
        .route(
            "/api/restaurants/{restaurant_id}/queue/status",
            get(handlers::queue_status),
        )
        .route(
            "/api/restaurants/{restaurant_id}/queue/next",
            get(handlers::queue_next),
        )
        .route("/api/user/{user_id}/queue", get(handlers::guest_queue))
        // Tables
        .route(
            "/api/restaurants/{restaurant_id}/tables",
            get(handlers::list_tables),
        )
        .route(
            "/api/restaurants/{restaurant_id}/tables/{table_id}/status",
            axum::routing::post(handlers::update_table_status),
        )
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
