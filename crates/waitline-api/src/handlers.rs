//! REST API endpoint handlers for the Waitline server.
//!
//! All handlers read and mutate the in-memory [`Venue`] via the shared
//! [`AppState`]. No database access is involved; restart resets the
//! state to the seed venue.
//!
//! # Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | `GET` | `/` | Minimal HTML status page |
//! | `GET` | `/api/restaurants` | List restaurants with crowd colors |
//! | `POST` | `/api/restaurants/{id}/queue` | Join the waiting line |
//! | `DELETE` | `/api/restaurants/{id}/queue` | Leave the waiting line |
//! | `GET` | `/api/restaurants/{id}/queue/status` | Public queue view |
//! | `GET` | `/api/restaurants/{id}/queue/next` | Operator call board |
//! | `GET` | `/api/user/{user_id}/queue` | A guest's own place in line |
//! | `GET` | `/api/restaurants/{id}/tables` | Seat map |
//! | `POST` | `/api/restaurants/{id}/tables/{table_id}/status` | Seat or clear a table |
//!
//! [`Venue`]: waitline_core::Venue

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse};
use axum::Json;
use chrono::{DateTime, Utc};

use waitline_types::{GuestId, RestaurantId, TableId, TableStatus, TicketNumber};

use crate::error::ApiError;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /api/restaurants/{id}/queue`.
#[derive(Debug, serde::Deserialize)]
pub struct JoinQueueRequest {
    /// The guest joining the line.
    pub user_id: GuestId,
}

/// Request body for `DELETE /api/restaurants/{id}/queue`.
#[derive(Debug, serde::Deserialize)]
pub struct LeaveQueueRequest {
    /// The guest leaving the line.
    pub user_id: GuestId,
}

/// Request body for `POST /api/restaurants/{id}/tables/{table_id}/status`.
#[derive(Debug, serde::Deserialize)]
pub struct UpdateTableStatusRequest {
    /// The occupancy state to put the table in.
    pub action: TableStatus,
    /// The called ticket being seated. Ignored (and omittable) when
    /// clearing a table.
    #[serde(default = "no_ticket")]
    pub queue_ticket_number: TicketNumber,
}

const fn no_ticket() -> TicketNumber {
    TicketNumber(0)
}

/// Response body for `POST /api/restaurants/{id}/tables/{table_id}/status`.
#[derive(Debug, serde::Serialize)]
struct UpdateTableStatusResponse {
    /// The table that changed.
    table_id: TableId,
    /// Its new occupancy status.
    new_status: TableStatus,
    /// When the change was applied (ISO-8601).
    updated_at: DateTime<Utc>,
}

// ---------------------------------------------------------------------------
// GET / -- minimal HTML status page
// ---------------------------------------------------------------------------

/// Serve a minimal HTML page showing server status and API links.
///
/// This is the operator's sanity check that the backend is up; the real
/// guest experience lives in the Vue frontend.
pub async fn index(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let venue = state.venue.read().await;
    let restaurant_count = venue.directory.len();
    let waiting_count = venue.ledger.len();

    Html(format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <title>Waitline</title>
    <style>
        body {{
            background: #0d1117;
            color: #c9d1d9;
            font-family: 'Cascadia Code', 'Fira Code', 'Consolas', monospace;
            padding: 2rem;
            max-width: 800px;
            margin: 0 auto;
        }}
        h1 {{ color: #58a6ff; margin-bottom: 0.25rem; }}
        .subtitle {{ color: #8b949e; margin-top: 0; }}
        .metric {{
            display: inline-block;
            background: #161b22;
            border: 1px solid #30363d;
            border-radius: 6px;
            padding: 1rem 1.5rem;
            margin: 0.5rem 0.5rem 0.5rem 0;
            min-width: 120px;
        }}
        .metric .label {{ color: #8b949e; font-size: 0.85rem; }}
        .metric .value {{ color: #58a6ff; font-size: 1.5rem; font-weight: bold; }}
        a {{ color: #58a6ff; text-decoration: none; }}
        a:hover {{ text-decoration: underline; }}
        ul {{ list-style: none; padding: 0; }}
        li {{ padding: 0.3rem 0; }}
        .status {{ color: #3fb950; font-weight: bold; }}
        hr {{ border: none; border-top: 1px solid #30363d; margin: 1.5rem 0; }}
    </style>
</head>
<body>
    <h1>Waitline</h1>
    <p class="subtitle">Restaurant queueing backend -- in-memory mode, state resets on restart</p>

    <p>Status: <span class="status">RUNNING</span></p>

    <div>
        <div class="metric">
            <div class="label">Restaurants</div>
            <div class="value">{restaurant_count}</div>
        </div>
        <div class="metric">
            <div class="label">Waiting parties</div>
            <div class="value">{waiting_count}</div>
        </div>
    </div>

    <hr>

    <h2>API Endpoints</h2>
    <ul>
        <li>GET <a href="/api/restaurants">/api/restaurants</a> -- Restaurants with crowd colors</li>
        <li>POST /api/restaurants/:id/queue -- Join the waiting line</li>
        <li>DELETE /api/restaurants/:id/queue -- Leave the waiting line</li>
        <li>GET /api/restaurants/:id/queue/status -- Public queue view</li>
        <li>GET /api/restaurants/:id/queue/next -- Operator call board</li>
        <li>GET /api/user/:user_id/queue -- A guest's place in line</li>
        <li>GET /api/restaurants/:id/tables -- Seat map</li>
        <li>POST /api/restaurants/:id/tables/:table_id/status -- Seat or clear a table</li>
    </ul>
</body>
</html>"#
    ))
}

// ---------------------------------------------------------------------------
// GET /api/restaurants -- list restaurants with crowd colors
// ---------------------------------------------------------------------------

/// List every restaurant with its live crowd color.
///
/// The response is a bare JSON array; the frontend drops it straight
/// onto the map.
pub async fn list_restaurants(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let venue = state.venue.read().await;
    Json(venue.restaurant_summaries())
}

// ---------------------------------------------------------------------------
// POST /api/restaurants/{id}/queue -- join the waiting line
// ---------------------------------------------------------------------------

/// Join a restaurant's waiting line and receive a numbered ticket.
///
/// Returns `201 Created` with the ticket, the number of parties ahead,
/// and the estimated wait in minutes.
pub async fn join_queue(
    State(state): State<Arc<AppState>>,
    Path(restaurant_id): Path<RestaurantId>,
    Json(body): Json<JoinQueueRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let mut venue = state.venue.write().await;
    let receipt = venue.join_queue(restaurant_id, body.user_id)?;
    Ok((StatusCode::CREATED, Json(receipt)))
}

// ---------------------------------------------------------------------------
// DELETE /api/restaurants/{id}/queue -- leave the waiting line
// ---------------------------------------------------------------------------

/// Leave a restaurant's waiting line. Returns `204 No Content`.
pub async fn leave_queue(
    State(state): State<Arc<AppState>>,
    Path(restaurant_id): Path<RestaurantId>,
    Json(body): Json<LeaveQueueRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let mut venue = state.venue.write().await;
    venue.leave_queue(restaurant_id, body.user_id)?;
    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// GET /api/restaurants/{id}/queue/status -- public queue view
// ---------------------------------------------------------------------------

/// The queue view shown on a restaurant's page: current number, line
/// length, and the estimated wait for a party joining now.
pub async fn queue_status(
    State(state): State<Arc<AppState>>,
    Path(restaurant_id): Path<RestaurantId>,
) -> Result<impl IntoResponse, ApiError> {
    let venue = state.venue.read().await;
    let overview = venue.queue_status(restaurant_id)?;
    Ok(Json(overview))
}

// ---------------------------------------------------------------------------
// GET /api/restaurants/{id}/queue/next -- operator call board
// ---------------------------------------------------------------------------

/// The operator's call board: the current number and the next ticket to
/// call (the current number again when the line is empty).
pub async fn queue_next(
    State(state): State<Arc<AppState>>,
    Path(restaurant_id): Path<RestaurantId>,
) -> Result<impl IntoResponse, ApiError> {
    let venue = state.venue.read().await;
    let board = venue.call_board(restaurant_id)?;
    Ok(Json(board))
}

// ---------------------------------------------------------------------------
// GET /api/user/{user_id}/queue -- a guest's own place in line
// ---------------------------------------------------------------------------

/// Where a guest stands: their ticket, the parties still ahead of them,
/// and the estimated remaining wait.
pub async fn guest_queue(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<GuestId>,
) -> Result<impl IntoResponse, ApiError> {
    let venue = state.venue.read().await;
    let overview = venue.guest_status(user_id)?;
    Ok(Json(overview))
}

// ---------------------------------------------------------------------------
// GET /api/restaurants/{id}/tables -- seat map
// ---------------------------------------------------------------------------

/// A restaurant's seat map: every table with its label, grid position,
/// and occupancy.
pub async fn list_tables(
    State(state): State<Arc<AppState>>,
    Path(restaurant_id): Path<RestaurantId>,
) -> Result<impl IntoResponse, ApiError> {
    let venue = state.venue.read().await;
    let overview = venue.floor_overview(restaurant_id)?;
    Ok(Json(overview))
}

// ---------------------------------------------------------------------------
// POST /api/restaurants/{id}/tables/{table_id}/status -- seat or clear
// ---------------------------------------------------------------------------

/// Flip a table's occupancy.
///
/// Seating (`action: "eating"`) admits the party holding
/// `queue_ticket_number`: the ticket is consumed and the call board
/// advances. Clearing (`action: "empty"`) just frees the table.
pub async fn update_table_status(
    State(state): State<Arc<AppState>>,
    Path((restaurant_id, table_id)): Path<(RestaurantId, TableId)>,
    Json(body): Json<UpdateTableStatusRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let mut venue = state.venue.write().await;
    let update = venue.update_table(
        restaurant_id,
        table_id,
        body.action,
        body.queue_ticket_number,
    )?;

    Ok(Json(UpdateTableStatusResponse {
        table_id: update.table_id,
        new_status: update.new_status,
        updated_at: Utc::now(),
    }))
}
