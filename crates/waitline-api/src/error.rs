//! Error types for the Waitline API layer.
//!
//! [`ApiError`] wraps the domain's [`VenueError`] and converts it into an
//! Axum HTTP response via its [`IntoResponse`](axum::response::IntoResponse)
//! implementation. The body is the error envelope the frontend branches
//! on:
//!
//! ```json
//! { "error": { "code": "NOT_IN_QUEUE", "message": "User is not in queue." } }
//! ```

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use waitline_core::VenueError;

/// An API-layer failure: a domain rule violation with an HTTP mapping.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// A domain rule violation from the orchestration services.
    #[error(transparent)]
    Venue(#[from] VenueError),
}

impl ApiError {
    /// The HTTP status the wrapped error maps to.
    const fn status(&self) -> StatusCode {
        match self {
            Self::Venue(err) => match err {
                VenueError::RestaurantNotFound(_) | VenueError::TableNotFound(_) => {
                    StatusCode::NOT_FOUND
                }
                VenueError::AlreadyQueued { .. } => StatusCode::CONFLICT,
                VenueError::NotInQueue | VenueError::InvalidTableAction { .. } => {
                    StatusCode::BAD_REQUEST
                }
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let Self::Venue(err) = self;

        let body = serde_json::json!({
            "error": {
                "code": err.code(),
                "message": err.to_string(),
            }
        });

        (status, axum::Json(body)).into_response()
    }
}
