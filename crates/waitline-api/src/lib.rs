//! HTTP API server for the Waitline backend.
//!
//! This crate provides an Axum HTTP server that exposes:
//!
//! - **Guest REST endpoints** for discovering restaurants, joining and
//!   leaving waiting lines, and polling queue position
//! - **Operator REST endpoints** for the call board and for seating and
//!   clearing tables
//! - **Minimal HTML status page** (`GET /`) showing live counts and
//!   links to the API endpoints
//!
//! # Architecture
//!
//! Every handler works against one in-memory
//! [`Venue`](waitline_core::Venue) behind a [`tokio::sync::RwLock`] in
//! [`AppState`]. Queue views take the read half; joins, leaves, and
//! seatings take the write half, so ticket issuance is atomic within
//! the process. There is no persistence: a restart resets the venue to
//! the seed data.

pub mod error;
pub mod handlers;
pub mod router;
pub mod server;
pub mod state;

// Re-export primary types for convenience.
pub use error::ApiError;
pub use router::build_router;
pub use server::{start_server, ServerError};
pub use state::AppState;
