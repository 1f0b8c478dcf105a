//! Shared application state for the Waitline API server.
//!
//! [`AppState`] holds the one [`Venue`] every handler reads and mutates,
//! behind a [`tokio::sync::RwLock`]. Queue views take the read half;
//! joins, leaves, and seatings take the write half, which is what makes
//! ticket issuance atomic within the process.

use std::sync::Arc;

use tokio::sync::RwLock;

use waitline_core::Venue;

/// Shared state for the Axum application.
///
/// Wrapped in [`Arc`] and injected via Axum's `State` extractor.
#[derive(Clone)]
pub struct AppState {
    /// The whole in-memory venue: directory, ledger, counters, floor.
    pub venue: Arc<RwLock<Venue>>,
}

impl AppState {
    /// Create application state owning the given venue.
    pub fn new(venue: Venue) -> Self {
        Self {
            venue: Arc::new(RwLock::new(venue)),
        }
    }
}
