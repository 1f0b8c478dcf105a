//! Core entity structs for the Waitline backend.
//!
//! These are the records the in-memory stores hold: restaurant directory
//! entries, floor-plan tables, waiting-line tickets, and per-restaurant
//! service metrics.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::enums::TableStatus;
use crate::ids::{GuestId, RestaurantId, TableId, TicketNumber};

// ---------------------------------------------------------------------------
// Restaurant
// ---------------------------------------------------------------------------

/// A restaurant directory entry with geocoordinates and map metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Restaurant {
    /// Directory key.
    pub restaurant_id: RestaurantId,
    /// Display name.
    pub restaurant_name: String,
    /// Latitude of the storefront.
    pub lat: f64,
    /// Longitude of the storefront.
    pub lng: f64,
    /// Thumbnail shown on the map marker.
    pub image_url: String,
    /// Typical per-person spend, as an inclusive (low, high) range.
    pub average_price: (u32, u32),
    /// Comma-separated signature dishes.
    pub specialties: String,
}

// ---------------------------------------------------------------------------
// Table
// ---------------------------------------------------------------------------

/// A single table on a restaurant's floor plan.
///
/// `x` and `y` are grid coordinates the frontend maps straight onto CSS
/// grid columns and rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Table {
    /// Floor-plan key.
    pub table_id: TableId,
    /// The restaurant this table belongs to.
    pub restaurant_id: RestaurantId,
    /// Label painted on the table ("A1", "VIP3", ...).
    pub label: String,
    /// Grid column.
    pub x: u32,
    /// Grid row.
    pub y: u32,
    /// Current occupancy.
    pub status: TableStatus,
}

// ---------------------------------------------------------------------------
// Queue ticket
// ---------------------------------------------------------------------------

/// One waiting party: a guest holding a numbered ticket at a restaurant.
///
/// A guest holds at most one ticket across the whole system; the ticket
/// number is the FIFO order key within its restaurant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct QueueTicket {
    /// The restaurant whose line the guest is standing in.
    pub restaurant_id: RestaurantId,
    /// The waiting guest.
    pub guest_id: GuestId,
    /// The number called when it is this party's turn.
    pub ticket_number: TicketNumber,
}

// ---------------------------------------------------------------------------
// Service metrics
// ---------------------------------------------------------------------------

/// Per-restaurant throughput figures used for wait estimation.
///
/// `estimated wait = floor(parties_ahead * avg_dining_minutes / table_count)`:
/// every `avg_dining_minutes`, `table_count` parties turn over at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct ServiceMetrics {
    /// How long an average party occupies a table, in minutes.
    pub avg_dining_minutes: u32,
    /// Number of tables the restaurant runs.
    pub table_count: u32,
}
