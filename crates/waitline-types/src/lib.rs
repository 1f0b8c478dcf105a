//! Shared type definitions for the Waitline backend.
//!
//! This crate is the single source of truth for the types used across the
//! Waitline workspace. Types defined here flow downstream to `TypeScript`
//! via `ts-rs` for the guest and operator frontends.
//!
//! # Modules
//!
//! - [`ids`] -- Type-safe integer wrappers for entity identifiers and
//!   ticket numbers
//! - [`enums`] -- Table occupancy and crowd-color enumerations
//! - [`structs`] -- Core entity structs (restaurants, tables, tickets,
//!   service metrics)

pub mod enums;
pub mod ids;
pub mod structs;

// Re-export all public types at crate root for convenience.
pub use enums::{CrowdColor, TableStatus};
pub use ids::{GuestId, RestaurantId, TableId, TicketNumber};
pub use structs::{QueueTicket, Restaurant, ServiceMetrics, Table};
