//! Domain logic for the Waitline backend: waiting lines, call boards,
//! floor plans, and the estimation math that ties them together.
//!
//! The API layer owns one [`Venue`] behind a read-write lock and calls
//! its methods; everything in this crate is synchronous, allocation-light,
//! and free of I/O.
//!
//! # Modules
//!
//! - [`directory`] -- restaurant registry behind the map view
//! - [`ledger`] -- the ordered record of waiting parties
//! - [`runtime`] -- per-restaurant call-board counters and metrics
//! - [`floor`] -- tables and their occupancy
//! - [`estimate`] -- wait-time and crowd-color arithmetic
//! - [`venue`] -- the aggregate and every orchestration operation
//! - [`config`] -- YAML configuration with env overrides
//! - [`seed`] -- the demo venue served on a fresh boot
//! - [`error`] -- domain errors with stable wire codes

pub mod config;
pub mod directory;
pub mod error;
pub mod estimate;
pub mod floor;
pub mod ledger;
pub mod runtime;
pub mod seed;
pub mod venue;

// Re-export primary types for convenience.
pub use config::{ConfigError, LoggingConfig, QueueConfig, ServerConfig, WaitlineConfig};
pub use directory::RestaurantDirectory;
pub use error::VenueError;
pub use floor::FloorPlan;
pub use ledger::{LedgerEntry, QueueLedger};
pub use runtime::{QueueRuntime, ServiceCounters};
pub use seed::demo_venue;
pub use venue::{
    CallBoard, FloorOverview, GuestOverview, JoinReceipt, QueueOverview, RestaurantSummary,
    SeatUpdate, Venue,
};
