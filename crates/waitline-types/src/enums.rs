//! Enumeration types for the Waitline backend.
//!
//! Wire values are lowercase strings to match the contract the frontend
//! already speaks (`"empty"` / `"eating"`, `"green"` / `"yellow"` / `"red"`).

use serde::{Deserialize, Serialize};
use ts_rs::TS;

// ---------------------------------------------------------------------------
// Table occupancy
// ---------------------------------------------------------------------------

/// Occupancy state of a single table.
///
/// A table flips between the two states as parties are seated and leave.
/// The same values double as the `action` field of a table-status update
/// request: the action names the state the operator wants the table in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
#[serde(rename_all = "lowercase")]
pub enum TableStatus {
    /// The table is free and can seat the next party in line.
    Empty,
    /// A party is seated and dining.
    Eating,
}

impl core::fmt::Display for TableStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Empty => write!(f, "empty"),
            Self::Eating => write!(f, "eating"),
        }
    }
}

// ---------------------------------------------------------------------------
// Crowd color
// ---------------------------------------------------------------------------

/// Traffic-light crowding indicator shown on the restaurant map.
///
/// Derived from the ratio of waiting parties to the restaurant's table
/// count; see `waitline_core::estimate` for the thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
#[serde(rename_all = "lowercase")]
pub enum CrowdColor {
    /// Little to no wait.
    Green,
    /// The line is building up.
    Yellow,
    /// The line is near or past the restaurant's capacity to absorb it.
    Red,
}
