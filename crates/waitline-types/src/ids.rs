//! Type-safe identifier wrappers around plain integers.
//!
//! Every entity in the system has a strongly-typed ID to prevent accidental
//! mixing of identifiers at compile time. Restaurants, tables, and guests are
//! keyed by small integers handed out by the seed data (and, in a future
//! database-backed deployment, by auto-increment primary keys), so the
//! wrappers hold a `u64` rather than a UUID.
//!
//! [`TicketNumber`] is defined alongside the IDs because it shares the same
//! newtype shape, but it is an *ordinal*, not an identity: its `Ord` impl is
//! the FIFO order of the waiting line.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Generates a newtype wrapper around `u64` with standard derives.
macro_rules! define_id {
    (
        $(#[$meta:meta])*
        $name:ident
    ) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
        )]
        #[ts(export, export_to = "bindings/")]
        pub struct $name(pub u64);

        impl $name {
            /// Return the inner integer value.
            pub const fn into_inner(self) -> u64 {
                self.0
            }
        }

        impl core::fmt::Display for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<u64> for $name {
            fn from(id: u64) -> Self {
                Self(id)
            }
        }

        impl From<$name> for u64 {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

define_id! {
    /// Unique identifier for a restaurant in the directory.
    RestaurantId
}

define_id! {
    /// Unique identifier for a table on a restaurant's floor plan.
    TableId
}

define_id! {
    /// Unique identifier for a guest (the mobile client's user id).
    GuestId
}

define_id! {
    /// A waiting-line ticket number.
    ///
    /// Ticket numbers are issued per restaurant, monotonically increasing,
    /// and never reused within a run. Comparing two ticket numbers from the
    /// same restaurant yields their FIFO service order.
    TicketNumber
}

impl TicketNumber {
    /// The number handed to the first guest who ever joins a line.
    pub const FIRST: Self = Self(1);

    /// Return the ticket that will be issued after this one.
    ///
    /// Saturates at `u64::MAX`; a line would have to cycle through
    /// eighteen quintillion guests first.
    pub const fn next(self) -> Self {
        Self(self.0.saturating_add(1))
    }
}
