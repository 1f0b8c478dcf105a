//! Error types for the Waitline domain layer.
//!
//! [`VenueError`] unifies every rule violation the orchestration services
//! can hit. Each variant carries a stable wire code that clients branch on
//! ([`VenueError::code`]); the `Display` text is the human-readable message
//! the API ships alongside it, so the strings here ARE the public contract.

use waitline_types::{RestaurantId, TableId, TableStatus};

/// A domain rule violation raised by the orchestration services.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum VenueError {
    /// The referenced restaurant is not in the directory.
    #[error("Restaurant does not exist.")]
    RestaurantNotFound(RestaurantId),

    /// The referenced table is unknown, or belongs to another restaurant.
    ///
    /// The two cases share a variant deliberately: reporting "that table
    /// exists, but elsewhere" would leak another restaurant's floor plan.
    #[error("Table does not exist.")]
    TableNotFound(TableId),

    /// The guest already holds a ticket somewhere and cannot take a second.
    #[error("You are already in the queue.")]
    AlreadyQueued {
        /// The restaurant whose line the guest is currently in.
        restaurant_id: RestaurantId,
    },

    /// The operation needs a live ticket the guest (or ticket number)
    /// does not have.
    #[error("User is not in queue.")]
    NotInQueue,

    /// The table is already in the requested state.
    #[error("Cannot set a table that is already {status}.")]
    InvalidTableAction {
        /// The state the table is already in.
        status: TableStatus,
    },
}

impl VenueError {
    /// Stable machine-readable code for the error envelope.
    pub const fn code(&self) -> &'static str {
        match self {
            Self::RestaurantNotFound(_) => "RESTAURANT_NOT_FOUND",
            Self::TableNotFound(_) => "TABLE_NOT_FOUND",
            Self::AlreadyQueued { .. } => "QUEUE_ALREADY_JOINED",
            Self::NotInQueue => "NOT_IN_QUEUE",
            Self::InvalidTableAction { .. } => "TABLE_INVALID_ACTION",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_stable() {
        assert_eq!(
            VenueError::RestaurantNotFound(RestaurantId::from(9)).code(),
            "RESTAURANT_NOT_FOUND"
        );
        assert_eq!(VenueError::NotInQueue.code(), "NOT_IN_QUEUE");
    }

    #[test]
    fn invalid_action_message_names_the_current_status() {
        let err = VenueError::InvalidTableAction {
            status: TableStatus::Eating,
        };
        assert_eq!(err.to_string(), "Cannot set a table that is already eating.");
    }

    #[test]
    fn messages_match_the_wire_contract() {
        assert_eq!(
            VenueError::RestaurantNotFound(RestaurantId::from(1)).to_string(),
            "Restaurant does not exist."
        );
        assert_eq!(
            VenueError::AlreadyQueued {
                restaurant_id: RestaurantId::from(1)
            }
            .to_string(),
            "You are already in the queue."
        );
        assert_eq!(VenueError::NotInQueue.to_string(), "User is not in queue.");
        assert_eq!(
            VenueError::TableNotFound(TableId::from(7)).to_string(),
            "Table does not exist."
        );
    }
}
