//! The queue ledger: the ordered record of every party currently waiting.
//!
//! The [`QueueLedger`] is the in-memory stand-in for a `queue` database
//! table. Entries are appended when a guest joins a line and removed when
//! the guest leaves or is seated; everything else is a linear scan, which
//! is plenty for the handful of restaurants and waiting parties a single
//! deployment serves.
//!
//! # Design
//!
//! - **One ticket per guest**: callers check [`ticket_for_guest`] before
//!   appending; the ledger itself stores whatever it is given.
//! - **FIFO by ticket number**: the ticket number, not insertion order, is
//!   the service order key. The two coincide in practice because numbers
//!   are issued monotonically.
//!
//! [`ticket_for_guest`]: QueueLedger::ticket_for_guest

use waitline_types::{GuestId, QueueTicket, RestaurantId, TicketNumber};

/// A single ledger row: a ticket plus its auto-increment row id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LedgerEntry {
    /// Auto-increment row id, unique across all restaurants.
    pub entry_id: u64,
    /// The waiting party this row records.
    pub ticket: QueueTicket,
}

/// The in-memory ledger of waiting parties across all restaurants.
#[derive(Debug, Clone)]
pub struct QueueLedger {
    /// All live entries, in insertion order.
    entries: Vec<LedgerEntry>,
    /// Next row id to hand out.
    next_entry_id: u64,
}

impl Default for QueueLedger {
    fn default() -> Self {
        Self::new()
    }
}

impl QueueLedger {
    /// Create an empty ledger. Row ids start at 1.
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
            next_entry_id: 1,
        }
    }

    /// Return the number of waiting parties across all restaurants.
    pub fn len(&self) -> u32 {
        saturating_u32(self.entries.len())
    }

    /// Return whether no one is waiting anywhere.
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Append a new waiting party and return its row id.
    pub fn append(
        &mut self,
        restaurant_id: RestaurantId,
        guest_id: GuestId,
        ticket_number: TicketNumber,
    ) -> u64 {
        let entry_id = self.next_entry_id;
        self.next_entry_id = self.next_entry_id.saturating_add(1);
        self.entries.push(LedgerEntry {
            entry_id,
            ticket: QueueTicket {
                restaurant_id,
                guest_id,
                ticket_number,
            },
        });
        entry_id
    }

    /// Remove a guest's entry at a specific restaurant.
    ///
    /// Returns `true` if an entry was removed.
    pub fn remove(&mut self, restaurant_id: RestaurantId, guest_id: GuestId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| {
            !(e.ticket.restaurant_id == restaurant_id && e.ticket.guest_id == guest_id)
        });
        self.entries.len() < before
    }

    /// Find the entry a guest holds, at whatever restaurant.
    ///
    /// Used to enforce the one-ticket-per-guest rule and to answer the
    /// per-guest status view.
    pub fn ticket_for_guest(&self, guest_id: GuestId) -> Option<&LedgerEntry> {
        self.entries.iter().find(|e| e.ticket.guest_id == guest_id)
    }

    /// Find the entry holding a specific ticket number at a restaurant.
    ///
    /// Used when seating a party: the operator types the called number,
    /// and this lookup resolves it back to the waiting guest.
    pub fn find_ticket(
        &self,
        restaurant_id: RestaurantId,
        ticket_number: TicketNumber,
    ) -> Option<&LedgerEntry> {
        self.entries.iter().find(|e| {
            e.ticket.restaurant_id == restaurant_id && e.ticket.ticket_number == ticket_number
        })
    }

    /// Count the parties waiting at one restaurant.
    pub fn waiting_count(&self, restaurant_id: RestaurantId) -> u32 {
        saturating_u32(
            self.entries
                .iter()
                .filter(|e| e.ticket.restaurant_id == restaurant_id)
                .count(),
        )
    }

    /// The lowest outstanding ticket number at a restaurant: the next
    /// party to call. `None` when the line is empty.
    pub fn lowest_outstanding(&self, restaurant_id: RestaurantId) -> Option<TicketNumber> {
        self.entries
            .iter()
            .filter(|e| e.ticket.restaurant_id == restaurant_id)
            .map(|e| e.ticket.ticket_number)
            .min()
    }

    /// Count the parties at a restaurant holding a strictly smaller ticket
    /// than the given one: the live "people ahead" of that ticket.
    pub fn ahead_of(&self, restaurant_id: RestaurantId, ticket_number: TicketNumber) -> u32 {
        saturating_u32(
            self.entries
                .iter()
                .filter(|e| {
                    e.ticket.restaurant_id == restaurant_id
                        && e.ticket.ticket_number < ticket_number
                })
                .count(),
        )
    }
}

/// Narrow a `usize` count to `u32`, saturating on the (impossible in
/// practice) overflow instead of truncating.
fn saturating_u32(count: usize) -> u32 {
    u32::try_from(count).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    const R1: RestaurantId = RestaurantId(1);
    const R2: RestaurantId = RestaurantId(2);

    fn guest(n: u64) -> GuestId {
        GuestId::from(n)
    }

    fn ticket(n: u64) -> TicketNumber {
        TicketNumber::from(n)
    }

    #[test]
    fn new_ledger_is_empty() {
        let ledger = QueueLedger::new();
        assert!(ledger.is_empty());
        assert_eq!(ledger.len(), 0);
        assert_eq!(ledger.waiting_count(R1), 0);
        assert_eq!(ledger.lowest_outstanding(R1), None);
    }

    #[test]
    fn append_assigns_increasing_row_ids() {
        let mut ledger = QueueLedger::new();
        let first = ledger.append(R1, guest(25), ticket(15));
        let second = ledger.append(R2, guest(28), ticket(16));
        assert_eq!(first, 1);
        assert_eq!(second, 2);
        assert_eq!(ledger.len(), 2);
    }

    #[test]
    fn waiting_count_is_per_restaurant() {
        let mut ledger = QueueLedger::new();
        ledger.append(R1, guest(1), ticket(1));
        ledger.append(R1, guest(2), ticket(2));
        ledger.append(R2, guest(3), ticket(1));
        assert_eq!(ledger.waiting_count(R1), 2);
        assert_eq!(ledger.waiting_count(R2), 1);
    }

    #[test]
    fn remove_only_touches_the_matching_pair() {
        let mut ledger = QueueLedger::new();
        ledger.append(R1, guest(1), ticket(1));
        ledger.append(R2, guest(2), ticket(1));

        // Right guest, wrong restaurant: nothing happens.
        assert!(!ledger.remove(R2, guest(1)));
        assert_eq!(ledger.len(), 2);

        assert!(ledger.remove(R1, guest(1)));
        assert_eq!(ledger.len(), 1);
        assert!(ledger.ticket_for_guest(guest(1)).is_none());
    }

    #[test]
    fn ticket_for_guest_searches_every_restaurant() {
        let mut ledger = QueueLedger::new();
        ledger.append(R2, guest(28), ticket(6));
        let entry = ledger.ticket_for_guest(guest(28));
        assert_eq!(entry.map(|e| e.ticket.restaurant_id), Some(R2));
        assert!(ledger.ticket_for_guest(guest(99)).is_none());
    }

    #[test]
    fn find_ticket_requires_both_restaurant_and_number() {
        let mut ledger = QueueLedger::new();
        ledger.append(R1, guest(100), ticket(50));
        assert!(ledger.find_ticket(R1, ticket(50)).is_some());
        assert!(ledger.find_ticket(R2, ticket(50)).is_none());
        assert!(ledger.find_ticket(R1, ticket(51)).is_none());
    }

    #[test]
    fn lowest_outstanding_is_the_minimum_ticket() {
        let mut ledger = QueueLedger::new();
        ledger.append(R1, guest(1), ticket(22));
        ledger.append(R1, guest(2), ticket(25));
        ledger.append(R1, guest(3), ticket(23));
        assert_eq!(ledger.lowest_outstanding(R1), Some(ticket(22)));
    }

    #[test]
    fn ahead_of_counts_strictly_smaller_tickets_only() {
        let mut ledger = QueueLedger::new();
        ledger.append(R1, guest(1), ticket(10));
        ledger.append(R1, guest(2), ticket(12));
        ledger.append(R1, guest(3), ticket(14));
        ledger.append(R2, guest(4), ticket(11));

        // Ticket 12: only ticket 10 is ahead; the other restaurant's
        // ticket 11 does not count.
        assert_eq!(ledger.ahead_of(R1, ticket(12)), 1);
        assert_eq!(ledger.ahead_of(R1, ticket(10)), 0);
        assert_eq!(ledger.ahead_of(R1, ticket(15)), 3);
    }

    #[test]
    fn position_shrinks_as_earlier_parties_leave() {
        let mut ledger = QueueLedger::new();
        ledger.append(R1, guest(1), ticket(1));
        ledger.append(R1, guest(2), ticket(2));
        ledger.append(R1, guest(3), ticket(3));
        assert_eq!(ledger.ahead_of(R1, ticket(3)), 2);

        ledger.remove(R1, guest(1));
        assert_eq!(ledger.ahead_of(R1, ticket(3)), 1);
        assert_eq!(ledger.lowest_outstanding(R1), Some(ticket(2)));
    }
}
