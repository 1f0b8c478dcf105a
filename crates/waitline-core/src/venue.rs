//! The venue aggregate and the orchestration services over it.
//!
//! [`Venue`] bundles the four stores -- directory, queue ledger, runtime
//! counters, floor plan -- and implements every user-facing operation as a
//! method combining them: joining and leaving lines, the three queue
//! views, seating, and the map listing with crowd colors.
//!
//! All methods that mutate take `&mut self`; the API layer funnels them
//! through a single write lock, which is what makes ticket issuance
//! atomic within the process.

use serde::Serialize;

use waitline_types::{
    CrowdColor, GuestId, Restaurant, RestaurantId, Table, TableId, TableStatus, TicketNumber,
};

use crate::directory::RestaurantDirectory;
use crate::error::VenueError;
use crate::estimate;
use crate::floor::FloorPlan;
use crate::ledger::QueueLedger;
use crate::runtime::QueueRuntime;

// ---------------------------------------------------------------------------
// Operation outcomes
// ---------------------------------------------------------------------------

/// What a guest gets back after joining a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct JoinReceipt {
    /// The number that will be called when it is this party's turn.
    pub ticket_number: TicketNumber,
    /// Parties already in line when this guest joined.
    pub people_ahead: u32,
    /// Estimated wait in minutes at join time.
    pub estimated_wait_time: u32,
}

/// The public queue view shown on a restaurant's page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QueueOverview {
    /// The restaurant being viewed.
    pub restaurant_id: RestaurantId,
    /// Its display name.
    pub restaurant_name: String,
    /// The last number called to a table.
    pub current_number: TicketNumber,
    /// Parties currently in line.
    pub total_waiting: u32,
    /// Estimated wait for a party joining right now, in minutes.
    pub avg_wait_time: u32,
}

/// The operator's call board: what to call next.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CallBoard {
    /// The last number called.
    pub current_number: TicketNumber,
    /// The lowest outstanding ticket; equals `current_number` when the
    /// line is empty.
    pub next_queue_to_call: TicketNumber,
    /// Parties currently in line.
    pub total_waiting: u32,
}

/// A guest's own view of their place in line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GuestOverview {
    /// The restaurant whose line the guest is in.
    pub restaurant_id: RestaurantId,
    /// Its display name.
    pub restaurant_name: String,
    /// The guest's ticket number.
    pub ticket_number: TicketNumber,
    /// Still-waiting parties with a smaller ticket number.
    pub people_ahead: u32,
    /// Estimated remaining wait in minutes.
    pub estimated_wait_time: u32,
}

/// A restaurant's seat map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FloorOverview {
    /// The restaurant being viewed.
    pub restaurant_id: RestaurantId,
    /// Its display name.
    pub restaurant_name: String,
    /// Every table with label, grid position, and occupancy.
    pub seats: Vec<Table>,
}

/// The result of flipping a table's occupancy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SeatUpdate {
    /// The table that changed.
    pub table_id: TableId,
    /// Its new occupancy status.
    pub new_status: TableStatus,
}

/// One row of the map listing: a restaurant plus its live crowd color.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RestaurantSummary {
    /// Directory entry (id, name, coordinates, map metadata).
    #[serde(flatten)]
    pub restaurant: Restaurant,
    /// Crowding indicator derived from the live queue.
    pub status: CrowdColor,
}

// ---------------------------------------------------------------------------
// Venue
// ---------------------------------------------------------------------------

/// The whole in-memory state of one Waitline deployment.
#[derive(Debug, Clone)]
pub struct Venue {
    /// Restaurant registry.
    pub directory: RestaurantDirectory,
    /// Waiting parties.
    pub ledger: QueueLedger,
    /// Per-restaurant call-board counters.
    pub runtime: QueueRuntime,
    /// Tables.
    pub floor: FloorPlan,
}

impl Venue {
    /// Create an empty venue whose runtime falls back to the given
    /// default metrics.
    pub const fn new(runtime: QueueRuntime) -> Self {
        Self {
            directory: RestaurantDirectory::new(),
            ledger: QueueLedger::new(),
            runtime,
            floor: FloorPlan::new(),
        }
    }

    // -- Queue operations ---------------------------------------------------

    /// Join a restaurant's waiting line.
    ///
    /// Rejects guests who already hold a ticket anywhere, then validates
    /// the restaurant, in that order (the membership check needs no
    /// restaurant and the mobile client retries it most).
    pub fn join_queue(
        &mut self,
        restaurant_id: RestaurantId,
        guest_id: GuestId,
    ) -> Result<JoinReceipt, VenueError> {
        if let Some(entry) = self.ledger.ticket_for_guest(guest_id) {
            return Err(VenueError::AlreadyQueued {
                restaurant_id: entry.ticket.restaurant_id,
            });
        }
        if !self.directory.contains(restaurant_id) {
            return Err(VenueError::RestaurantNotFound(restaurant_id));
        }

        let people_ahead = self.ledger.waiting_count(restaurant_id);
        let ticket_number = self.runtime.issue(restaurant_id);
        self.ledger.append(restaurant_id, guest_id, ticket_number);

        let metrics = self.runtime.snapshot(restaurant_id).metrics;
        let estimated_wait_time = estimate::wait_minutes(people_ahead, metrics);

        tracing::info!(
            restaurant_id = %restaurant_id,
            guest_id = %guest_id,
            ticket_number = %ticket_number,
            people_ahead,
            "guest joined waiting line"
        );

        Ok(JoinReceipt {
            ticket_number,
            people_ahead,
            estimated_wait_time,
        })
    }

    /// Leave a restaurant's waiting line.
    ///
    /// The not-in-queue check runs before the restaurant check so a guest
    /// who never queued gets `NOT_IN_QUEUE` even for a bogus restaurant
    /// id; a guest queued elsewhere at a *valid* restaurant also gets
    /// `NOT_IN_QUEUE`.
    pub fn leave_queue(
        &mut self,
        restaurant_id: RestaurantId,
        guest_id: GuestId,
    ) -> Result<(), VenueError> {
        let Some(entry) = self.ledger.ticket_for_guest(guest_id) else {
            return Err(VenueError::NotInQueue);
        };
        if !self.directory.contains(restaurant_id) {
            return Err(VenueError::RestaurantNotFound(restaurant_id));
        }
        if entry.ticket.restaurant_id != restaurant_id {
            return Err(VenueError::NotInQueue);
        }

        self.ledger.remove(restaurant_id, guest_id);
        tracing::info!(
            restaurant_id = %restaurant_id,
            guest_id = %guest_id,
            "guest left waiting line"
        );
        Ok(())
    }

    /// The public queue view for a restaurant's page.
    pub fn queue_status(&self, restaurant_id: RestaurantId) -> Result<QueueOverview, VenueError> {
        let restaurant = self
            .directory
            .get(restaurant_id)
            .ok_or(VenueError::RestaurantNotFound(restaurant_id))?;

        let counters = self.runtime.snapshot(restaurant_id);
        let total_waiting = self.ledger.waiting_count(restaurant_id);

        Ok(QueueOverview {
            restaurant_id,
            restaurant_name: restaurant.restaurant_name.clone(),
            current_number: counters.current_called,
            total_waiting,
            avg_wait_time: estimate::wait_minutes(total_waiting, counters.metrics),
        })
    }

    /// The operator's call board for a restaurant.
    pub fn call_board(&self, restaurant_id: RestaurantId) -> Result<CallBoard, VenueError> {
        if !self.directory.contains(restaurant_id) {
            return Err(VenueError::RestaurantNotFound(restaurant_id));
        }

        let counters = self.runtime.snapshot(restaurant_id);
        let next_queue_to_call = self
            .ledger
            .lowest_outstanding(restaurant_id)
            .unwrap_or(counters.current_called);

        Ok(CallBoard {
            current_number: counters.current_called,
            next_queue_to_call,
            total_waiting: self.ledger.waiting_count(restaurant_id),
        })
    }

    /// A guest's own view of their place in line.
    pub fn guest_status(&self, guest_id: GuestId) -> Result<GuestOverview, VenueError> {
        let entry = self
            .ledger
            .ticket_for_guest(guest_id)
            .ok_or(VenueError::NotInQueue)?;
        let ticket = entry.ticket;

        let restaurant = self
            .directory
            .get(ticket.restaurant_id)
            .ok_or(VenueError::RestaurantNotFound(ticket.restaurant_id))?;

        let people_ahead = self
            .ledger
            .ahead_of(ticket.restaurant_id, ticket.ticket_number);
        let metrics = self.runtime.snapshot(ticket.restaurant_id).metrics;

        Ok(GuestOverview {
            restaurant_id: ticket.restaurant_id,
            restaurant_name: restaurant.restaurant_name.clone(),
            ticket_number: ticket.ticket_number,
            people_ahead,
            estimated_wait_time: estimate::wait_minutes(people_ahead, metrics),
        })
    }

    // -- Table operations ---------------------------------------------------

    /// A restaurant's seat map.
    pub fn floor_overview(&self, restaurant_id: RestaurantId) -> Result<FloorOverview, VenueError> {
        let restaurant = self
            .directory
            .get(restaurant_id)
            .ok_or(VenueError::RestaurantNotFound(restaurant_id))?;

        Ok(FloorOverview {
            restaurant_id,
            restaurant_name: restaurant.restaurant_name.clone(),
            seats: self
                .floor
                .tables_of(restaurant_id)
                .into_iter()
                .cloned()
                .collect(),
        })
    }

    /// Flip a table's occupancy status.
    ///
    /// Seating a party (`empty -> eating`) is the admission step of the
    /// queue: it requires the called ticket to exist at this restaurant,
    /// consumes it from the ledger, and advances the call board. Clearing
    /// a table (`eating -> empty`) is unconditional and never touches the
    /// queue.
    pub fn update_table(
        &mut self,
        restaurant_id: RestaurantId,
        table_id: TableId,
        action: TableStatus,
        queue_ticket_number: TicketNumber,
    ) -> Result<SeatUpdate, VenueError> {
        let table = self
            .floor
            .get(table_id)
            .ok_or(VenueError::TableNotFound(table_id))?;
        // A table id from another restaurant's floor plan is reported as
        // unknown rather than revealing where it lives.
        if table.restaurant_id != restaurant_id {
            return Err(VenueError::TableNotFound(table_id));
        }
        if table.status == action {
            return Err(VenueError::InvalidTableAction {
                status: table.status,
            });
        }

        if action == TableStatus::Eating {
            let entry = self
                .ledger
                .find_ticket(restaurant_id, queue_ticket_number)
                .ok_or(VenueError::NotInQueue)?;
            let seated_guest = entry.ticket.guest_id;

            self.ledger.remove(restaurant_id, seated_guest);
            self.runtime
                .set_current_called(restaurant_id, queue_ticket_number);

            tracing::info!(
                restaurant_id = %restaurant_id,
                table_id = %table_id,
                ticket_number = %queue_ticket_number,
                guest_id = %seated_guest,
                "party seated from waiting line"
            );
        }

        self.floor.set_status(table_id, action);

        Ok(SeatUpdate {
            table_id,
            new_status: action,
        })
    }

    // -- Discovery ----------------------------------------------------------

    /// Every restaurant with its live crowd color, for the map view.
    pub fn restaurant_summaries(&self) -> Vec<RestaurantSummary> {
        self.directory
            .all()
            .map(|restaurant| {
                let id = restaurant.restaurant_id;
                let waiting = self.ledger.waiting_count(id);
                let metrics = self.runtime.snapshot(id).metrics;
                RestaurantSummary {
                    restaurant: restaurant.clone(),
                    status: estimate::crowd_color(waiting, metrics.table_count),
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use waitline_types::ServiceMetrics;

    use crate::runtime::ServiceCounters;

    const DEFAULTS: ServiceMetrics = ServiceMetrics {
        avg_dining_minutes: 15,
        table_count: 4,
    };

    fn restaurant(id: u64, name: &str) -> Restaurant {
        Restaurant {
            restaurant_id: RestaurantId::from(id),
            restaurant_name: name.to_owned(),
            lat: 24.963,
            lng: 121.190,
            image_url: String::new(),
            average_price: (80, 150),
            specialties: String::new(),
        }
    }

    fn table(id: u64, restaurant: u64, status: TableStatus) -> Table {
        Table {
            table_id: TableId::from(id),
            restaurant_id: RestaurantId::from(restaurant),
            label: format!("T{id}"),
            x: 1,
            y: 1,
            status,
        }
    }

    /// A venue with one restaurant (id 5, avg 8 min, 10 tables) whose
    /// counters have already issued tickets up to 11.
    fn test_venue() -> Venue {
        let mut venue = Venue::new(QueueRuntime::new(DEFAULTS));
        venue.directory.install(restaurant(5, "Miss Mac's Diner"));
        venue.runtime.register(
            RestaurantId::from(5),
            ServiceCounters {
                current_called: TicketNumber::from(9),
                next_issue: TicketNumber::from(12),
                metrics: ServiceMetrics {
                    avg_dining_minutes: 8,
                    table_count: 10,
                },
            },
        );
        venue
    }

    // -- join ---------------------------------------------------------------

    #[test]
    fn join_issues_the_next_ticket_and_estimates_the_wait() {
        let mut venue = test_venue();
        let r5 = RestaurantId::from(5);
        // Three parties already in line.
        for (guest, ticket) in [(1, 9), (2, 10), (3, 11)] {
            venue
                .ledger
                .append(r5, GuestId::from(guest), TicketNumber::from(ticket));
        }

        let receipt = venue.join_queue(r5, GuestId::from(25));
        assert_eq!(
            receipt,
            Ok(JoinReceipt {
                ticket_number: TicketNumber::from(12),
                people_ahead: 3,
                // floor(3 * 8 / 10) = 2
                estimated_wait_time: 2,
            })
        );
        // The counter advanced and the ledger grew.
        assert_eq!(venue.runtime.snapshot(r5).next_issue, TicketNumber::from(13));
        assert_eq!(venue.ledger.waiting_count(r5), 4);
    }

    #[test]
    fn join_rejects_unknown_restaurants_without_issuing() {
        let mut venue = test_venue();
        let result = venue.join_queue(RestaurantId::from(999), GuestId::from(25));
        assert_eq!(
            result,
            Err(VenueError::RestaurantNotFound(RestaurantId::from(999)))
        );
        // No ticket was burned on the failed join.
        assert_eq!(
            venue.runtime.snapshot(RestaurantId::from(5)).next_issue,
            TicketNumber::from(12)
        );
    }

    #[test]
    fn join_rejects_guests_already_in_any_line() {
        let mut venue = test_venue();
        venue.directory.install(restaurant(6, "Omurice House"));
        let guest = GuestId::from(25);
        assert!(venue.join_queue(RestaurantId::from(5), guest).is_ok());

        // Same restaurant and a different one both refuse.
        let again = venue.join_queue(RestaurantId::from(5), guest);
        assert_eq!(
            again,
            Err(VenueError::AlreadyQueued {
                restaurant_id: RestaurantId::from(5)
            })
        );
        let elsewhere = venue.join_queue(RestaurantId::from(6), guest);
        assert_eq!(
            elsewhere,
            Err(VenueError::AlreadyQueued {
                restaurant_id: RestaurantId::from(5)
            })
        );
    }

    // -- leave --------------------------------------------------------------

    #[test]
    fn leave_removes_the_guest_from_the_line() {
        let mut venue = test_venue();
        let r5 = RestaurantId::from(5);
        let guest = GuestId::from(25);
        assert!(venue.join_queue(r5, guest).is_ok());

        assert_eq!(venue.leave_queue(r5, guest), Ok(()));
        assert_eq!(venue.ledger.waiting_count(r5), 0);
        assert!(venue.ledger.ticket_for_guest(guest).is_none());
    }

    #[test]
    fn leave_without_a_ticket_is_not_in_queue() {
        let mut venue = test_venue();
        let result = venue.leave_queue(RestaurantId::from(5), GuestId::from(25));
        assert_eq!(result, Err(VenueError::NotInQueue));
    }

    #[test]
    fn leave_the_wrong_restaurant_is_not_in_queue() {
        let mut venue = test_venue();
        venue.directory.install(restaurant(6, "Omurice House"));
        let guest = GuestId::from(25);
        assert!(venue.join_queue(RestaurantId::from(6), guest).is_ok());

        let result = venue.leave_queue(RestaurantId::from(5), guest);
        assert_eq!(result, Err(VenueError::NotInQueue));
        // Still queued at the original restaurant.
        assert_eq!(venue.ledger.waiting_count(RestaurantId::from(6)), 1);
    }

    #[test]
    fn leave_a_missing_restaurant_reports_restaurant_not_found() {
        let mut venue = test_venue();
        let guest = GuestId::from(25);
        assert!(venue.join_queue(RestaurantId::from(5), guest).is_ok());

        let result = venue.leave_queue(RestaurantId::from(999), guest);
        assert_eq!(
            result,
            Err(VenueError::RestaurantNotFound(RestaurantId::from(999)))
        );
    }

    // -- queue status -------------------------------------------------------

    #[test]
    fn queue_status_reports_board_count_and_average_wait() {
        let mut venue = test_venue();
        let r5 = RestaurantId::from(5);
        for (guest, ticket) in [(1, 9), (2, 10), (3, 11)] {
            venue
                .ledger
                .append(r5, GuestId::from(guest), TicketNumber::from(ticket));
        }

        let status = venue.queue_status(r5);
        assert_eq!(
            status,
            Ok(QueueOverview {
                restaurant_id: r5,
                restaurant_name: "Miss Mac's Diner".to_owned(),
                current_number: TicketNumber::from(9),
                total_waiting: 3,
                // floor(3 * 8 / 10) = 2
                avg_wait_time: 2,
            })
        );
    }

    #[test]
    fn queue_status_for_missing_restaurant_fails() {
        let venue = test_venue();
        assert_eq!(
            venue.queue_status(RestaurantId::from(999)),
            Err(VenueError::RestaurantNotFound(RestaurantId::from(999)))
        );
    }

    // -- call board ---------------------------------------------------------

    #[test]
    fn call_board_points_at_the_lowest_outstanding_ticket() {
        let mut venue = test_venue();
        let r5 = RestaurantId::from(5);
        venue.ledger.append(r5, GuestId::from(2), TicketNumber::from(11));
        venue.ledger.append(r5, GuestId::from(1), TicketNumber::from(10));

        let board = venue.call_board(r5);
        assert_eq!(
            board,
            Ok(CallBoard {
                current_number: TicketNumber::from(9),
                next_queue_to_call: TicketNumber::from(10),
                total_waiting: 2,
            })
        );
    }

    #[test]
    fn call_board_with_an_empty_line_repeats_the_current_number() {
        let venue = test_venue();
        let board = venue.call_board(RestaurantId::from(5));
        assert_eq!(
            board,
            Ok(CallBoard {
                current_number: TicketNumber::from(9),
                next_queue_to_call: TicketNumber::from(9),
                total_waiting: 0,
            })
        );
    }

    #[test]
    fn call_board_for_missing_restaurant_fails() {
        let venue = test_venue();
        assert_eq!(
            venue.call_board(RestaurantId::from(999)),
            Err(VenueError::RestaurantNotFound(RestaurantId::from(999)))
        );
    }

    // -- guest status -------------------------------------------------------

    #[test]
    fn guest_status_counts_only_smaller_tickets_still_waiting() {
        let mut venue = test_venue();
        let r5 = RestaurantId::from(5);
        venue.ledger.append(r5, GuestId::from(1), TicketNumber::from(9));
        venue.ledger.append(r5, GuestId::from(2), TicketNumber::from(10));
        venue.ledger.append(r5, GuestId::from(3), TicketNumber::from(11));

        let status = venue.guest_status(GuestId::from(3));
        assert_eq!(
            status,
            Ok(GuestOverview {
                restaurant_id: r5,
                restaurant_name: "Miss Mac's Diner".to_owned(),
                ticket_number: TicketNumber::from(11),
                people_ahead: 2,
                // floor(2 * 8 / 10) = 1
                estimated_wait_time: 1,
            })
        );

        // The first party leaves; the guest moves up.
        assert_eq!(venue.leave_queue(r5, GuestId::from(1)), Ok(()));
        let moved_up = venue.guest_status(GuestId::from(3));
        assert_eq!(moved_up.map(|s| s.people_ahead), Ok(1));
    }

    #[test]
    fn guest_status_without_a_ticket_is_not_in_queue() {
        let venue = test_venue();
        assert_eq!(
            venue.guest_status(GuestId::from(42)),
            Err(VenueError::NotInQueue)
        );
    }

    // -- floor overview -----------------------------------------------------

    #[test]
    fn floor_overview_lists_the_restaurants_tables() {
        let mut venue = test_venue();
        venue.floor.install(table(101, 5, TableStatus::Empty));
        venue.floor.install(table(102, 5, TableStatus::Eating));
        venue.floor.install(table(201, 6, TableStatus::Empty));

        let overview = venue.floor_overview(RestaurantId::from(5));
        let overview = overview.unwrap_or_else(|_| FloorOverview {
            restaurant_id: RestaurantId::from(0),
            restaurant_name: String::new(),
            seats: Vec::new(),
        });
        assert_eq!(overview.restaurant_name, "Miss Mac's Diner");
        assert_eq!(overview.seats.len(), 2);
        assert_eq!(
            overview.seats.first().map(|t| t.label.as_str()),
            Some("T101")
        );
    }

    #[test]
    fn floor_overview_for_missing_restaurant_fails() {
        let venue = test_venue();
        assert_eq!(
            venue.floor_overview(RestaurantId::from(999)),
            Err(VenueError::RestaurantNotFound(RestaurantId::from(999)))
        );
    }

    // -- table updates ------------------------------------------------------

    #[test]
    fn seating_consumes_the_ticket_and_advances_the_board() {
        let mut venue = test_venue();
        let r5 = RestaurantId::from(5);
        venue.floor.install(table(101, 5, TableStatus::Empty));
        venue
            .ledger
            .append(r5, GuestId::from(100), TicketNumber::from(10));

        let update = venue.update_table(
            r5,
            TableId::from(101),
            TableStatus::Eating,
            TicketNumber::from(10),
        );
        assert_eq!(
            update,
            Ok(SeatUpdate {
                table_id: TableId::from(101),
                new_status: TableStatus::Eating,
            })
        );

        // Side effects: ticket gone, board advanced, table occupied.
        assert!(venue.ledger.find_ticket(r5, TicketNumber::from(10)).is_none());
        assert!(venue.ledger.ticket_for_guest(GuestId::from(100)).is_none());
        assert_eq!(
            venue.runtime.snapshot(r5).current_called,
            TicketNumber::from(10)
        );
        assert_eq!(
            venue.floor.get(TableId::from(101)).map(|t| t.status),
            Some(TableStatus::Eating)
        );
    }

    #[test]
    fn seating_an_uncalled_ticket_is_not_in_queue() {
        let mut venue = test_venue();
        venue.floor.install(table(101, 5, TableStatus::Empty));

        let update = venue.update_table(
            RestaurantId::from(5),
            TableId::from(101),
            TableStatus::Eating,
            TicketNumber::from(10),
        );
        assert_eq!(update, Err(VenueError::NotInQueue));
        // The table stays empty.
        assert_eq!(
            venue.floor.get(TableId::from(101)).map(|t| t.status),
            Some(TableStatus::Empty)
        );
    }

    #[test]
    fn clearing_a_table_never_touches_the_queue() {
        let mut venue = test_venue();
        let r5 = RestaurantId::from(5);
        venue.floor.install(table(101, 5, TableStatus::Eating));
        venue
            .ledger
            .append(r5, GuestId::from(100), TicketNumber::from(10));
        let board_before = venue.runtime.snapshot(r5).current_called;

        let update = venue.update_table(
            r5,
            TableId::from(101),
            TableStatus::Empty,
            TicketNumber::from(0),
        );
        assert_eq!(update.map(|u| u.new_status), Ok(TableStatus::Empty));
        assert_eq!(venue.ledger.waiting_count(r5), 1);
        assert_eq!(venue.runtime.snapshot(r5).current_called, board_before);
    }

    #[test]
    fn resetting_the_same_status_is_invalid() {
        let mut venue = test_venue();
        venue.floor.install(table(101, 5, TableStatus::Eating));

        let update = venue.update_table(
            RestaurantId::from(5),
            TableId::from(101),
            TableStatus::Eating,
            TicketNumber::from(10),
        );
        assert_eq!(
            update,
            Err(VenueError::InvalidTableAction {
                status: TableStatus::Eating
            })
        );
    }

    #[test]
    fn unknown_tables_and_foreign_tables_look_the_same() {
        let mut venue = test_venue();
        venue.directory.install(restaurant(6, "Omurice House"));
        venue.floor.install(table(201, 6, TableStatus::Empty));

        let missing = venue.update_table(
            RestaurantId::from(5),
            TableId::from(999),
            TableStatus::Eating,
            TicketNumber::from(1),
        );
        assert_eq!(missing, Err(VenueError::TableNotFound(TableId::from(999))));

        // Table 201 exists, but at restaurant 6.
        let foreign = venue.update_table(
            RestaurantId::from(5),
            TableId::from(201),
            TableStatus::Eating,
            TicketNumber::from(1),
        );
        assert_eq!(foreign, Err(VenueError::TableNotFound(TableId::from(201))));
    }

    // -- wire shapes --------------------------------------------------------

    #[test]
    fn outcomes_serialize_with_the_wire_field_names() {
        let receipt = JoinReceipt {
            ticket_number: TicketNumber::from(12),
            people_ahead: 3,
            estimated_wait_time: 2,
        };
        let json = serde_json::to_value(receipt).unwrap_or_default();
        assert_eq!(json["ticket_number"], 12);
        assert_eq!(json["people_ahead"], 3);
        assert_eq!(json["estimated_wait_time"], 2);

        let board = CallBoard {
            current_number: TicketNumber::from(20),
            next_queue_to_call: TicketNumber::from(22),
            total_waiting: 5,
        };
        let json = serde_json::to_value(board).unwrap_or_default();
        assert_eq!(json["current_number"], 20);
        assert_eq!(json["next_queue_to_call"], 22);
        assert_eq!(json["total_waiting"], 5);
    }

    #[test]
    fn summaries_flatten_the_restaurant_fields() {
        let summary = RestaurantSummary {
            restaurant: restaurant(2, "Omurice House"),
            status: CrowdColor::Yellow,
        };
        let json = serde_json::to_value(summary).unwrap_or_default();
        // Flattened: directory fields and the color sit side by side.
        assert_eq!(json["restaurant_id"], 2);
        assert_eq!(json["restaurant_name"], "Omurice House");
        assert_eq!(json["status"], "yellow");
    }

    // -- discovery ----------------------------------------------------------

    #[test]
    fn summaries_carry_live_crowd_colors() {
        let mut venue = Venue::new(QueueRuntime::new(DEFAULTS));
        venue.directory.install(restaurant(1, "Quiet Corner"));
        venue.directory.install(restaurant(2, "Packed Place"));
        venue.runtime.register(
            RestaurantId::from(2),
            ServiceCounters::fresh(ServiceMetrics {
                avg_dining_minutes: 15,
                table_count: 20,
            }),
        );
        // 19 waiting / 20 tables = 95% -> red.
        for guest in 0..19 {
            let ticket = venue.runtime.issue(RestaurantId::from(2));
            venue
                .ledger
                .append(RestaurantId::from(2), GuestId::from(guest), ticket);
        }

        let summaries = venue.restaurant_summaries();
        assert_eq!(summaries.len(), 2);
        assert_eq!(
            summaries.first().map(|s| s.status),
            Some(CrowdColor::Green)
        );
        assert_eq!(summaries.get(1).map(|s| s.status), Some(CrowdColor::Red));
    }
}
