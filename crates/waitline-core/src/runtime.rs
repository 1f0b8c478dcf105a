//! Per-restaurant call-board counters and service metrics.
//!
//! [`QueueRuntime`] is the in-memory stand-in for a `queue_runtime` table:
//! one [`ServiceCounters`] row per restaurant holding the last number
//! called, the next number to issue, and the throughput metrics the wait
//! estimator needs.
//!
//! Counters for a restaurant that has never been touched are conjured from
//! configurable defaults: reads peek without inserting, writes materialize
//! the row first.

use std::collections::BTreeMap;

use waitline_types::{RestaurantId, ServiceMetrics, TicketNumber};

/// Call-board state for one restaurant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceCounters {
    /// The last ticket number called to a table.
    pub current_called: TicketNumber,
    /// The ticket number the next joining guest will receive.
    pub next_issue: TicketNumber,
    /// Throughput figures used for wait estimation.
    pub metrics: ServiceMetrics,
}

impl ServiceCounters {
    /// Fresh counters for a line that has never issued a ticket.
    pub const fn fresh(metrics: ServiceMetrics) -> Self {
        Self {
            current_called: TicketNumber(0),
            next_issue: TicketNumber::FIRST,
            metrics,
        }
    }
}

/// Counter rows for every restaurant, lazily materialized.
#[derive(Debug, Clone)]
pub struct QueueRuntime {
    counters: BTreeMap<RestaurantId, ServiceCounters>,
    /// Metrics assumed for restaurants the seed data never mentioned.
    default_metrics: ServiceMetrics,
}

impl QueueRuntime {
    /// Create an empty runtime with the given fallback metrics.
    pub const fn new(default_metrics: ServiceMetrics) -> Self {
        Self {
            counters: BTreeMap::new(),
            default_metrics,
        }
    }

    /// Install a counter row, replacing any existing one. Seed-time only.
    pub fn register(&mut self, restaurant_id: RestaurantId, counters: ServiceCounters) {
        self.counters.insert(restaurant_id, counters);
    }

    /// Read a restaurant's counters without materializing a row.
    ///
    /// Unknown restaurants report fresh counters with the default metrics,
    /// which keeps read-only endpoints from needing write access.
    pub fn snapshot(&self, restaurant_id: RestaurantId) -> ServiceCounters {
        self.counters
            .get(&restaurant_id)
            .copied()
            .unwrap_or(ServiceCounters::fresh(self.default_metrics))
    }

    /// Issue the next ticket number for a restaurant and advance the
    /// counter.
    pub fn issue(&mut self, restaurant_id: RestaurantId) -> TicketNumber {
        let row = self.row_mut(restaurant_id);
        let issued = row.next_issue;
        row.next_issue = issued.next();
        issued
    }

    /// Record that a ticket number has been called to a table.
    pub fn set_current_called(&mut self, restaurant_id: RestaurantId, ticket: TicketNumber) {
        self.row_mut(restaurant_id).current_called = ticket;
    }

    /// Materialize and return the mutable counter row for a restaurant.
    fn row_mut(&mut self, restaurant_id: RestaurantId) -> &mut ServiceCounters {
        let default_metrics = self.default_metrics;
        self.counters
            .entry(restaurant_id)
            .or_insert_with(|| ServiceCounters::fresh(default_metrics))
    }
}
