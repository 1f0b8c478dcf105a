//! Floor plans: every table of every restaurant, keyed by table id.
//!
//! [`FloorPlan`] is the in-memory stand-in for a `seat` table. Tables are
//! installed at seed time; afterwards only their occupancy status changes.

use std::collections::BTreeMap;

use waitline_types::{RestaurantId, Table, TableId, TableStatus};

/// All tables across all restaurants.
#[derive(Debug, Clone, Default)]
pub struct FloorPlan {
    tables: BTreeMap<TableId, Table>,
}

impl FloorPlan {
    /// Create an empty floor plan.
    pub const fn new() -> Self {
        Self {
            tables: BTreeMap::new(),
        }
    }

    /// Install a table, replacing any table with the same id.
    pub fn install(&mut self, table: Table) {
        self.tables.insert(table.table_id, table);
    }

    /// Look up a single table.
    pub fn get(&self, table_id: TableId) -> Option<&Table> {
        self.tables.get(&table_id)
    }

    /// All tables of one restaurant, in table-id order.
    pub fn tables_of(&self, restaurant_id: RestaurantId) -> Vec<&Table> {
        self.tables
            .values()
            .filter(|t| t.restaurant_id == restaurant_id)
            .collect()
    }

    /// Flip a table's occupancy status.
    ///
    /// Returns `false` when the table does not exist; callers are expected
    /// to have validated existence (and ownership) already.
    pub fn set_status(&mut self, table_id: TableId, status: TableStatus) -> bool {
        self.tables.get_mut(&table_id).is_some_and(|table| {
            table.status = status;
            true
        })
    }
}
