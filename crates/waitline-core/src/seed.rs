//! Demo venue seeded at startup.
//!
//! Three restaurants around the campus block the pilot runs in, with the
//! call boards and floor plans mid-service so the frontend has something
//! to render on a fresh boot. A database-backed deployment would load the
//! same shape from its tables instead.

use waitline_types::{
    Restaurant, RestaurantId, ServiceMetrics, Table, TableId, TableStatus, TicketNumber,
};

use crate::config::QueueConfig;
use crate::runtime::{QueueRuntime, ServiceCounters};
use crate::venue::Venue;

/// Helper to build a [`Restaurant`].
fn restaurant(
    id: u64,
    name: &str,
    lat: f64,
    lng: f64,
    image_url: &str,
    average_price: (u32, u32),
    specialties: &str,
) -> Restaurant {
    Restaurant {
        restaurant_id: RestaurantId::from(id),
        restaurant_name: name.to_owned(),
        lat,
        lng,
        image_url: image_url.to_owned(),
        average_price,
        specialties: specialties.to_owned(),
    }
}

/// Helper to build a [`Table`].
fn table(id: u64, restaurant: u64, label: &str, x: u32, y: u32, status: TableStatus) -> Table {
    Table {
        table_id: TableId::from(id),
        restaurant_id: RestaurantId::from(restaurant),
        label: label.to_owned(),
        x,
        y,
        status,
    }
}

/// Helper to build mid-service [`ServiceCounters`].
const fn counters(current: u64, next: u64, avg: u32, tables: u32) -> ServiceCounters {
    ServiceCounters {
        current_called: TicketNumber(current),
        next_issue: TicketNumber(next),
        metrics: ServiceMetrics {
            avg_dining_minutes: avg,
            table_count: tables,
        },
    }
}

/// Build the demo venue.
///
/// `queue_config` supplies the fallback metrics for restaurants the seed
/// does not cover (there are none in the demo set, but operators can add
/// restaurants without metrics later).
pub fn demo_venue(queue_config: &QueueConfig) -> Venue {
    let mut venue = Venue::new(QueueRuntime::new(queue_config.default_metrics()));

    // --- Restaurant 1: diner, five small tables in a tight grid ---
    venue.directory.install(restaurant(
        1,
        "Miss Mac's Diner",
        24.963_068,
        121.190_522,
        "https://images.waitline.dev/restaurants/miss-macs-diner.jpg",
        (150, 300),
        "pasta, burgers",
    ));
    venue.runtime.register(RestaurantId::from(1), counters(0, 1, 10, 5));
    for (id, label, x, y, status) in [
        (101, "A1", 1, 1, TableStatus::Eating),
        (102, "A2", 2, 1, TableStatus::Empty),
        (103, "A3", 3, 1, TableStatus::Eating),
        (104, "A4", 1, 2, TableStatus::Eating),
        (105, "A5", 2, 2, TableStatus::Eating),
    ] {
        venue.floor.install(table(id, 1, label, x, y, status));
    }

    // --- Restaurant 2: omurice house, six booths in two rows ---
    venue.directory.install(restaurant(
        2,
        "Omurice House",
        24.964_267,
        121.190_726,
        "https://images.waitline.dev/restaurants/omurice-house.jpg",
        (85, 165),
        "curry, pork cutlet rice",
    ));
    venue.runtime.register(RestaurantId::from(2), counters(14, 17, 8, 6));
    for (id, label, x, y, status) in [
        (201, "VIP1", 1, 1, TableStatus::Empty),
        (202, "VIP2", 3, 1, TableStatus::Eating),
        (203, "VIP3", 5, 1, TableStatus::Empty),
        (204, "VIP4", 1, 3, TableStatus::Eating),
        (205, "VIP5", 3, 3, TableStatus::Eating),
        (206, "VIP6", 5, 3, TableStatus::Eating),
    ] {
        venue.floor.install(table(id, 2, label, x, y, status));
    }

    // --- Restaurant 3: barbecue hall, twelve tables across the room ---
    venue.directory.install(restaurant(
        3,
        "Harbor Roast",
        24.964_879,
        121.193_531,
        "https://images.waitline.dev/restaurants/harbor-roast.jpg",
        (80, 130),
        "honey char siu, roast pork, sausage",
    ));
    venue
        .runtime
        .register(RestaurantId::from(3), counters(5, 8, 100, 12));
    for (id, label, x, y, status) in [
        (301, "Table 1", 1, 1, TableStatus::Empty),
        (302, "Table 2", 3, 1, TableStatus::Eating),
        (303, "Table 3", 5, 1, TableStatus::Empty),
        (304, "Table 4", 7, 1, TableStatus::Eating),
        (305, "Table 5", 1, 3, TableStatus::Empty),
        (306, "Table 6", 3, 3, TableStatus::Empty),
        (307, "Table 7", 5, 3, TableStatus::Empty),
        (308, "Table 8", 7, 3, TableStatus::Empty),
        (309, "Table 9", 1, 5, TableStatus::Empty),
        (310, "Table 10", 3, 5, TableStatus::Eating),
        (311, "Table 11", 5, 6, TableStatus::Empty),
        (312, "Table 12", 7, 6, TableStatus::Empty),
    ] {
        venue.floor.install(table(id, 3, label, x, y, status));
    }

    venue
}
