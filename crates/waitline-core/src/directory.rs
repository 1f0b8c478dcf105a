//! The restaurant directory: the static registry behind the map view.
//!
//! [`RestaurantDirectory`] is the in-memory stand-in for a `restaurant`
//! table. Entries are installed at seed time and never change at runtime.
//!
//! A real geo-distance search over the stored coordinates is deliberately
//! absent: the discovery endpoint lists every restaurant and lets the
//! frontend place them on the map.

use std::collections::BTreeMap;

use waitline_types::{Restaurant, RestaurantId};

/// Registry of all known restaurants.
#[derive(Debug, Clone, Default)]
pub struct RestaurantDirectory {
    restaurants: BTreeMap<RestaurantId, Restaurant>,
}

impl RestaurantDirectory {
    /// Create an empty directory.
    pub const fn new() -> Self {
        Self {
            restaurants: BTreeMap::new(),
        }
    }

    /// Install a restaurant, replacing any entry with the same id.
    pub fn install(&mut self, restaurant: Restaurant) {
        self.restaurants.insert(restaurant.restaurant_id, restaurant);
    }

    /// Look up one restaurant.
    pub fn get(&self, restaurant_id: RestaurantId) -> Option<&Restaurant> {
        self.restaurants.get(&restaurant_id)
    }

    /// Whether a restaurant exists.
    pub fn contains(&self, restaurant_id: RestaurantId) -> bool {
        self.restaurants.contains_key(&restaurant_id)
    }

    /// Iterate over every restaurant in id order.
    pub fn all(&self) -> impl Iterator<Item = &Restaurant> {
        self.restaurants.values()
    }

    /// Number of registered restaurants.
    pub fn len(&self) -> usize {
        self.restaurants.len()
    }

    /// Whether the directory is empty.
    pub fn is_empty(&self) -> bool {
        self.restaurants.is_empty()
    }
}
