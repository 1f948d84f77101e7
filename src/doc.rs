//! Item model: placed weights and the in-memory store that owns them.
//!
//! `Item` is a weight sitting on the plank. `ItemStore` keeps items in
//! insertion order (which is also draw and hit-test order) and hands out ids
//! from a counter that only ever moves forward, so an id is never reused
//! within a session even after removals or a reset.

#[cfg(test)]
#[path = "doc_test.rs"]
mod doc_test;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::consts::{ITEM_BASE_SIZE, ITEM_SIZE_PER_WEIGHT};

/// Unique identifier for an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub u64);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A weight placed on the plank.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Unique identifier for this item.
    pub id: ItemId,
    /// Signed distance from the pivot along the plank. Negative is left.
    #[serde(rename = "x")]
    pub position: f64,
    /// Weight of the item.
    pub weight: f64,
}

impl Item {
    /// On-screen diameter of the item; heavier items are drawn larger.
    #[must_use]
    pub fn visual_size(&self) -> f64 {
        ITEM_BASE_SIZE + self.weight * ITEM_SIZE_PER_WEIGHT
    }
}

/// Ordered store of items plus the id counter.
#[derive(Debug, Clone, Default)]
pub struct ItemStore {
    items: Vec<Item>,
    next_id: u64,
}

impl ItemStore {
    /// Create an empty store whose first id is 0.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a store from already-validated items and a counter.
    ///
    /// The counter is raised past the largest id present so fresh ids never
    /// collide with loaded ones.
    #[must_use]
    pub fn from_parts(items: Vec<Item>, next_id: u64) -> Self {
        let floor = items.iter().map(|i| i.id.0 + 1).max().unwrap_or(0);
        Self { items, next_id: next_id.max(floor) }
    }

    /// Append a new item, assigning it the next id.
    pub fn add(&mut self, position: f64, weight: f64) -> Item {
        let item = Item { id: ItemId(self.next_id), position, weight };
        self.next_id += 1;
        self.items.push(item);
        item
    }

    /// Remove an item by id, returning it if it was present.
    pub fn remove(&mut self, id: ItemId) -> Option<Item> {
        let index = self.items.iter().position(|i| i.id == id)?;
        Some(self.items.remove(index))
    }

    /// Move an item. Returns false if the item doesn't exist.
    pub fn set_position(&mut self, id: ItemId, position: f64) -> bool {
        let Some(item) = self.items.iter_mut().find(|i| i.id == id) else {
            return false;
        };
        item.position = position;
        true
    }

    /// Clamp every position into `[-half_plank_length, half_plank_length]`.
    /// Returns the number of items that moved.
    pub fn clamp_positions(&mut self, half_plank_length: f64) -> usize {
        let mut moved = 0;
        for item in &mut self.items {
            if item.position.abs() > half_plank_length {
                item.position = item.position.clamp(-half_plank_length, half_plank_length);
                moved += 1;
            }
        }
        moved
    }

    /// Remove every item. The id counter keeps its value.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Return a reference to an item by id.
    #[must_use]
    pub fn get(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|i| i.id == id)
    }

    /// Items in insertion order.
    #[must_use]
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// The id the next added item will receive.
    #[must_use]
    pub fn next_id(&self) -> u64 {
        self.next_id
    }

    /// Number of items currently on the plank.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the plank is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
