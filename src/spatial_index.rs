//! Spatial Index Module
//!
//! Provides R-tree based candidate lookup for pointer hit testing.
//! Each entry covers an item's body together with its resize handle, so a
//! point query never misses an item the exact predicates would accept.

use crate::geometry::Bounds;
use crate::types::ItemId;
use rstar::{RTree, RTreeObject, AABB};
use std::collections::HashMap;

/// A spatial entry representing the hittable area of one canvas item.
#[derive(Debug, Clone, Copy)]
pub struct SpatialEntry {
    pub item_id: ItemId,
    pub min_x: f32,
    pub min_y: f32,
    pub max_x: f32,
    pub max_y: f32,
}

impl SpatialEntry {
    pub fn new(item_id: ItemId, bounds: &Bounds, handle_size: f32) -> Self {
        let (min_x, min_y, max_x, max_y) = bounds.hit_envelope(handle_size);
        Self {
            item_id,
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    #[inline]
    pub fn contains_point(&self, x: f32, y: f32) -> bool {
        x >= self.min_x && x <= self.max_x && y >= self.min_y && y <= self.max_y
    }
}

impl RTreeObject for SpatialEntry {
    type Envelope = AABB<[f32; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_corners([self.min_x, self.min_y], [self.max_x, self.max_y])
    }
}

impl PartialEq for SpatialEntry {
    fn eq(&self, other: &Self) -> bool {
        self.item_id == other.item_id
    }
}

/// R-tree over item envelopes, keyed by [`ItemId`].
pub struct SpatialIndex {
    tree: RTree<SpatialEntry>,
    entries: HashMap<ItemId, SpatialEntry>,
    handle_size: f32,
}

impl SpatialIndex {
    pub fn new(handle_size: f32) -> Self {
        Self {
            tree: RTree::new(),
            entries: HashMap::new(),
            handle_size,
        }
    }

    /// Insert or replace the entry for `item_id`.
    pub fn insert(&mut self, item_id: ItemId, bounds: &Bounds) {
        if let Some(old_entry) = self.entries.remove(&item_id) {
            self.tree.remove(&old_entry);
        }

        let entry = SpatialEntry::new(item_id, bounds, self.handle_size);
        self.tree.insert(entry);
        self.entries.insert(item_id, entry);
    }

    pub fn remove(&mut self, item_id: ItemId) -> bool {
        if let Some(entry) = self.entries.remove(&item_id) {
            self.tree.remove(&entry);
            true
        } else {
            false
        }
    }

    pub fn update(&mut self, item_id: ItemId, bounds: &Bounds) {
        self.insert(item_id, bounds);
    }

    /// All items whose envelope contains the point. Unordered.
    pub fn query_point(&self, x: f32, y: f32) -> Vec<ItemId> {
        let point_envelope = AABB::from_point([x, y]);

        self.tree
            .locate_in_envelope_intersecting(&point_envelope)
            .filter(|entry| entry.contains_point(x, y))
            .map(|entry| entry.item_id)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.tree = RTree::new();
        self.entries.clear();
    }
}
