//! Ordered item storage.
//!
//! Insertion order is paint order: the first item is drawn first (bottom),
//! the last item is drawn last (top). Every geometry change goes through
//! [`ImageStore::update`] so the spatial index never goes stale.

use crate::geometry::{Bounds, Point};
use crate::spatial_index::SpatialIndex;
use crate::types::{Bitmap, ImageItem, ItemId};
use std::collections::HashSet;

pub struct ImageStore {
    items: Vec<ImageItem>,
    next_item_id: ItemId,
    index: SpatialIndex,
}

impl ImageStore {
    pub fn new(handle_size: f32) -> Self {
        Self {
            items: Vec::new(),
            next_item_id: 0,
            index: SpatialIndex::new(handle_size),
        }
    }

    fn allocate_id(&mut self) -> ItemId {
        let id = self.next_item_id;
        self.next_item_id += 1;
        id
    }

    fn append(&mut self, item: ImageItem) -> ItemId {
        let id = item.id;
        self.index.insert(id, &item.bounds());
        self.items.push(item);
        id
    }

    /// Append a new item on top of the paint order.
    pub fn push(&mut self, image: Bitmap, bounds: Bounds) -> ItemId {
        let id = self.allocate_id();
        self.append(ImageItem::new(id, image, bounds))
    }

    /// Append a copy of `id` sharing its bitmap, shifted by `offset`.
    pub fn duplicate(&mut self, id: ItemId, offset: f32) -> Option<ItemId> {
        let new_id = self.next_item_id;
        let copy = self.get(id)?.duplicate(new_id, offset);
        self.next_item_id += 1;
        Some(self.append(copy))
    }

    /// Remove an item, preserving the order of the rest.
    pub fn remove(&mut self, id: ItemId) -> Option<ImageItem> {
        let pos = self.position_of(id)?;
        self.index.remove(id);
        Some(self.items.remove(pos))
    }

    pub fn get(&self, id: ItemId) -> Option<&ImageItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Mutate one item in place and re-index it afterwards.
    pub fn update<R>(&mut self, id: ItemId, f: impl FnOnce(&mut ImageItem) -> R) -> Option<R> {
        let item = self.items.iter_mut().find(|item| item.id == id)?;
        let result = f(item);
        self.index.update(id, &item.bounds());
        Some(result)
    }

    pub fn position_of(&self, id: ItemId) -> Option<usize> {
        self.items.iter().position(|item| item.id == id)
    }

    pub fn contains(&self, id: ItemId) -> bool {
        self.position_of(id).is_some()
    }

    /// Items back-to-front.
    pub fn items(&self) -> &[ImageItem] {
        &self.items
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &ImageItem> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Items whose hittable area (body or handle) may contain `pos`, in
    /// store order. Callers still apply the exact predicates.
    pub fn candidates_at(&self, pos: Point) -> impl DoubleEndedIterator<Item = &ImageItem> {
        let candidates: HashSet<ItemId> = self.index.query_point(pos.x, pos.y).into_iter().collect();
        self.items
            .iter()
            .filter(move |item| candidates.contains(&item.id))
    }

    /// Topmost item whose body contains `pos`.
    pub fn item_at(&self, pos: Point) -> Option<ItemId> {
        self.candidates_at(pos)
            .rev()
            .find(|item| item.contains(pos))
            .map(|item| item.id)
    }

    #[cfg(test)]
    fn indexed_len(&self) -> usize {
        self.index.len()
    }
}
