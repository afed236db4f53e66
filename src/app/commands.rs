//! Commands on the selected item.

use super::Editor;
use crate::types::{ImageItem, ItemId};

impl Editor {
    /// Remove the selected item and clear the selection. Returns the removed
    /// item, or `None` (and does nothing) when nothing is selected. A gesture
    /// targeting the removed item ends, including any second target it held.
    pub fn delete_selected(&mut self) -> Option<ImageItem> {
        let id = self.selection.take()?;
        // A gesture touching the removed item ends for every target it held.
        if self.input_state.dragged_item_id() == Some(id)
            || self.input_state.resized_item_id() == Some(id)
        {
            self.release_gesture();
        }
        let removed = self.store.remove(id);

        tracing::info!(item_id = id, remaining = self.store.len(), "Deleted selected item");
        self.redraw();
        removed
    }

    /// Append a copy of the selected item, offset down and to the right and
    /// sharing its bitmap. The selection stays on the original.
    pub fn duplicate_selected(&mut self) -> Option<ItemId> {
        let id = self.selection?;
        let copy_id = self.store.duplicate(id, self.settings.duplicate_offset)?;

        tracing::info!(item_id = id, copy_id, "Duplicated selected item");
        self.redraw();
        Some(copy_id)
    }

    /// Clear the selection without touching any item.
    pub fn clear_selection(&mut self) {
        if self.selection.take().is_some() {
            self.redraw();
        }
    }
}
