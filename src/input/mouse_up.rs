//! Pointer up handling - finalize drag/resize gestures.

use crate::app::Editor;

impl Editor {
    pub fn handle_pointer_up(&mut self) {
        self.release_gesture();
    }

    /// Clear the gesture flags on the current targets and return to `Idle`.
    /// Geometry and selection are untouched, so nothing is redrawn.
    pub(crate) fn release_gesture(&mut self) {
        if self.input_state.is_idle() {
            return;
        }

        if let Some(id) = self.input_state.dragged_item_id() {
            self.store.update(id, |item| item.is_dragging = false);
        }
        if let Some(id) = self.input_state.resized_item_id() {
            self.store.update(id, |item| item.is_resizing = false);
        }

        if let Some((id, kind)) = self.input_state.active_target() {
            if let Some(item) = self.store.get(id) {
                tracing::debug!(
                    item_id = id,
                    ?kind,
                    x = item.x,
                    y = item.y,
                    width = item.width,
                    height = item.height,
                    "Gesture ended"
                );
            }
        }

        self.input_state.reset();
    }
}
