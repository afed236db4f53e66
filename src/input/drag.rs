//! Pointer move handling - item dragging and resizing.
//!
//! ## Performance Notes
//!
//! Pointer move fires very frequently during a gesture. Moves outside a
//! gesture exit before touching the store or redrawing.

use crate::app::Editor;
use crate::geometry::Point;
use crate::input::state::GestureKind;

impl Editor {
    pub fn handle_pointer_move(&mut self, pos: Point) {
        let Some((item_id, kind)) = self.input_state.active_target() else {
            return;
        };
        let Some(last_pos) = self.input_state.last_pos() else {
            return;
        };

        crate::profile_scope!("handle_pointer_move");

        let (dx, dy) = pos.delta_from(last_pos);
        let min_size = self.settings.min_item_size;

        let applied = self.store.update(item_id, |item| match kind {
            GestureKind::Drag => {
                item.x += dx;
                item.y += dy;
            }
            GestureKind::Resize => {
                item.width += dx;
                item.height += dy;
                if let Some(min) = min_size {
                    item.width = item.width.max(min);
                    item.height = item.height.max(min);
                }
            }
        });

        if applied.is_none() {
            self.input_state.forget(item_id);
            return;
        }

        self.input_state.update_last_pos(pos);
        self.redraw();
    }
}
