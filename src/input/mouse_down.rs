//! Pointer down handling - hit testing, selection, drag/resize initiation.
//!
//! ## Performance Notes
//!
//! Candidates come from the R-tree spatial index, then the exact body and
//! handle predicates are applied in store order.

use crate::app::Editor;
use crate::geometry::Point;
use crate::settings::HitTestPolicy;
use crate::types::ItemId;

/// Outcome of hit testing one press.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PressHit {
    pub dragging: Option<ItemId>,
    pub resizing: Option<ItemId>,
    pub selected: Option<ItemId>,
}

impl Editor {
    /// Resolve which items a press at `pos` targets, without changing state.
    pub fn hit_test(&self, pos: Point) -> PressHit {
        crate::profile_scope!("hit_test_items");

        let handle_size = self.settings.handle_size;
        match self.settings.hit_test {
            HitTestPolicy::Compat => {
                // Every item is visited; later matches overwrite earlier ones.
                let mut hit = PressHit::default();
                for item in self.store.candidates_at(pos) {
                    if item.handle_contains(pos, handle_size) {
                        hit.resizing = Some(item.id);
                        hit.selected = Some(item.id);
                    } else if item.contains(pos) {
                        hit.dragging = Some(item.id);
                        hit.selected = Some(item.id);
                    }
                }
                hit
            }
            HitTestPolicy::Topmost => self
                .store
                .candidates_at(pos)
                .rev()
                .find_map(|item| {
                    if item.handle_contains(pos, handle_size) {
                        Some(PressHit {
                            resizing: Some(item.id),
                            selected: Some(item.id),
                            ..PressHit::default()
                        })
                    } else if item.contains(pos) {
                        Some(PressHit {
                            dragging: Some(item.id),
                            selected: Some(item.id),
                            ..PressHit::default()
                        })
                    } else {
                        None
                    }
                })
                .unwrap_or_default(),
        }
    }

    pub fn handle_pointer_down(&mut self, pos: Point) {
        crate::profile_scope!("handle_pointer_down");

        // A press without a matching release must not leave stale flags.
        self.release_gesture();
        self.selection = None;

        let hit = self.hit_test(pos);

        if let Some(id) = hit.resizing {
            self.store.update(id, |item| item.is_resizing = true);
        }
        if let Some(id) = hit.dragging {
            self.store.update(id, |item| item.is_dragging = true);
        }
        self.selection = hit.selected;
        self.input_state.start(pos, hit.dragging, hit.resizing);

        if !self.input_state.is_idle() {
            tracing::debug!(
                x = pos.x,
                y = pos.y,
                dragging = ?hit.dragging,
                resizing = ?hit.resizing,
                "Gesture started"
            );
        }

        self.redraw();
    }
}
