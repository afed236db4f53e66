//! Input state machine for pointer gestures.
//!
//! ## State Transitions
//!
//! ```text
//! Idle -> Manipulating   (pointer down on a handle and/or a body)
//! Manipulating -> Idle   (pointer up, or the target was deleted)
//! ```
//!
//! A single press can leave both a drag target and a resize target behind
//! when hit testing visits every item (see `HitTestPolicy::Compat`): an
//! earlier item's handle and a later item's body may both contain the point.
//! Pointer moves then apply to the drag target.

use crate::geometry::Point;
use crate::types::ItemId;

/// What a pointer move does to the active item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureKind {
    /// Moves `x, y`
    Drag,
    /// Grows `width, height`
    Resize,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub enum InputState {
    /// No gesture in progress
    #[default]
    Idle,

    /// A press hit at least one item and has not been released yet
    Manipulating {
        /// Last pointer position, for per-move deltas
        last_pos: Point,
        /// Item whose body was hit
        dragging: Option<ItemId>,
        /// Item whose handle was hit
        resizing: Option<ItemId>,
    },
}

impl InputState {
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// Returns true if a drag target is set
    pub fn is_dragging(&self) -> bool {
        self.dragged_item_id().is_some()
    }

    /// Returns true if a resize target is set
    pub fn is_resizing(&self) -> bool {
        self.resized_item_id().is_some()
    }

    pub fn dragged_item_id(&self) -> Option<ItemId> {
        match self {
            Self::Manipulating { dragging, .. } => *dragging,
            Self::Idle => None,
        }
    }

    pub fn resized_item_id(&self) -> Option<ItemId> {
        match self {
            Self::Manipulating { resizing, .. } => *resizing,
            Self::Idle => None,
        }
    }

    /// The item a pointer move should mutate. Dragging wins over resizing.
    pub fn active_target(&self) -> Option<(ItemId, GestureKind)> {
        match self {
            Self::Manipulating {
                dragging: Some(id), ..
            } => Some((*id, GestureKind::Drag)),
            Self::Manipulating {
                resizing: Some(id), ..
            } => Some((*id, GestureKind::Resize)),
            _ => None,
        }
    }

    pub fn last_pos(&self) -> Option<Point> {
        match self {
            Self::Manipulating { last_pos, .. } => Some(*last_pos),
            Self::Idle => None,
        }
    }

    pub fn update_last_pos(&mut self, pos: Point) {
        if let Self::Manipulating { last_pos, .. } = self {
            *last_pos = pos;
        }
    }

    /// Enter `Manipulating`, or stay `Idle` when nothing was hit.
    pub fn start(&mut self, pos: Point, dragging: Option<ItemId>, resizing: Option<ItemId>) {
        *self = if dragging.is_none() && resizing.is_none() {
            Self::Idle
        } else {
            Self::Manipulating {
                last_pos: pos,
                dragging,
                resizing,
            }
        };
    }

    /// Drop any reference to `id`, falling back to `Idle` when none remain.
    pub fn forget(&mut self, id: ItemId) {
        if let Self::Manipulating {
            last_pos,
            dragging,
            resizing,
        } = *self
        {
            let dragging = dragging.filter(|d| *d != id);
            let resizing = resizing.filter(|r| *r != id);
            self.start(last_pos, dragging, resizing);
        }
    }

    pub fn reset(&mut self) {
        *self = Self::Idle;
    }
}
