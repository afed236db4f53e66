//! Pointer input handling for the canvas.
//!
//! This module implements all pointer interaction logic for the editor:
//! hit testing, selection, dragging and corner resizing.
//!
//! ## Architecture
//!
//! The input system uses an explicit state machine (`InputState`) to track
//! the current gesture instead of loose "dragging"/"resizing" references.
//!
//! ## Modules
//!
//! - `state` - Input state machine enum and helper methods
//! - `mouse_down` - Pointer down handling (hit test, selection, gesture start)
//! - `drag` - Pointer move handling (drag and resize)
//! - `mouse_up` - Pointer up handling (gesture end)

mod state;
mod mouse_down;
mod drag;
mod mouse_up;

pub use mouse_down::PressHit;
pub use state::{GestureKind, InputState};
