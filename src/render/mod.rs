//! Canvas rendering.
//!
//! - `canvas` - Paints items, resize handles and the selection border

pub mod canvas;

pub use canvas::{render_canvas, CanvasStyle, Decoration};
