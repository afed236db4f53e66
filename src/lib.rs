//! Headless image canvas editor.
//!
//! Images are uploaded onto a canvas, then dragged, corner-resized,
//! selected, deleted, duplicated and printed. The host UI forwards pointer
//! events and button presses to an [`Editor`] and displays
//! [`Editor::surface`].

pub mod perf;

pub mod app;
pub mod constants;
pub mod error;
pub mod export;
pub mod geometry;
pub mod input;
pub mod logging;
pub mod render;
pub mod settings;
pub mod spatial_index;
pub mod store;
pub mod types;
pub mod upload;

pub use app::{Editor, UploadOutcome};
pub use error::{EditorError, EditorResult};
pub use geometry::{point, Bounds, Point};
pub use settings::{HitTestPolicy, Settings};
pub use types::{Bitmap, ImageItem, ItemId};
pub use upload::UploadFile;
