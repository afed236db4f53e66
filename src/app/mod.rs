//! Application module - the `Editor` and the operations a host can invoke.
//!
//! - `state` - The `Editor` struct definition and accessors
//! - `commands` - Delete / duplicate of the selected item
//! - `uploads` - Adding decoded images, sync and via the decode worker
//! - `print` - Undecorated snapshots and the print hand-off
//!
//! Pointer handling lives in [`crate::input`], drawing in [`crate::render`].

mod state;
mod commands;
mod uploads;
mod print;

pub use state::Editor;
pub use uploads::UploadOutcome;
