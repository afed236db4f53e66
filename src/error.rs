//! Error types for editor operations
//!
//! Provides unified error handling for decoding, rendering and export.

use thiserror::Error;

/// Errors that can occur while editing or exporting the canvas
#[derive(Error, Debug)]
pub enum EditorError {
    /// The uploaded bytes could not be decoded as an image
    #[error("Image decode error: {0}")]
    Decode(#[from] image::ImageError),

    /// The decoder panicked instead of returning an error
    #[error("Image decoder panicked")]
    DecoderPanicked,

    /// Decoded image has no pixels
    #[error("Image has zero width or height")]
    EmptyImage,

    /// A drawing surface could not be allocated
    #[error("Cannot allocate a {width}x{height} surface")]
    Surface { width: u32, height: u32 },

    /// PNG encoding of the surface failed
    #[error("PNG encode error: {0}")]
    Encode(String),

    /// IO error from std::io
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for editor operations
pub type EditorResult<T> = Result<T, EditorError>;
