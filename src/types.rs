//! Core types for the image canvas.
//!
//! An [`ImageItem`] is one placed instance of a decoded [`Bitmap`]. Bitmaps
//! are reference-counted so duplicates share pixels instead of copying them.

use crate::error::{EditorError, EditorResult};
use crate::geometry::{is_inside_body, is_inside_handle, Bounds, Point};
use image::RgbaImage;
use std::fmt;
use std::sync::Arc;
use tiny_skia::{IntSize, Pixmap};

/// Identity of an item within one store. Never reused.
pub type ItemId = u64;

/// A decoded image, premultiplied and ready to be drawn.
///
/// Cloning is cheap: clones point at the same pixel buffer.
#[derive(Clone)]
pub struct Bitmap {
    pixels: Arc<Pixmap>,
}

impl Bitmap {
    /// Decode an encoded image (PNG, JPEG, ...) from memory.
    pub fn decode(bytes: &[u8]) -> EditorResult<Self> {
        let rgba = image::load_from_memory(bytes)?.to_rgba8();
        Self::from_rgba(rgba)
    }

    /// Wrap straight-alpha RGBA pixels.
    pub fn from_rgba(image: RgbaImage) -> EditorResult<Self> {
        let (width, height) = image.dimensions();
        let size = IntSize::from_wh(width, height).ok_or(EditorError::EmptyImage)?;

        let mut data = image.into_raw();
        for px in data.chunks_exact_mut(4) {
            let alpha = u16::from(px[3]);
            for channel in &mut px[..3] {
                *channel = ((u16::from(*channel) * alpha + 127) / 255) as u8;
            }
        }

        let pixmap = Pixmap::from_vec(data, size).ok_or(EditorError::Surface { width, height })?;
        Ok(Self {
            pixels: Arc::new(pixmap),
        })
    }

    /// A single-colour bitmap. Handy for placeholders and tests.
    pub fn solid(width: u32, height: u32, rgba: [u8; 4]) -> EditorResult<Self> {
        Self::from_rgba(RgbaImage::from_pixel(width, height, image::Rgba(rgba)))
    }

    /// Natural width in pixels
    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    /// Natural height in pixels
    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    pub fn pixmap(&self) -> &Pixmap {
        &self.pixels
    }

    /// True when both handles refer to the same decoded pixels.
    pub fn ptr_eq(&self, other: &Bitmap) -> bool {
        Arc::ptr_eq(&self.pixels, &other.pixels)
    }

    /// Number of live handles to these pixels.
    pub fn share_count(&self) -> usize {
        Arc::strong_count(&self.pixels)
    }
}

impl fmt::Debug for Bitmap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Bitmap")
            .field("width", &self.width())
            .field("height", &self.height())
            .field("shares", &self.share_count())
            .finish()
    }
}

/// A placed, positioned, resizable image on the canvas.
#[derive(Clone, Debug)]
pub struct ImageItem {
    pub id: ItemId,
    pub image: Bitmap,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// Set while a drag gesture targets this item
    pub is_dragging: bool,
    /// Set while a resize gesture targets this item
    pub is_resizing: bool,
}

impl ImageItem {
    pub fn new(id: ItemId, image: Bitmap, bounds: Bounds) -> Self {
        Self {
            id,
            image,
            x: bounds.x,
            y: bounds.y,
            width: bounds.width,
            height: bounds.height,
            is_dragging: false,
            is_resizing: false,
        }
    }

    #[inline]
    pub fn bounds(&self) -> Bounds {
        Bounds::new(self.x, self.y, self.width, self.height)
    }

    #[inline]
    pub fn position(&self) -> (f32, f32) {
        (self.x, self.y)
    }

    #[inline]
    pub fn size(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    #[inline]
    pub fn contains(&self, pos: Point) -> bool {
        is_inside_body(pos, &self.bounds())
    }

    #[inline]
    pub fn handle_contains(&self, pos: Point, handle_size: f32) -> bool {
        is_inside_handle(pos, &self.bounds(), handle_size)
    }

    /// A copy sharing this item's bitmap, shifted by `offset` on both axes,
    /// with gesture flags cleared.
    pub fn duplicate(&self, id: ItemId, offset: f32) -> Self {
        Self::new(
            id,
            self.image.clone(),
            Bounds::new(self.x + offset, self.y + offset, self.width, self.height),
        )
    }
}
