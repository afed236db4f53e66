//! Canvas geometry and hit-testing predicates.
//!
//! Everything here is pure: no item state is read beyond the rectangle that
//! is passed in, and nothing is mutated.

use serde::{Deserialize, Serialize};

/// A position in canvas coordinates (surface-local pixels).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Component-wise difference `self - origin`.
    #[inline]
    pub fn delta_from(self, origin: Point) -> (f32, f32) {
        (self.x - origin.x, self.y - origin.y)
    }
}

/// Shorthand for [`Point::new`].
#[inline]
pub const fn point(x: f32, y: f32) -> Point {
    Point::new(x, y)
}

/// An item's placement rectangle. Width and height are signed: a resize can
/// push them to zero or below, and nothing here normalizes them.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Bounds {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    #[inline]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    /// Bottom-right corner, `(x + width, y + height)`.
    #[inline]
    pub fn corner(&self) -> Point {
        Point::new(self.x + self.width, self.y + self.height)
    }

    /// True when the rectangle has a visible area.
    #[inline]
    pub fn is_drawable(&self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }

    /// The square handle region anchored at the bottom-right corner.
    #[inline]
    pub fn handle(&self, handle_size: f32) -> Bounds {
        let corner = self.corner();
        Bounds::new(corner.x - handle_size, corner.y - handle_size, handle_size, handle_size)
    }

    /// Axis-aligned envelope covering both the body and the handle, as
    /// `(min_x, min_y, max_x, max_y)`. Stays well-formed for negative sizes.
    pub fn hit_envelope(&self, handle_size: f32) -> (f32, f32, f32, f32) {
        let corner = self.corner();
        (
            self.x.min(corner.x - handle_size),
            self.y.min(corner.y - handle_size),
            self.x.max(corner.x),
            self.y.max(corner.y),
        )
    }
}

/// Inclusive range test on both axes. A negative width or height yields an
/// empty range, so the point is never inside.
#[inline]
pub fn is_inside_body(pos: Point, bounds: &Bounds) -> bool {
    pos.x >= bounds.x
        && pos.x <= bounds.x + bounds.width
        && pos.y >= bounds.y
        && pos.y <= bounds.y + bounds.height
}

/// True iff `pos` lies in the `handle_size` square at the bottom-right corner.
#[inline]
pub fn is_inside_handle(pos: Point, bounds: &Bounds, handle_size: f32) -> bool {
    let corner = bounds.corner();
    pos.x >= corner.x - handle_size
        && pos.x <= corner.x
        && pos.y >= corner.y - handle_size
        && pos.y <= corner.y
}
