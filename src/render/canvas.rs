//! Canvas rendering into a `tiny_skia::Pixmap`.
//!
//! Items are painted back-to-front. Decoration (resize handle, selection
//! border) is painted per item in the same pass, so a later item can cover
//! an earlier item's border.

use crate::app::Editor;
use crate::geometry::Bounds;
use crate::settings::Settings;
use crate::types::{ImageItem, ItemId};
use tiny_skia::{
    Color, FilterQuality, Paint, PathBuilder, Pixmap, PixmapPaint, Rect, Stroke, Transform,
};

/// Colours and sizes used for decoration.
#[derive(Debug, Clone, Copy)]
pub struct CanvasStyle {
    pub handle_size: f32,
    pub handle_color: [u8; 4],
    pub selection_color: [u8; 4],
    pub selection_line_width: f32,
}

impl CanvasStyle {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            handle_size: settings.handle_size,
            handle_color: settings.handle_color,
            selection_color: settings.selection_color,
            selection_line_width: settings.selection_line_width,
        }
    }
}

/// What to decorate in one pass.
#[derive(Debug, Clone, Copy, Default)]
pub struct Decoration {
    pub show_handles: bool,
    pub selected: Option<ItemId>,
}

fn solid_paint(rgba: [u8; 4]) -> Paint<'static> {
    let mut paint = Paint::default();
    paint.set_color_rgba8(rgba[0], rgba[1], rgba[2], rgba[3]);
    paint.anti_alias = true;
    paint
}

/// Draw the item's bitmap stretched into its bounds. Non-positive sizes
/// draw nothing.
fn draw_bitmap(surface: &mut Pixmap, item: &ImageItem) -> bool {
    let bounds = item.bounds();
    if !bounds.is_drawable() {
        return false;
    }

    let source = item.image.pixmap();
    let scale_x = bounds.width / source.width() as f32;
    let scale_y = bounds.height / source.height() as f32;
    let transform = Transform::from_row(scale_x, 0.0, 0.0, scale_y, bounds.x, bounds.y);
    let paint = PixmapPaint {
        quality: FilterQuality::Bilinear,
        ..PixmapPaint::default()
    };

    surface.draw_pixmap(0, 0, source.as_ref(), &paint, transform, None);
    true
}

fn draw_handle(surface: &mut Pixmap, bounds: &Bounds, style: &CanvasStyle) {
    let handle = bounds.handle(style.handle_size);
    if let Some(rect) = Rect::from_xywh(handle.x, handle.y, handle.width, handle.height) {
        let mut paint = solid_paint(style.handle_color);
        paint.anti_alias = false;
        surface.fill_rect(rect, &paint, Transform::identity(), None);
    }
}

fn draw_selection_border(surface: &mut Pixmap, bounds: &Bounds, style: &CanvasStyle) {
    let Some(rect) = Rect::from_xywh(bounds.x, bounds.y, bounds.width, bounds.height) else {
        return;
    };
    let path = PathBuilder::from_rect(rect);
    let stroke = Stroke {
        width: style.selection_line_width,
        ..Default::default()
    };
    surface.stroke_path(
        &path,
        &solid_paint(style.selection_color),
        &stroke,
        Transform::identity(),
        None,
    );
}

/// Clear `surface` and paint every item. Returns how many bitmaps were drawn.
pub fn render_canvas(
    surface: &mut Pixmap,
    items: &[ImageItem],
    decoration: &Decoration,
    style: &CanvasStyle,
) -> usize {
    surface.fill(Color::TRANSPARENT);

    let mut painted = 0;
    for item in items {
        if draw_bitmap(surface, item) {
            painted += 1;
        }

        let bounds = item.bounds();
        if decoration.show_handles {
            draw_handle(surface, &bounds, style);
        }
        if decoration.selected == Some(item.id) {
            draw_selection_border(surface, &bounds, style);
        }
    }
    painted
}

impl Editor {
    /// Full redraw of the surface. `show_handles = false` hides resize
    /// handles; the selection border follows the current selection.
    pub fn render(&mut self, show_handles: bool) {
        crate::profile_scope!("render");

        let decoration = Decoration {
            show_handles,
            selected: self.selection,
        };
        let style = CanvasStyle::from_settings(&self.settings);

        self.perf.begin_frame();
        let painted = render_canvas(&mut self.surface, self.store.items(), &decoration, &style);
        self.perf.end_frame();

        tracing::trace!(
            painted,
            skipped = self.store.len() - painted,
            show_handles,
            "Canvas rendered"
        );
    }

    /// Redraw with decoration, as after any interactive change.
    pub fn redraw(&mut self) {
        self.render(true);
    }
}
