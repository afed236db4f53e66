//! Editor-wide constants.
//!
//! Centralizes magic numbers and layout values. Most of them are the defaults
//! behind [`crate::settings::Settings`], which hosts may override.

// ============================================================================
// Canvas Surface
// ============================================================================

/// Default canvas surface width in pixels
pub const DEFAULT_CANVAS_WIDTH: u32 = 800;

/// Default canvas surface height in pixels
pub const DEFAULT_CANVAS_HEIGHT: u32 = 600;

// ============================================================================
// Item Interaction
// ============================================================================

/// Side length of the square resize handle at an item's bottom-right corner
pub const HANDLE_SIZE: f32 = 10.0;

/// Offset applied on both axes when duplicating an item
pub const DUPLICATE_OFFSET: f32 = 20.0;

/// Where freshly uploaded images are placed
pub const DEFAULT_PLACEMENT: (f32, f32) = (50.0, 50.0);

/// Uploaded images start at this fraction of their natural size
pub const UPLOAD_SCALE: f32 = 0.5;

// ============================================================================
// Decoration
// ============================================================================

/// Resize handle fill (red)
pub const HANDLE_COLOR: [u8; 4] = [255, 0, 0, 255];

/// Selection border stroke (blue)
pub const SELECTION_COLOR: [u8; 4] = [0, 0, 255, 255];

/// Selection border stroke width in pixels
pub const SELECTION_LINE_WIDTH: f32 = 2.0;

// ============================================================================
// Print
// ============================================================================

/// A4 page width at 96 DPI, in CSS pixels
pub const PRINT_PAGE_WIDTH: u32 = 794;

/// A4 page height at 96 DPI, in CSS pixels
pub const PRINT_PAGE_HEIGHT: u32 = 1123;

/// Title of the generated print document
pub const PRINT_TITLE: &str = "Print canvas";

/// Settings directory name under the platform config dir
pub const APP_DIR_NAME: &str = "imageboard";

/// Settings file name
pub const SETTINGS_FILE_NAME: &str = "settings.json";
