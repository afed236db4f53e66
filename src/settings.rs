//! Editor settings, loaded from a JSON file in the platform config dir.
//!
//! Every field has a default, so a partial (or empty) file is valid.

use crate::constants::*;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// How a pointer-down resolves overlapping items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HitTestPolicy {
    /// Visit every item in store order; later matches overwrite earlier ones.
    /// Drag and resize targets are tracked separately, so one press can set both.
    #[default]
    Compat,
    /// Visit items front-to-back and stop at the first match.
    Topmost,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasSize {
    pub width: u32,
    pub height: u32,
}

impl Default for CanvasSize {
    fn default() -> Self {
        Self {
            width: DEFAULT_CANVAS_WIDTH,
            height: DEFAULT_CANVAS_HEIGHT,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Placement {
    pub x: f32,
    pub y: f32,
}

impl Default for Placement {
    fn default() -> Self {
        Self {
            x: DEFAULT_PLACEMENT.0,
            y: DEFAULT_PLACEMENT.1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PrintSettings {
    pub page_width: u32,
    pub page_height: u32,
    pub title: String,
}

impl Default for PrintSettings {
    fn default() -> Self {
        Self {
            page_width: PRINT_PAGE_WIDTH,
            page_height: PRINT_PAGE_HEIGHT,
            title: PRINT_TITLE.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub canvas: CanvasSize,
    pub handle_size: f32,
    pub duplicate_offset: f32,
    pub placement: Placement,
    pub upload_scale: f32,
    pub hit_test: HitTestPolicy,
    /// When set, resizing never shrinks an item below this size.
    pub min_item_size: Option<f32>,
    pub handle_color: [u8; 4],
    pub selection_color: [u8; 4],
    pub selection_line_width: f32,
    pub print: PrintSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            canvas: CanvasSize::default(),
            handle_size: HANDLE_SIZE,
            duplicate_offset: DUPLICATE_OFFSET,
            placement: Placement::default(),
            upload_scale: UPLOAD_SCALE,
            hit_test: HitTestPolicy::default(),
            min_item_size: None,
            handle_color: HANDLE_COLOR,
            selection_color: SELECTION_COLOR,
            selection_line_width: SELECTION_LINE_WIDTH,
            print: PrintSettings::default(),
        }
    }
}

/// `<config_dir>/imageboard/settings.json`, if the platform has a config dir.
pub fn default_settings_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR_NAME).join(SETTINGS_FILE_NAME))
}

impl Settings {
    /// Load from the default location, falling back to defaults.
    pub fn load() -> Self {
        match default_settings_path() {
            Some(path) => Self::load_or_default(&path),
            None => Self::default(),
        }
    }

    /// Load from `path`. A missing file gives defaults silently; an
    /// unreadable or malformed one gives defaults with a warning.
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }
        match Self::load_from(path) {
            Ok(settings) => settings,
            Err(e) => {
                tracing::warn!("Failed to load settings, using defaults: {:#}", e);
                Self::default()
            }
        }
    }

    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("reading settings from {}", path.display()))?;
        let settings = serde_json::from_str(&contents)
            .with_context(|| format!("parsing settings in {}", path.display()))?;
        Ok(settings)
    }

    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json).with_context(|| format!("writing settings to {}", path.display()))?;
        Ok(())
    }
}
