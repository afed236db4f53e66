//! Editor state - the `Editor` struct definition and its accessors.

use crate::error::{EditorError, EditorResult};
use crate::input::InputState;
use crate::perf::PerfMonitor;
use crate::settings::Settings;
use crate::store::ImageStore;
use crate::types::{ImageItem, ItemId};
use crate::upload::UploadQueue;
use tiny_skia::Pixmap;

/// All state of one canvas editor.
///
/// The host owns an `Editor` and forwards pointer events, button presses and
/// upload results to it. Every geometry or selection change redraws
/// [`Editor::surface`].
pub struct Editor {
    pub(crate) settings: Settings,
    pub(crate) store: ImageStore,
    /// The single selected item, if any
    pub(crate) selection: Option<ItemId>,
    pub(crate) input_state: InputState,
    pub(crate) surface: Pixmap,
    pub(crate) perf: PerfMonitor,
    pub(crate) uploads: UploadQueue,
}

impl Editor {
    pub fn new(settings: Settings) -> EditorResult<Self> {
        let (width, height) = (settings.canvas.width, settings.canvas.height);
        let surface = Pixmap::new(width, height).ok_or(EditorError::Surface { width, height })?;

        tracing::debug!(width, height, hit_test = ?settings.hit_test, "Editor created");

        Ok(Self {
            store: ImageStore::new(settings.handle_size),
            settings,
            selection: None,
            input_state: InputState::default(),
            surface,
            perf: PerfMonitor::new(),
            uploads: UploadQueue::new(),
        })
    }

    /// Editor configured from the user's settings file.
    pub fn from_user_settings() -> EditorResult<Self> {
        Self::new(Settings::load())
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Items back-to-front.
    pub fn items(&self) -> &[ImageItem] {
        self.store.items()
    }

    pub fn item(&self, id: ItemId) -> Option<&ImageItem> {
        self.store.get(id)
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    pub fn selected_id(&self) -> Option<ItemId> {
        self.selection
    }

    pub fn selected_item(&self) -> Option<&ImageItem> {
        self.selection.and_then(|id| self.store.get(id))
    }

    pub fn input_state(&self) -> &InputState {
        &self.input_state
    }

    /// The last rendered frame.
    pub fn surface(&self) -> &Pixmap {
        &self.surface
    }

    pub fn perf(&self) -> &PerfMonitor {
        &self.perf
    }

    /// Topmost item whose body contains `pos`.
    pub fn item_at(&self, pos: crate::geometry::Point) -> Option<ItemId> {
        self.store.item_at(pos)
    }
}
