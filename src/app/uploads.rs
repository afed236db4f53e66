//! Adding decoded images to the canvas.

use super::Editor;
use crate::error::{EditorError, EditorResult};
use crate::geometry::Bounds;
use crate::types::{Bitmap, ItemId};
use crate::upload::{DecodedUpload, UploadFile};
use std::time::{Duration, Instant};

/// What happened to one submitted upload.
#[derive(Debug)]
pub enum UploadOutcome {
    Added { name: String, item_id: ItemId },
    Failed { name: String, error: EditorError },
}

impl UploadOutcome {
    pub fn item_id(&self) -> Option<ItemId> {
        match self {
            Self::Added { item_id, .. } => Some(*item_id),
            Self::Failed { .. } => None,
        }
    }
}

impl Editor {
    /// Place a decoded image at the configured spot, scaled from its natural
    /// size, on top of everything else.
    pub fn add_image(&mut self, image: Bitmap) -> ItemId {
        let scale = self.settings.upload_scale;
        let bounds = Bounds::new(
            self.settings.placement.x,
            self.settings.placement.y,
            image.width() as f32 * scale,
            image.height() as f32 * scale,
        );
        self.add_image_at(image, bounds)
    }

    /// Place a decoded image at explicit bounds.
    pub fn add_image_at(&mut self, image: Bitmap, bounds: Bounds) -> ItemId {
        let id = self.store.push(image, bounds);
        tracing::info!(
            item_id = id,
            x = bounds.x,
            y = bounds.y,
            width = bounds.width,
            height = bounds.height,
            "Image placed"
        );
        self.redraw();
        id
    }

    /// Decode and place in one step, on the calling thread.
    pub fn upload_bytes(&mut self, bytes: &[u8]) -> EditorResult<ItemId> {
        let image = Bitmap::decode(bytes)?;
        Ok(self.add_image(image))
    }

    /// Hand a picked file to the decode worker. `None` (nothing picked) is a
    /// no-op and returns `Ok(false)`.
    pub fn submit_upload(&mut self, file: Option<UploadFile>) -> EditorResult<bool> {
        let Some(file) = file else {
            return Ok(false);
        };
        tracing::debug!(name = %file.name, bytes = file.bytes.len(), "Upload submitted");
        self.uploads.submit(file)?;
        Ok(true)
    }

    pub fn pending_uploads(&self) -> usize {
        self.uploads.pending()
    }

    /// Append every upload that finished decoding since the last poll.
    pub fn poll_uploads(&mut self) -> Vec<UploadOutcome> {
        let ready = self.uploads.drain_ready();
        ready.into_iter().map(|decoded| self.finish_upload(decoded)).collect()
    }

    /// Block until every pending upload has finished or `timeout` elapses.
    pub fn wait_for_uploads(&mut self, timeout: Duration) -> Vec<UploadOutcome> {
        let deadline = Instant::now() + timeout;
        let mut outcomes = Vec::new();
        while self.uploads.pending() > 0 {
            let remaining = deadline.saturating_duration_since(Instant::now());
            if remaining.is_zero() {
                tracing::warn!(pending = self.uploads.pending(), "Timed out waiting for uploads");
                break;
            }
            match self.uploads.wait_next(remaining) {
                Some(decoded) => outcomes.push(self.finish_upload(decoded)),
                None => break,
            }
        }
        outcomes
    }

    fn finish_upload(&mut self, decoded: DecodedUpload) -> UploadOutcome {
        let DecodedUpload { name, result } = decoded;
        match result {
            Ok(image) => {
                let item_id = self.add_image(image);
                UploadOutcome::Added { name, item_id }
            }
            Err(error) => {
                tracing::warn!(name = %name, "Upload failed: {}", error);
                UploadOutcome::Failed { name, error }
            }
        }
    }
}
