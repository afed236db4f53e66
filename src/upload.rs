//! Off-thread image decoding.
//!
//! Submitting an upload returns immediately; a worker thread decodes the
//! bytes and reports back over a channel. Results are picked up whenever
//! the host polls, in completion order.

use crate::error::{EditorError, EditorResult};
use crate::types::Bitmap;
use std::panic::{self, AssertUnwindSafe};
use std::sync::mpsc::{channel, Receiver, RecvTimeoutError, Sender};
use std::thread;
use std::time::Duration;

/// A picked file: display name plus its encoded bytes.
#[derive(Debug, Clone)]
pub struct UploadFile {
    pub name: String,
    pub bytes: Vec<u8>,
}

impl UploadFile {
    pub fn new(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            bytes,
        }
    }
}

/// Result of decoding one submitted file.
#[derive(Debug)]
pub struct DecodedUpload {
    pub name: String,
    pub result: EditorResult<Bitmap>,
}

pub struct UploadQueue {
    tx: Sender<DecodedUpload>,
    rx: Receiver<DecodedUpload>,
    pending: usize,
}

impl Default for UploadQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl UploadQueue {
    pub fn new() -> Self {
        let (tx, rx) = channel();
        Self { tx, rx, pending: 0 }
    }

    /// Start decoding `file` on a worker thread.
    pub fn submit(&mut self, file: UploadFile) -> EditorResult<()> {
        self.spawn_decode(file, Bitmap::decode)
    }

    fn spawn_decode(
        &mut self,
        file: UploadFile,
        decode: fn(&[u8]) -> EditorResult<Bitmap>,
    ) -> EditorResult<()> {
        let tx = self.tx.clone();
        let _detached = thread::Builder::new()
            .name("imageboard-decode".to_string())
            .spawn(move || {
                // A panicking decoder still reports, so `pending` drains.
                let result = panic::catch_unwind(AssertUnwindSafe(|| decode(&file.bytes)))
                    .unwrap_or(Err(EditorError::DecoderPanicked));
                // The editor may already be gone; nothing to report to then.
                let _ = tx.send(DecodedUpload {
                    name: file.name,
                    result,
                });
            })?;
        self.pending += 1;
        Ok(())
    }

    /// Uploads submitted but not yet collected.
    pub fn pending(&self) -> usize {
        self.pending
    }

    /// Collect every finished decode without blocking.
    pub fn drain_ready(&mut self) -> Vec<DecodedUpload> {
        let mut ready = Vec::new();
        while let Ok(decoded) = self.rx.try_recv() {
            self.pending = self.pending.saturating_sub(1);
            ready.push(decoded);
        }
        ready
    }

    /// Block until one decode finishes or `timeout` elapses.
    pub fn wait_next(&mut self, timeout: Duration) -> Option<DecodedUpload> {
        if self.pending == 0 {
            return None;
        }
        match self.rx.recv_timeout(timeout) {
            Ok(decoded) => {
                self.pending -= 1;
                Some(decoded)
            }
            Err(RecvTimeoutError::Timeout | RecvTimeoutError::Disconnected) => None,
        }
    }
}
