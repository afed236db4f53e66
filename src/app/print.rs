//! Undecorated snapshots and the print hand-off.

use super::Editor;
use crate::error::EditorResult;
use crate::export::{PrintPage, PrintSink};
use tiny_skia::Pixmap;

impl Editor {
    /// Render without handles or selection border and return a copy of that
    /// frame. The selection is put back and the surface redrawn normally
    /// before returning.
    pub fn render_without_decoration(&mut self) -> Pixmap {
        let previous = self.selection.take();
        self.render(false);
        let snapshot = self.surface.clone();

        self.selection = previous;
        self.redraw();
        snapshot
    }

    /// The page that `print` would hand to a sink.
    pub fn print_page(&mut self) -> EditorResult<PrintPage> {
        let snapshot = self.render_without_decoration();
        PrintPage::from_snapshot(&snapshot, &self.settings.print)
    }

    /// Snapshot the canvas and hand it to `sink`. Sink failures are logged
    /// and otherwise ignored; encoding failures are returned.
    pub fn print(&mut self, sink: &mut dyn PrintSink) -> EditorResult<()> {
        let page = self.print_page()?;
        tracing::info!(
            items = self.store.len(),
            png_bytes = page.png_bytes().len(),
            "Sending canvas to print"
        );
        if let Err(e) = sink.print(&page) {
            tracing::warn!("Print hand-off failed: {:#}", e);
        }
        Ok(())
    }
}
