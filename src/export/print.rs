//! Print hand-off - page document generation and platform sinks.
//!
//! The canvas snapshot is PNG-encoded, embedded as a data URL in a page-sized
//! HTML document, and handed to a [`PrintSink`]. The default sink writes the
//! document to a temp file and opens it with the OS handler, where the
//! embedded script raises the print dialog.

use crate::error::{EditorError, EditorResult};
use crate::settings::PrintSettings;
use anyhow::Context;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use std::io::Write;
use std::path::{Path, PathBuf};
use tiny_skia::Pixmap;

/// One printable page: the encoded canvas plus page layout.
#[derive(Debug, Clone)]
pub struct PrintPage {
    png: Vec<u8>,
    canvas_width: u32,
    canvas_height: u32,
    layout: PrintSettings,
}

impl PrintPage {
    pub fn from_snapshot(snapshot: &Pixmap, layout: &PrintSettings) -> EditorResult<Self> {
        let png = snapshot
            .encode_png()
            .map_err(|e| EditorError::Encode(e.to_string()))?;
        Ok(Self {
            png,
            canvas_width: snapshot.width(),
            canvas_height: snapshot.height(),
            layout: layout.clone(),
        })
    }

    pub fn png_bytes(&self) -> &[u8] {
        &self.png
    }

    /// Size of the captured canvas in pixels.
    pub fn canvas_size(&self) -> (u32, u32) {
        (self.canvas_width, self.canvas_height)
    }

    pub fn layout(&self) -> &PrintSettings {
        &self.layout
    }

    pub fn data_url(&self) -> String {
        format!("data:image/png;base64,{}", STANDARD.encode(&self.png))
    }

    /// Feature string for a popup window sized to the page.
    pub fn window_features(&self) -> String {
        format!("width={},height={}", self.layout.page_width, self.layout.page_height)
    }

    /// Standalone document that centres the canvas at page size, prints on
    /// load and closes itself afterwards.
    pub fn to_html(&self) -> String {
        let PrintSettings {
            page_width,
            page_height,
            title,
        } = &self.layout;
        format!(
            r#"<html>
<head>
    <title>{title}</title>
    <style>
        body {{
            display: flex;
            align-items: center;
            justify-content: center;
            height: 100vh;
            margin: 0;
        }}
        img {{
            width: {page_width}px;
            height: {page_height}px;
        }}
    </style>
</head>
<body>
    <img src="{src}" />
    <script>
        window.onload = function() {{
            window.print();
            window.onafterprint = function() {{
                window.close();
            }};
        }};
    </script>
</body>
</html>
"#,
            title = escape_html(title),
            src = self.data_url(),
        )
    }
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Platform print capability.
pub trait PrintSink {
    fn print(&mut self, page: &PrintPage) -> anyhow::Result<()>;
}

/// Writes the page document to a kept temp file and, optionally, opens it
/// with the default handler.
#[derive(Debug, Default)]
pub struct HtmlFilePrintSink {
    open_after_write: bool,
    dir: Option<PathBuf>,
    last_path: Option<PathBuf>,
}

impl HtmlFilePrintSink {
    /// Sink that opens the document in the browser once written.
    pub fn new() -> Self {
        Self {
            open_after_write: true,
            ..Self::default()
        }
    }

    /// Sink that only writes into `dir`. Useful for headless hosts.
    pub fn write_only(dir: impl Into<PathBuf>) -> Self {
        Self {
            open_after_write: false,
            dir: Some(dir.into()),
            last_path: None,
        }
    }

    /// Where the last document was written.
    pub fn last_path(&self) -> Option<&Path> {
        self.last_path.as_deref()
    }
}

impl PrintSink for HtmlFilePrintSink {
    fn print(&mut self, page: &PrintPage) -> anyhow::Result<()> {
        let mut builder = tempfile::Builder::new();
        builder.prefix("imageboard-print-").suffix(".html");
        let mut file = match &self.dir {
            Some(dir) => builder.tempfile_in(dir),
            None => builder.tempfile(),
        }
        .context("creating print document")?;

        file.write_all(page.to_html().as_bytes())
            .context("writing print document")?;
        let (_, path) = file.keep().context("keeping print document")?;
        tracing::info!(path = %path.display(), "Print document written");

        if self.open_after_write {
            open::that(&path).with_context(|| format!("opening {}", path.display()))?;
        }
        self.last_path = Some(path);
        Ok(())
    }
}
