//! Export of the composed canvas.

pub mod print;

pub use print::{HtmlFilePrintSink, PrintPage, PrintSink};
