pub mod html;
pub mod pdf;

pub use html::RenderOptions;
pub use pdf::{CommandPdfExporter, PdfExporter, PdfRendition};
