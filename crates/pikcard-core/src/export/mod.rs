//! Level dump formats.

mod format;
mod json;
mod text;

pub use format::ExportFormat;
pub use json::{JsonExporter, format_json_entry};
pub use text::TextExporter;
