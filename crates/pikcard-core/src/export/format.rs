//! ExportFormat trait definition

use crate::card::LoadedLevel;

/// Trait for export format implementations
///
/// Provides a common interface for the level dump formats (text, JSON).
pub trait ExportFormat {
    /// Returns the header line for the format (None for formats without headers)
    fn header(&self) -> Option<String>;

    /// Format a single decoded level
    fn format_level(&self, level: &LoadedLevel) -> String;

    /// Format multiple levels
    fn format_levels(&self, levels: &[LoadedLevel]) -> String {
        let mut output = String::new();
        if let Some(header) = self.header() {
            output.push_str(&header);
            output.push('\n');
        }
        for level in levels {
            output.push_str(&self.format_level(level));
            output.push('\n');
        }
        output
    }
}

/// Short status word for a level load
pub(crate) fn load_status(level: &LoadedLevel) -> &'static str {
    use crate::card::LevelLoad;

    match level.load {
        LevelLoad::Decoded(_) => "decoded",
        LevelLoad::Unsupported => "unsupported",
        LevelLoad::Failed(_) => "failed",
    }
}
