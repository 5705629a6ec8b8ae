//! JSON export format implementation

use serde_json::{Value as JsonValue, json};

use super::format::{ExportFormat, load_status};
use crate::card::{LevelLoad, LoadedLevel};
use crate::level::layout::{COLS, ROWS};

/// JSON exporter (one object per line, NDJSON format)
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonExporter;

impl ExportFormat for JsonExporter {
    fn header(&self) -> Option<String> {
        None
    }

    fn format_level(&self, level: &LoadedLevel) -> String {
        format_json_entry(level).to_string()
    }
}

pub fn format_json_entry(level: &LoadedLevel) -> JsonValue {
    let mut entry = json!({
        "slot": level.occurrence.slot,
        "signature": level.occurrence.signature,
        "offset": level.occurrence.offset,
        "game_type": level.game_type.label(),
        "status": load_status(level),
    });

    match &level.load {
        LevelLoad::Decoded(grid) => {
            entry["rows"] = json!(ROWS);
            entry["cols"] = json!(COLS);
            entry["terrain"] = json!(grid.terrain_rows().collect::<Vec<_>>());
            entry["overlay"] = json!(grid.overlay_rows().collect::<Vec<_>>());
        }
        LevelLoad::Failed(reason) => {
            entry["error"] = json!(reason);
        }
        LevelLoad::Unsupported => {}
    }

    entry
}
