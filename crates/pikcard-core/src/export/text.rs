//! Plain-text grid dump

use std::fmt::Write;

use super::format::{ExportFormat, load_status};
use crate::card::{LevelLoad, LoadedLevel};

/// Text exporter: one `TT/OO` pair (terrain/overlay hex) per cell
#[derive(Debug, Clone, Copy, Default)]
pub struct TextExporter;

impl ExportFormat for TextExporter {
    fn header(&self) -> Option<String> {
        None
    }

    fn format_level(&self, level: &LoadedLevel) -> String {
        let mut out = format!(
            "Level {} ({}) at 0x{:X}: {} [{}]",
            level.occurrence.slot,
            level.occurrence.signature,
            level.occurrence.offset,
            level.game_type,
            load_status(level),
        );

        match &level.load {
            LevelLoad::Decoded(grid) => {
                for (terrain, overlay) in grid.terrain_rows().zip(grid.overlay_rows()) {
                    out.push('\n');
                    let cells: Vec<String> = terrain
                        .iter()
                        .zip(overlay)
                        .map(|(t, o)| format!("{:02X}/{:02X}", t, o))
                        .collect();
                    out.push_str(&cells.join(" "));
                }
            }
            LevelLoad::Failed(reason) => {
                let _ = write!(out, "\n  {}", reason);
            }
            LevelLoad::Unsupported => {}
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::{CardFile, builtin_signatures, card_bytes};

    #[test]
    fn test_text_grid() {
        let card = CardFile::from_bytes(card_bytes(0x10, 1, 0x0A, 0x01));
        let levels = card.load_levels(&builtin_signatures(), 1).unwrap();

        let text = TextExporter.format_level(&levels[0]);
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 9);
        assert_eq!(
            lines[0],
            "Level 1 (SEQ1) at 0x10: Plucking Pikmin [decoded]"
        );
        assert!(lines[1].starts_with("0A/01 0A/01"));
        assert_eq!(lines[8].split(' ').count(), 11);
    }

    #[test]
    fn test_text_failed_level() {
        let mut data = card_bytes(0, 1, 0, 0);
        data.truncate(40);
        let card = CardFile::from_bytes(data);
        let levels = card.load_levels(&builtin_signatures(), 1).unwrap();

        let text = TextExporter.format_level(&levels[0]);
        assert!(text.contains("[failed]"));
        assert!(text.contains("truncated"));
    }
}
