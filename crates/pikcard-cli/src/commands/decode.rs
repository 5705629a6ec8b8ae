//! Decode command implementation.

use std::path::Path;

use anyhow::Result;
use pikcard_core::{
    CardFile, EditorConfig, ExportFormat, JsonExporter, TextExporter, builtin_signatures,
};
use tracing::info;

use crate::cli::DumpFormat;

/// Run the decode command
pub fn run(
    file: &Path,
    config: &EditorConfig,
    levels: Option<usize>,
    format: DumpFormat,
    output: Option<&Path>,
) -> Result<()> {
    let card = CardFile::open(file)?;
    let levels_per_card = levels.unwrap_or(config.levels_per_card);
    let levels = card.load_levels(&builtin_signatures(), levels_per_card)?;
    info!("Decoded {} level(s)", levels.len());

    let content = match format {
        DumpFormat::Text => TextExporter.format_levels(&levels),
        DumpFormat::Json => JsonExporter.format_levels(&levels),
    };

    if let Some(output_path) = output {
        std::fs::write(output_path, &content)?;
        eprintln!("Exported to: {}", output_path.display());
    } else {
        print!("{}", content);
    }

    Ok(())
}
