//! Scan command implementation.

use std::path::Path;

use anyhow::Result;
use owo_colors::OwoColorize;
use pikcard_core::{CardFile, GameType, builtin_signatures};

/// Run the scan command
pub fn run(file: &Path) -> Result<()> {
    let card = CardFile::open(file)?;
    let signatures = builtin_signatures();
    let occurrences = card.occurrences(&signatures)?;

    println!("{} ({} bytes)", file.display(), card.len());
    println!();

    if occurrences.is_empty() {
        println!("{}", "No level signatures found".yellow());
        return Ok(());
    }

    for (i, occ) in occurrences.iter().enumerate() {
        let game_type = GameType::for_slot(occ.slot).unwrap_or_default();
        let status = match card.level_block(occ) {
            Ok(_) if game_type.is_supported() => "ok".green().to_string(),
            Ok(_) => "no decoder".yellow().to_string(),
            Err(_) => "truncated".red().to_string(),
        };
        println!(
            "[{}] 0x{:X}  {}  level {}  {}  {}",
            i + 1,
            occ.offset,
            occ.signature.bold(),
            occ.slot,
            game_type,
            status
        );
    }

    println!();
    println!("Found {} signature(s)", occurrences.len());

    Ok(())
}
