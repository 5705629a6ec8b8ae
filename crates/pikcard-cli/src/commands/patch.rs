//! Patch command implementation.

use std::path::Path;

use anyhow::{Result, bail};
use pikcard_core::{CardFile, GameType, builtin_signatures};
use tracing::info;

use super::hex_utils::parse_hex_byte;

/// Run the patch command
pub fn run(
    file: &Path,
    level: u8,
    (row, col): (usize, usize),
    terrain: Option<&str>,
    overlay: Option<&str>,
    output: Option<&Path>,
) -> Result<()> {
    let mut card = CardFile::open(file)?;
    let occurrence = card.occurrence_for_slot(&builtin_signatures(), level)?;
    let game_type = GameType::for_slot(level).unwrap_or_default();
    let mut grid = card.decode_as(&occurrence, game_type)?;

    match (terrain, overlay) {
        (Some(value), None) => {
            let value = parse_hex_byte(value)?;
            let old = grid.terrain_at(row, col);
            grid.set_terrain(row, col, value)?;
            println!(
                "Terrain ({}, {}): {:02X} -> {:02X}",
                row,
                col,
                old.unwrap_or_default(),
                value
            );
        }
        (None, Some(value)) => {
            let value = parse_hex_byte(value)?;
            let old = grid.overlay_at(row, col);
            grid.set_overlay(row, col, value)?;
            println!(
                "Overlay ({}, {}): {:02X} -> {:02X}",
                row,
                col,
                old.unwrap_or_default(),
                value
            );
        }
        _ => bail!("Specify exactly one of --terrain or --overlay"),
    }

    card.write_level(&occurrence, &grid)?;

    let target = output.unwrap_or(file);
    card.save(target)?;
    info!("Patched level {} in {}", level, target.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn write_card(path: &Path) {
        let mut data = vec![0u8; 6];
        data.extend_from_slice(b"PIKMINPUZZLE01");
        data.extend_from_slice(&[0u8; 7 + 176]);
        std::fs::write(path, data).unwrap();
    }

    #[test]
    fn test_patch_to_new_file() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("card.bin");
        let output = dir.path().join("patched.bin");
        write_card(&input);

        run(&input, 1, (2, 4), None, Some("03"), Some(output.as_path())).unwrap();

        let card = CardFile::open(&output).unwrap();
        let occurrence = card.occurrence_for_slot(&builtin_signatures(), 1).unwrap();
        let grid = card.decode_as(&occurrence, GameType::Plucking).unwrap();
        assert_eq!(grid.overlay_at(2, 4), Some(0x03));
        assert_eq!(grid.terrain_at(2, 4), Some(0x00));

        // Input untouched
        let original = CardFile::open(&input).unwrap();
        let grid = original.decode_as(&occurrence, GameType::Plucking).unwrap();
        assert_eq!(grid.overlay_at(2, 4), Some(0x00));
    }

    #[test]
    fn test_patch_rejects_out_of_bounds() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("card.bin");
        write_card(&input);
        assert!(run(&input, 1, (8, 0), Some("01"), None, None).is_err());
        assert!(run(&input, 2, (0, 0), Some("01"), None, None).is_err());
    }
}
