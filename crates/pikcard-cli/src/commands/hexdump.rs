//! Hexdump command implementation.
//!
//! Displays raw card bytes in traditional hexdump format, useful for
//! inspecting the header bytes between a signature and its level block.
//!
//! # Output Format
//!
//! ```text
//! 0x000000: 50 49 4B 4D 49 4E 50 55  5A 5A 4C 45 30 31 00 00  |PIKMINPUZZLE01..|
//! ```

use std::path::Path;

use anyhow::{Result, bail};
use pikcard_core::CardFile;

use super::hex_utils::{format_hexdump_line, parse_hex_offset};

/// Run the hexdump command
pub fn run(file: &Path, offset: &str, size: usize, ascii: bool) -> Result<()> {
    let card = CardFile::open(file)?;
    let start = parse_hex_offset(offset)?;

    if start >= card.len() {
        bail!(
            "Offset 0x{:X} is past the end of the file ({} bytes)",
            start,
            card.len()
        );
    }

    let end = start.saturating_add(size).min(card.len());
    let bytes = &card.data()[start..end];

    println!("Hexdump at 0x{:X} ({} bytes):", start, bytes.len());
    println!();

    for (i, chunk) in bytes.chunks(16).enumerate() {
        println!("{}", format_hexdump_line(start + i * 16, chunk, ascii));
    }

    Ok(())
}
