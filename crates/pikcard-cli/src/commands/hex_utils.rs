//! Hex parsing and formatting utilities.

use anyhow::{Result, anyhow};

/// Parse a hex offset string (with or without 0x prefix).
pub fn parse_hex_offset(s: &str) -> Result<usize> {
    let s = s.trim().trim_start_matches("0x").trim_start_matches("0X");
    usize::from_str_radix(s, 16).map_err(|e| anyhow!("Invalid hex offset: {}", e))
}

/// Parse a single cell byte written as hex (`0A`, `0x0a`).
pub fn parse_hex_byte(s: &str) -> Result<u8> {
    let s = s.trim().trim_start_matches("0x").trim_start_matches("0X");
    u8::from_str_radix(s, 16).map_err(|e| anyhow!("Invalid hex byte '{}': {}", s, e))
}

/// Render one hexdump line: offset, 16 hex bytes, optional ASCII column.
pub fn format_hexdump_line(offset: usize, chunk: &[u8], ascii: bool) -> String {
    let mut line = format!("0x{:06X}: ", offset);

    for j in 0..16 {
        if j == 8 {
            line.push(' ');
        }
        match chunk.get(j) {
            Some(byte) => line.push_str(&format!("{:02X} ", byte)),
            None => line.push_str("   "),
        }
    }

    if ascii {
        line.push_str(" |");
        for j in 0..16 {
            line.push(match chunk.get(j) {
                Some(&b) if (0x20..0x7F).contains(&b) => b as char,
                Some(_) => '.',
                None => ' ',
            });
        }
        line.push('|');
    }

    line
}
