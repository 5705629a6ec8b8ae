//! Tile file names for cell values.

/// Terrain swatches shown in the palette footer
pub const TERRAIN_PALETTE: std::ops::RangeInclusive<u8> = 0x00..=0x06;

/// Pikmin swatches shown in the palette footer
pub const PIKMIN_PALETTE: std::ops::RangeInclusive<u8> = 0x01..=0x06;

/// Terrain tile for a cell byte, e.g. `0A.png`
pub fn terrain_file(value: u8) -> String {
    format!("{:02X}.png", value)
}

/// Overlay (pikmin) tile for a cell byte, e.g. `pik02.png`
pub fn overlay_file(value: u8) -> String {
    format!("pik{:02X}.png", value)
}

/// Palette footer image for a pikmin value, e.g. `Pik02.png`
pub fn pikmin_palette_file(value: u8) -> String {
    format!("Pik{:02}.png", value)
}
