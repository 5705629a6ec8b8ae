use super::layout::{BLOCK_LEN, CELLS, COLS, OVERLAY_START, ROWS, TERRAIN_START, cell_index};
use crate::error::{Error, Result};

/// Decoded level: one terrain byte and one overlay byte per cell
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelGrid {
    pub terrain: [u8; CELLS],
    pub overlay: [u8; CELLS],
}

impl Default for LevelGrid {
    fn default() -> Self {
        Self {
            terrain: [0; CELLS],
            overlay: [0; CELLS],
        }
    }
}

impl LevelGrid {
    /// Split a level block into its terrain and overlay grids.
    ///
    /// Bytes past `BLOCK_LEN` are ignored.
    pub fn decode(block: &[u8]) -> Result<Self> {
        if block.len() < BLOCK_LEN {
            return Err(Error::TruncatedBlock {
                offset: 0,
                needed: BLOCK_LEN,
                available: block.len(),
            });
        }

        let mut grid = Self::default();
        grid.terrain
            .copy_from_slice(&block[TERRAIN_START..TERRAIN_START + CELLS]);
        grid.overlay
            .copy_from_slice(&block[OVERLAY_START..OVERLAY_START + CELLS]);
        Ok(grid)
    }

    pub fn encode(&self) -> [u8; BLOCK_LEN] {
        let mut block = [0u8; BLOCK_LEN];
        block[TERRAIN_START..TERRAIN_START + CELLS].copy_from_slice(&self.terrain);
        block[OVERLAY_START..OVERLAY_START + CELLS].copy_from_slice(&self.overlay);
        block
    }

    pub fn terrain_at(&self, row: usize, col: usize) -> Option<u8> {
        cell_index(row, col).map(|i| self.terrain[i])
    }

    pub fn overlay_at(&self, row: usize, col: usize) -> Option<u8> {
        cell_index(row, col).map(|i| self.overlay[i])
    }

    pub fn set_terrain(&mut self, row: usize, col: usize, value: u8) -> Result<()> {
        let i = cell_index(row, col).ok_or(Error::OutOfBounds { row, col })?;
        self.terrain[i] = value;
        Ok(())
    }

    pub fn set_overlay(&mut self, row: usize, col: usize, value: u8) -> Result<()> {
        let i = cell_index(row, col).ok_or(Error::OutOfBounds { row, col })?;
        self.overlay[i] = value;
        Ok(())
    }

    /// Terrain bytes grouped by row
    pub fn terrain_rows(&self) -> impl Iterator<Item = &[u8]> {
        self.terrain.chunks(COLS)
    }

    /// Overlay bytes grouped by row
    pub fn overlay_rows(&self) -> impl Iterator<Item = &[u8]> {
        self.overlay.chunks(COLS)
    }

    /// Iterate `(row, col, terrain, overlay)` in row-major order
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, u8, u8)> + '_ {
        (0..ROWS).flat_map(move |r| {
            (0..COLS).map(move |c| {
                let i = r * COLS + c;
                (r, c, self.terrain[i], self.overlay[i])
            })
        })
    }
}
