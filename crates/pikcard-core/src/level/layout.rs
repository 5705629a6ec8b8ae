//! Byte layout of a level block
//!
//! A level block follows each signature in the card data. It holds two
//! row-major grids of one byte per cell: terrain first, then the overlay.

/// Grid rows
pub const ROWS: usize = 8;

/// Grid columns
pub const COLS: usize = 11;

/// Cells per grid
pub const CELLS: usize = ROWS * COLS;

/// Distance from the signature start to the first terrain byte
/// (14 signature bytes + 7 header bytes)
pub const BLOCK_SKIP: usize = 21;

/// Terrain grid followed by overlay grid
pub const BLOCK_LEN: usize = CELLS * 2;

pub const TERRAIN_START: usize = 0;
pub const OVERLAY_START: usize = CELLS;

/// Row-major cell index, or `None` outside the grid
pub fn cell_index(row: usize, col: usize) -> Option<usize> {
    (row < ROWS && col < COLS).then(|| row * COLS + col)
}
