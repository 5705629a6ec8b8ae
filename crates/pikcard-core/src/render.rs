//! Compose decoded levels into RGBA images.

use image::imageops::overlay;
use image::{Rgba, RgbaImage};

use crate::config::EditorConfig;
use crate::error::Result;
use crate::level::layout::{COLS, ROWS};
use crate::level::{LevelGrid, ViewSettings};
use crate::tiles::{
    PIKMIN_PALETTE, TERRAIN_PALETTE, TileCache, overlay_file, pikmin_palette_file, terrain_file,
};

const CANVAS_BG: Rgba<u8> = Rgba([255, 255, 255, 255]);
const PALETTE_BG: Rgba<u8> = Rgba([0xCC, 0xCC, 0xCC, 255]);
const CAMERA_COLOR: Rgba<u8> = Rgba([0xF4, 0x90, 0x3C, 255]);
const CAMERA_THICKNESS: u32 = 2;

/// Pixel geometry of the level canvas
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderLayout {
    pub cell_size: u32,
    /// Overlay sprites are drawn this many pixels above their cell
    pub overlay_shift: u32,
}

impl Default for RenderLayout {
    fn default() -> Self {
        EditorConfig::default().into()
    }
}

impl From<EditorConfig> for RenderLayout {
    fn from(config: EditorConfig) -> Self {
        Self::from(&config)
    }
}

impl From<&EditorConfig> for RenderLayout {
    fn from(config: &EditorConfig) -> Self {
        Self {
            cell_size: config.cell_size,
            overlay_shift: config.overlay_shift,
        }
    }
}

impl RenderLayout {
    pub fn canvas_size(&self) -> (u32, u32) {
        (
            (COLS as u32).saturating_mul(self.cell_size),
            (ROWS as u32).saturating_mul(self.cell_size),
        )
    }

    /// Top-left corner of the terrain tile for a cell
    pub fn terrain_origin(&self, row: usize, col: usize) -> (i64, i64) {
        let cell = self.cell_size as i64;
        (col as i64 * cell, row as i64 * cell)
    }

    /// Top-left corner of the overlay sprite for a cell (may be negative)
    pub fn overlay_origin(&self, row: usize, col: usize) -> (i64, i64) {
        let (x, y) = self.terrain_origin(row, col);
        (x, y - self.overlay_shift as i64)
    }

    /// Cell under a canvas pixel
    pub fn cell_at(&self, x: f32, y: f32) -> Option<(usize, usize)> {
        if x < 0.0 || y < 0.0 || self.cell_size == 0 {
            return None;
        }
        let col = (x / self.cell_size as f32) as usize;
        let row = (y / self.cell_size as f32) as usize;
        (row < ROWS && col < COLS).then_some((row, col))
    }
}

/// Draw every terrain tile, then every overlay sprite on top.
///
/// Cells whose tile file is missing are left blank.
pub fn render_level(
    grid: &LevelGrid,
    tiles: &mut TileCache,
    layout: &RenderLayout,
) -> Result<RgbaImage> {
    let (width, height) = layout.canvas_size();
    let mut canvas = RgbaImage::from_pixel(width, height, CANVAS_BG);

    for (row, col, terrain, _) in grid.cells() {
        if let Some(tile) = tiles.get(&terrain_file(terrain), layout.cell_size)? {
            let (x, y) = layout.terrain_origin(row, col);
            overlay(&mut canvas, tile, x, y);
        }
    }

    for (row, col, _, pikmin) in grid.cells() {
        if let Some(tile) = tiles.get(&overlay_file(pikmin), layout.cell_size)? {
            let (x, y) = layout.overlay_origin(row, col);
            overlay(&mut canvas, tile, x, y);
        }
    }

    Ok(canvas)
}

/// Outline the camera rectangle (`width` x `height` cells from the top-left).
pub fn draw_camera(canvas: &mut RgbaImage, view: &ViewSettings, layout: &RenderLayout) {
    let right = (view.width as u32 * layout.cell_size).min(canvas.width());
    let bottom = (view.height as u32 * layout.cell_size).min(canvas.height());

    for y in 0..bottom {
        for x in 0..right {
            let edge = x < CAMERA_THICKNESS
                || y < CAMERA_THICKNESS
                || x + CAMERA_THICKNESS >= right
                || y + CAMERA_THICKNESS >= bottom;
            if edge {
                canvas.put_pixel(x, y, CAMERA_COLOR);
            }
        }
    }
}

/// Palette footer: terrain swatches on the first row, pikmin on the second.
pub fn render_palette(tiles: &mut TileCache, size: u32) -> Result<RgbaImage> {
    let columns = TERRAIN_PALETTE.count().max(PIKMIN_PALETTE.count()) as u32;
    let mut canvas = RgbaImage::from_pixel(columns * size, 2 * size, PALETTE_BG);

    let rows = [
        TERRAIN_PALETTE.map(terrain_file).collect::<Vec<_>>(),
        PIKMIN_PALETTE.map(pikmin_palette_file).collect::<Vec<_>>(),
    ];

    for (row, files) in rows.iter().enumerate() {
        for (col, file) in files.iter().enumerate() {
            if let Some(tile) = tiles.get(file, size)? {
                overlay(
                    &mut canvas,
                    tile,
                    col as i64 * size as i64,
                    row as i64 * size as i64,
                );
            }
        }
    }

    Ok(canvas)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tiles::write_tile;
    use tempfile::tempdir;

    const RED: [u8; 4] = [255, 0, 0, 255];
    const BLUE: [u8; 4] = [0, 0, 255, 255];

    fn is_red(p: &Rgba<u8>) -> bool {
        p[0] > 200 && p[2] < 50
    }

    fn is_blue(p: &Rgba<u8>) -> bool {
        p[2] > 200 && p[0] < 50
    }

    #[test]
    fn test_layout_geometry() {
        let layout = RenderLayout::default();
        assert_eq!(layout.canvas_size(), (528, 384));
        assert_eq!(layout.terrain_origin(1, 2), (96, 48));
        assert_eq!(layout.overlay_origin(0, 0), (0, -14));
        assert_eq!(layout.cell_at(50.0, 10.0), Some((0, 1)));
        assert_eq!(layout.cell_at(527.0, 383.0), Some((7, 10)));
        assert_eq!(layout.cell_at(528.0, 0.0), None);
        assert_eq!(layout.cell_at(-1.0, 0.0), None);
    }

    #[test]
    fn test_render_level_draws_overlay_shifted_up() {
        let dir = tempdir().unwrap();
        write_tile(dir.path(), "00.png", RED);
        write_tile(dir.path(), "pik01.png", BLUE);

        let mut grid = LevelGrid::default();
        grid.set_overlay(1, 0, 0x01).unwrap();

        let mut tiles = TileCache::new(dir.path());
        let layout = RenderLayout::default();
        let canvas = render_level(&grid, &mut tiles, &layout).unwrap();

        assert_eq!(canvas.dimensions(), (528, 384));
        assert!(is_red(canvas.get_pixel(10, 10)));
        // Overlay for row 1 spans y = 34..82
        assert!(is_blue(canvas.get_pixel(10, 40)));
        assert!(is_red(canvas.get_pixel(10, 88)));
        // Neighbouring column has no pikmin
        assert!(is_red(canvas.get_pixel(58, 40)));
    }

    #[test]
    fn test_render_level_skips_missing_tiles() {
        let dir = tempdir().unwrap();
        let mut tiles = TileCache::new(dir.path());
        let canvas =
            render_level(&LevelGrid::default(), &mut tiles, &RenderLayout::default()).unwrap();
        assert_eq!(*canvas.get_pixel(100, 100), CANVAS_BG);
    }

    #[test]
    fn test_draw_camera_outline() {
        let layout = RenderLayout::default();
        let (w, h) = layout.canvas_size();
        let mut canvas = RgbaImage::from_pixel(w, h, CANVAS_BG);
        let view = ViewSettings {
            width: 2,
            height: 9,
            ..ViewSettings::default()
        };
        draw_camera(&mut canvas, &view, &layout);

        assert_eq!(*canvas.get_pixel(0, 0), CAMERA_COLOR);
        assert_eq!(*canvas.get_pixel(95, 10), CAMERA_COLOR);
        assert_eq!(*canvas.get_pixel(50, 50), CANVAS_BG);
        assert_eq!(*canvas.get_pixel(120, 10), CANVAS_BG);
        // Height 9 is clipped to the 8-row canvas
        assert_eq!(*canvas.get_pixel(50, h - 1), CAMERA_COLOR);
    }

    #[test]
    fn test_render_palette() {
        let dir = tempdir().unwrap();
        write_tile(dir.path(), "03.png", RED);
        write_tile(dir.path(), "Pik02.png", BLUE);

        let mut tiles = TileCache::new(dir.path());
        let palette = render_palette(&mut tiles, 36).unwrap();
        assert_eq!(palette.dimensions(), (7 * 36, 72));
        assert!(is_red(palette.get_pixel(3 * 36 + 5, 5)));
        assert!(is_blue(palette.get_pixel(36 + 5, 36 + 5)));
        assert_eq!(*palette.get_pixel(5, 5), PALETTE_BG);
    }
}
