//! Editor configuration (TOML)

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::card::clamp_levels_per_card;
use crate::error::Result;

/// Config file name inside the user config directory
const CONFIG_FILE: &str = "config.toml";

/// Largest accepted cell or swatch size in pixels
pub const MAX_PIXEL_SIZE: u32 = 512;

/// Clamp a cell or swatch size into 1..=MAX_PIXEL_SIZE
fn clamp_pixel_size(size: u32) -> u32 {
    size.clamp(1, MAX_PIXEL_SIZE)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Folder holding the tile and pikmin PNGs
    pub tile_dir: PathBuf,
    /// Size of one grid cell in pixels
    pub cell_size: u32,
    /// How far overlay sprites are lifted above their cell, in pixels
    pub overlay_shift: u32,
    /// Size of one palette swatch in pixels
    pub palette_size: u32,
    /// How many signature occurrences are decoded per card
    pub levels_per_card: usize,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            tile_dir: PathBuf::from("tiles"),
            cell_size: 48,
            overlay_shift: 14,
            palette_size: 36,
            levels_per_card: 1,
        }
    }
}

impl EditorConfig {
    pub fn builder() -> EditorConfigBuilder {
        EditorConfigBuilder::default()
    }

    /// `<config dir>/pikcard/config.toml`, when the platform has a config dir
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("pikcard").join(CONFIG_FILE))
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        Ok(config.clamped())
    }

    fn clamped(mut self) -> Self {
        self.cell_size = clamp_pixel_size(self.cell_size);
        self.palette_size = clamp_pixel_size(self.palette_size);
        self.levels_per_card = clamp_levels_per_card(self.levels_per_card);
        self
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml::to_string_pretty(self)?)?;
        info!("Saved config to {}", path.display());
        Ok(())
    }

    /// Load from `path` (or the default location), falling back to defaults.
    pub fn load_or_default(path: Option<&Path>) -> Self {
        let Some(path) = path.map(Path::to_path_buf).or_else(Self::default_path) else {
            return Self::default();
        };

        match Self::load(&path) {
            Ok(config) => {
                info!("Loaded config from {}", path.display());
                config
            }
            Err(e) if e.is_not_found() => {
                debug!("No config at {}, using defaults", path.display());
                Self::default()
            }
            Err(e) => {
                warn!("Failed to load config: {}, using defaults", e);
                Self::default()
            }
        }
    }
}

/// Builder for EditorConfig
#[derive(Debug, Clone, Default)]
pub struct EditorConfigBuilder {
    tile_dir: Option<PathBuf>,
    cell_size: Option<u32>,
    overlay_shift: Option<u32>,
    palette_size: Option<u32>,
    levels_per_card: Option<usize>,
}

impl EditorConfigBuilder {
    pub fn tile_dir<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.tile_dir = Some(path.into());
        self
    }

    /// Clamped to 1..=512
    pub fn cell_size(mut self, size: u32) -> Self {
        self.cell_size = Some(size);
        self
    }

    pub fn overlay_shift(mut self, shift: u32) -> Self {
        self.overlay_shift = Some(shift);
        self
    }

    /// Clamped to 1..=512
    pub fn palette_size(mut self, size: u32) -> Self {
        self.palette_size = Some(size);
        self
    }

    /// Clamped to 1..=3
    pub fn levels_per_card(mut self, levels: usize) -> Self {
        self.levels_per_card = Some(levels);
        self
    }

    pub fn build(self) -> EditorConfig {
        let default = EditorConfig::default();
        EditorConfig {
            tile_dir: self.tile_dir.unwrap_or(default.tile_dir),
            cell_size: self.cell_size.unwrap_or(default.cell_size),
            overlay_shift: self.overlay_shift.unwrap_or(default.overlay_shift),
            palette_size: self.palette_size.unwrap_or(default.palette_size),
            levels_per_card: self.levels_per_card.unwrap_or(default.levels_per_card),
        }
        .clamped()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_builder_defaults_and_clamp() {
        let config = EditorConfig::builder().levels_per_card(7).build();
        assert_eq!(config.levels_per_card, 3);
        assert_eq!(config.cell_size, 48);
        assert_eq!(config.overlay_shift, 14);
        assert_eq!(config.tile_dir, PathBuf::from("tiles"));
    }

    #[test]
    fn test_builder_clamps_pixel_sizes() {
        let config = EditorConfig::builder()
            .cell_size(0)
            .palette_size(u32::MAX)
            .build();
        assert_eq!(config.cell_size, 1);
        assert_eq!(config.palette_size, MAX_PIXEL_SIZE);
    }

    #[test]
    fn test_load_clamps_pixel_sizes() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "cell_size = 4000000000\npalette_size = 0\n").unwrap();

        let loaded = EditorConfig::load(&path).unwrap();
        assert_eq!(loaded.cell_size, MAX_PIXEL_SIZE);
        assert_eq!(loaded.palette_size, 1);

        // The widest canvas must fit in u32 pixels
        let layout = crate::RenderLayout::from(&loaded);
        assert_eq!(layout.canvas_size().0, 11 * MAX_PIXEL_SIZE);
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let config = EditorConfig::builder()
            .tile_dir("assets/tiles")
            .cell_size(32)
            .levels_per_card(2)
            .build();
        config.save(&path).unwrap();

        let loaded = EditorConfig::load(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "cell_size = 24\nlevels_per_card = 0\n").unwrap();

        let loaded = EditorConfig::load(&path).unwrap();
        assert_eq!(loaded.cell_size, 24);
        assert_eq!(loaded.levels_per_card, 1);
        assert_eq!(loaded.palette_size, 36);
    }

    #[test]
    fn test_load_or_default_falls_back() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("missing.toml");
        assert_eq!(
            EditorConfig::load_or_default(Some(&missing)),
            EditorConfig::default()
        );

        let broken = dir.path().join("broken.toml");
        fs::write(&broken, "cell_size = \"big\"").unwrap();
        assert_eq!(
            EditorConfig::load_or_default(Some(&broken)),
            EditorConfig::default()
        );
    }
}
