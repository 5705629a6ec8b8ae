//! Memoized tile images
//!
//! Tiles are decoded once per (file, size) pair and kept for the lifetime of
//! the cache. Nothing is written back to disk.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use image::RgbaImage;
use image::imageops::FilterType;
use tracing::{debug, warn};

use crate::error::Result;

#[derive(Debug, Default)]
pub struct TileCache {
    root: PathBuf,
    images: HashMap<(String, u32), RgbaImage>,
}

impl TileCache {
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        Self {
            root: root.into(),
            images: HashMap::new(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// Load `file_name` scaled to `size`x`size`.
    ///
    /// A missing file is not an error: it is logged and `None` is returned so
    /// the caller can skip the cell. Files that exist but fail to decode are.
    pub fn get(&mut self, file_name: &str, size: u32) -> Result<Option<&RgbaImage>> {
        let key = (file_name.to_string(), size);
        if !self.images.contains_key(&key) {
            let path = self.root.join(file_name);
            if !path.exists() {
                warn!("Image not found: {}", path.display());
                return Ok(None);
            }

            let image = image::open(&path)?
                .resize_exact(size, size, FilterType::Lanczos3)
                .to_rgba8();
            debug!("Loaded tile {} at {}px", path.display(), size);
            self.images.insert(key.clone(), image);
        }

        Ok(self.images.get(&key))
    }

    pub fn clear(&mut self) {
        self.images.clear();
    }
}
