//! Render command implementation.

use std::path::Path;

use anyhow::{Context, Result, bail};
use pikcard_core::{
    CardFile, EditorConfig, GameType, RenderLayout, TileCache, ViewSettings, builtin_signatures,
    draw_camera, render_level,
};
use tracing::info;

/// Split a camera spec like `11x8` into its width and height parts.
pub fn split_camera(spec: &str) -> Result<(&str, &str)> {
    spec.split_once(['x', 'X'])
        .with_context(|| format!("Camera must look like WIDTHxHEIGHT, got '{}'", spec))
}

/// Run the render command
pub fn run(
    file: &Path,
    config: &EditorConfig,
    output: &Path,
    level: u8,
    camera: Option<&str>,
    tiles: Option<&Path>,
) -> Result<()> {
    let card = CardFile::open(file)?;
    let occurrence = card.occurrence_for_slot(&builtin_signatures(), level)?;

    let mut view = ViewSettings {
        game_type: GameType::for_slot(level).unwrap_or_default(),
        ..ViewSettings::default()
    };
    if let Some(spec) = camera {
        let (width, height) = split_camera(spec)?;
        if !view.apply_input(level as usize, view.game_type, width, height) {
            bail!("Camera size must be numeric, got '{}'", spec);
        }
    }

    let grid = card.decode_as(&occurrence, view.game_type)?;

    let tile_dir = tiles.unwrap_or(config.tile_dir.as_path());
    let mut cache = TileCache::new(tile_dir);
    let layout = RenderLayout::from(config);

    let mut image = render_level(&grid, &mut cache, &layout)?;
    if camera.is_some() {
        draw_camera(&mut image, &view, &layout);
    }

    image
        .save(output)
        .with_context(|| format!("Failed to write {}", output.display()))?;
    info!(
        "Rendered level {} ({} tiles loaded) to {}",
        level,
        cache.len(),
        output.display()
    );

    Ok(())
}
