use std::path::PathBuf;

use eframe::egui;
use pikcard_core::{
    CardFile, EditorConfig, Error as CoreError, GameType, LevelLoad, LevelSignature, RenderLayout,
    TileCache, builtin_signatures, draw_camera, render_level,
};
use tracing::{error, info, warn};

use crate::palette::{self, Brush, SwatchTextures};
use crate::tabs::{self, LevelTab, TAB_NAMES, tab_index_for_slot};

pub struct EditorApp {
    config: EditorConfig,
    signatures: Vec<LevelSignature>,
    layout: RenderLayout,

    card: Option<CardFile>,
    card_path: Option<PathBuf>,

    tabs: Vec<LevelTab>,
    current_tab: usize,

    tiles: TileCache,
    swatches: SwatchTextures,
    brush: Option<Brush>,

    status: String,
}

impl EditorApp {
    pub fn new(config: EditorConfig) -> Self {
        Self {
            layout: RenderLayout::from(&config),
            tiles: TileCache::new(config.tile_dir.clone()),
            signatures: builtin_signatures(),
            card: None,
            card_path: None,
            tabs: (0..TAB_NAMES.len()).map(LevelTab::new).collect(),
            current_tab: 0,
            swatches: SwatchTextures::default(),
            brush: None,
            status: "Ready.".into(),
            config,
        }
    }

    fn import_card(&mut self) {
        let Some(path) = rfd::FileDialog::new()
            .set_title("Select BIN File")
            .add_filter("BIN files", &["bin"])
            .add_filter("All files", &["*"])
            .pick_file()
        else {
            return;
        };

        match self.load_card(&path) {
            Ok(count) => {
                self.status = format!("Loaded {} level(s) from {}", count, path.display());
                self.card_path = Some(path);
            }
            Err(e) => {
                error!("Import failed: {}", e);
                self.status = format!("Import failed: {}", e);
            }
        }
    }

    fn load_card(&mut self, path: &std::path::Path) -> pikcard_core::Result<usize> {
        let card = CardFile::open(path)?;
        let levels = card.load_levels(&self.signatures, self.config.levels_per_card)?;

        // Pick up tiles added to the folder since the last import
        self.tiles.clear();
        self.swatches.clear();
        info!("Drawing tiles from {}", self.tiles.root().display());

        for tab in &mut self.tabs {
            tab.clear_level();
        }

        let mut count = 0;
        for level in levels {
            let Some(index) = tab_index_for_slot(level.occurrence.slot) else {
                warn!("No tab for level slot {}", level.occurrence.slot);
                continue;
            };
            info!("{}", level.occurrence.signature);

            let tab = &mut self.tabs[index];
            tab.set_game_type(level.game_type);

            let (grid, notice) = match level.load {
                LevelLoad::Decoded(grid) => (Some(grid), None),
                LevelLoad::Unsupported => (None, Some(unsupported_notice(level.game_type))),
                LevelLoad::Failed(reason) => (None, Some(reason)),
            };
            tab.set_level(level.occurrence, grid, notice);
            count += 1;
        }

        self.card = Some(card);
        Ok(count)
    }

    /// Apply the tab's controls, decoding its block again if that switched
    /// the game type.
    fn apply_controls(&mut self, index: usize) {
        let before = self.tabs[index].view.game_type;
        if !self.tabs[index].apply_controls() || self.tabs[index].view.game_type == before {
            return;
        }

        if let Err(e) = self.redecode_tab(index) {
            error!("Failed to keep edits of {}: {}", self.tabs[index].name(), e);
            self.status = format!("Failed to keep edits of {}: {}", self.tabs[index].name(), e);
        }
    }

    /// Decode the tab's block again with its (new) game type.
    ///
    /// Unsaved edits are written into the card buffer first, so they survive
    /// the switch and the tab stays modified.
    fn redecode_tab(&mut self, index: usize) -> pikcard_core::Result<()> {
        let tab = &mut self.tabs[index];
        let (Some(card), Some(occurrence)) = (self.card.as_mut(), tab.occurrence.clone()) else {
            return Ok(());
        };

        let modified = tab.modified;
        if let (true, Some(grid)) = (modified, &tab.grid) {
            card.write_level(&occurrence, grid)?;
        }

        let game_type = tab.view.game_type;
        match card.decode_as(&occurrence, game_type) {
            Ok(grid) => tab.set_level(occurrence, Some(grid), None),
            Err(CoreError::UnsupportedGameType(_)) => {
                tab.set_level(occurrence, None, Some(unsupported_notice(game_type)))
            }
            Err(e) => tab.set_level(occurrence, None, Some(e.to_string())),
        }
        tab.modified = modified;
        Ok(())
    }

    /// Encode every modified grid into the card buffer.
    fn write_back(&mut self) -> pikcard_core::Result<usize> {
        let Some(card) = self.card.as_mut() else {
            return Ok(0);
        };

        let mut written = 0;
        for tab in &self.tabs {
            if let (true, Some(occ), Some(grid)) = (tab.modified, &tab.occurrence, &tab.grid) {
                card.write_level(occ, grid).inspect_err(|e| {
                    error!("Failed to write {}: {}", tab.name(), e);
                })?;
                written += 1;
            }
        }
        Ok(written)
    }

    fn save_card(&mut self) {
        if self.card.is_none() {
            self.status = "Nothing to save: import a card first".into();
            return;
        }
        if let Err(e) = self.write_back() {
            self.status = format!("Failed to write levels: {}", e);
            return;
        }

        let mut dialog = rfd::FileDialog::new()
            .set_title("Save BIN File")
            .add_filter("BIN files", &["bin"]);
        if let Some(path) = &self.card_path {
            if let Some(name) = path.file_name() {
                dialog = dialog.set_file_name(name.to_string_lossy());
            }
            if let Some(dir) = path.parent() {
                dialog = dialog.set_directory(dir);
            }
        }
        let Some(path) = dialog.save_file() else {
            return;
        };
        let Some(card) = &self.card else {
            return;
        };

        match card.save(&path) {
            Ok(()) => {
                for tab in &mut self.tabs {
                    tab.modified = false;
                }
                self.status = format!("Saved {}", path.display());
                self.card_path = Some(path);
            }
            Err(e) => {
                error!("Save failed: {}", e);
                self.status = format!("Save failed: {}", e);
            }
        }
    }

    fn refresh_texture(&mut self, ctx: &egui::Context, index: usize) {
        let tab = &mut self.tabs[index];
        if !tab.needs_redraw {
            return;
        }
        tab.needs_redraw = false;

        let Some(grid) = &tab.grid else {
            tab.texture = None;
            return;
        };

        match render_level(grid, &mut self.tiles, &self.layout) {
            Ok(mut image) => {
                draw_camera(&mut image, &tab.view, &self.layout);
                let name = format!("level_{}", index);
                match &mut tab.texture {
                    Some(texture) => {
                        texture.set(to_color_image(&image), egui::TextureOptions::LINEAR)
                    }
                    None => {
                        tab.texture = Some(ctx.load_texture(
                            name,
                            to_color_image(&image),
                            egui::TextureOptions::LINEAR,
                        ))
                    }
                }
            }
            Err(e) => {
                error!("Failed to render {}: {}", tab.name(), e);
                self.status = format!("Failed to render {}: {}", tab.name(), e);
                tab.texture = None;
            }
        }
    }

    fn render_top_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                let import = egui::Button::new("Import card data")
                    .fill(egui::Color32::from_rgb(0xD9, 0xEA, 0xD3));
                if ui.add(import).clicked() {
                    self.import_card();
                }

                for (i, name) in TAB_NAMES.iter().enumerate() {
                    if ui.selectable_label(self.current_tab == i, *name).clicked() {
                        self.current_tab = i;
                    }
                }

                ui.separator();
                if ui
                    .add_enabled(self.card.is_some(), egui::Button::new("Save card"))
                    .clicked()
                {
                    self.save_card();
                }
            });
            ui.label(egui::RichText::new(&self.status).small().weak());
        });
    }

    fn render_controls(&mut self, ctx: &egui::Context) {
        let index = self.current_tab;
        let mut controls_changed = false;
        egui::SidePanel::left("controls")
            .exact_width(160.0)
            .resizable(false)
            .show(ctx, |ui| {
                controls_changed = tabs::show_controls(&mut self.tabs[index], ui);
            });

        if controls_changed {
            self.apply_controls(index);
        }
    }

    fn render_footer(&mut self, ctx: &egui::Context) {
        let size = self.config.palette_size;
        egui::TopBottomPanel::bottom("footer")
            .resizable(false)
            .show(ctx, |ui| {
                ui.add_space(4.0);
                palette::show(
                    ui,
                    &mut self.swatches,
                    &mut self.tiles,
                    size,
                    &mut self.brush,
                );
                ui.add_space(4.0);
            });
    }

    fn render_canvas(&mut self, ctx: &egui::Context) {
        let index = self.current_tab;
        self.refresh_texture(ctx, index);

        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(egui::Color32::WHITE))
            .show(ctx, |ui| {
                let tab = &mut self.tabs[index];
                let Some(texture) = &tab.texture else {
                    ui.centered_and_justified(|ui| {
                        let text = tab.notice.as_deref().unwrap_or("Import a card to begin");
                        ui.label(egui::RichText::new(text).color(egui::Color32::DARK_GRAY));
                    });
                    return;
                };

                let (width, height) = self.layout.canvas_size();
                let texture_id = texture.id();
                egui::ScrollArea::both().show(ui, |ui| {
                    let (rect, response) = ui.allocate_exact_size(
                        egui::vec2(width as f32, height as f32),
                        egui::Sense::click(),
                    );
                    let uv = egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0));
                    ui.painter()
                        .image(texture_id, rect, uv, egui::Color32::WHITE);

                    if response.clicked() {
                        let cell = response.interact_pointer_pos().and_then(|pos| {
                            let local = pos - rect.min;
                            self.layout.cell_at(local.x, local.y)
                        });
                        if let (Some(cell), Some(brush)) = (cell, self.brush) {
                            tab.paint(cell, brush);
                        }
                    }
                });
            });
    }
}

impl eframe::App for EditorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Side -> Bottom -> Central
        self.render_top_bar(ctx);
        self.render_controls(ctx);
        self.render_footer(ctx);
        self.render_canvas(ctx);
    }
}

fn unsupported_notice(game_type: GameType) -> String {
    format!("{} levels are not supported yet", game_type)
}

pub fn to_color_image(image: &image::RgbaImage) -> egui::ColorImage {
    let size = [image.width() as usize, image.height() as usize];
    egui::ColorImage::from_rgba_unmultiplied(size, image.as_raw())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pikcard_core::level::layout::{BLOCK_SKIP, CELLS};
    use std::path::{Path, PathBuf};
    use tempfile::{TempDir, tempdir};

    /// Filler, then one signature with a uniform level block
    fn level_bytes(prefix: usize, slot: u8, terrain: u8) -> Vec<u8> {
        let mut data = vec![0xEEu8; prefix];
        data.extend_from_slice(format!("PIKMINPUZZLE{:02}", slot).as_bytes());
        data.extend_from_slice(&[0u8; BLOCK_SKIP - 14]);
        data.extend_from_slice(&[terrain; CELLS]);
        data.extend_from_slice(&[0u8; CELLS]);
        data
    }

    fn write_card(dir: &TempDir, data: &[u8]) -> PathBuf {
        let path = dir.path().join("card.bin");
        std::fs::write(&path, data).unwrap();
        path
    }

    fn app_with_card(config: EditorConfig, data: &[u8]) -> (EditorApp, TempDir) {
        let dir = tempdir().unwrap();
        let path = write_card(&dir, data);
        let mut app = EditorApp::new(config);
        app.load_card(&path).unwrap();
        (app, dir)
    }

    fn reopen(path: &Path, slot: u8) -> pikcard_core::LevelGrid {
        let card = CardFile::open(path).unwrap();
        let occ = card
            .occurrence_for_slot(&builtin_signatures(), slot)
            .unwrap();
        card.decode_as(&occ, GameType::Plucking).unwrap()
    }

    #[test]
    fn test_load_card_routes_levels_by_slot() {
        let mut data = level_bytes(8, 1, 0x02);
        data.extend(level_bytes(4, 3, 0x04));
        let config = EditorConfig::builder().levels_per_card(3).build();

        let dir = tempdir().unwrap();
        let path = write_card(&dir, &data);
        let mut app = EditorApp::new(config);
        assert_eq!(app.load_card(&path).unwrap(), 2);
        assert!(app.card.is_some());

        let first = &app.tabs[0];
        assert_eq!(first.view.game_type, GameType::Plucking);
        assert_eq!(first.grid.as_ref().unwrap().terrain_at(0, 0), Some(0x02));
        assert!(first.notice.is_none());

        assert!(app.tabs[1].occurrence.is_none());

        let third = &app.tabs[2];
        assert_eq!(third.occurrence.as_ref().unwrap().slot, 3);
        assert_eq!(third.view.game_type, GameType::Connecting);
        assert_eq!(third.game_type_choice, GameType::Connecting);
        assert!(third.grid.is_none());
        assert!(third.notice.as_ref().unwrap().contains("not supported"));
    }

    #[test]
    fn test_load_card_default_takes_first_seq1() {
        let mut data = level_bytes(8, 2, 0x03);
        data.extend(level_bytes(4, 1, 0x01));

        let (app, _dir) = app_with_card(EditorConfig::default(), &data);
        assert_eq!(app.tabs[0].occurrence.as_ref().unwrap().signature, "SEQ1");
        assert_eq!(
            app.tabs[0].grid.as_ref().unwrap().terrain_at(7, 10),
            Some(0x01)
        );
        assert!(app.tabs[1].occurrence.is_none());
        assert!(app.tabs[2].occurrence.is_none());
    }

    #[test]
    fn test_load_card_without_levels_keeps_tabs() {
        let (mut app, dir) = app_with_card(EditorConfig::default(), &level_bytes(0, 1, 0x02));
        let empty = dir.path().join("empty.bin");
        std::fs::write(&empty, [0u8; 64]).unwrap();

        assert!(matches!(
            app.load_card(&empty),
            Err(CoreError::SignatureNotFound)
        ));
        assert!(app.tabs[0].grid.is_some());
    }

    #[test]
    fn test_load_card_clears_tile_cache() {
        let tiles = tempdir().unwrap();
        image::RgbaImage::from_pixel(8, 8, image::Rgba([1, 2, 3, 255]))
            .save(tiles.path().join("00.png"))
            .unwrap();
        let config = EditorConfig::builder().tile_dir(tiles.path()).build();

        let dir = tempdir().unwrap();
        let path = write_card(&dir, &level_bytes(0, 1, 0x00));
        let mut app = EditorApp::new(config);
        assert!(app.tiles.get("00.png", 8).unwrap().is_some());
        assert_eq!(app.tiles.len(), 1);

        app.load_card(&path).unwrap();
        assert!(app.tiles.is_empty());
        assert_eq!(app.tiles.root(), tiles.path());
    }

    #[test]
    fn test_rejected_camera_text_keeps_edits() {
        let (mut app, _dir) = app_with_card(EditorConfig::default(), &level_bytes(0, 1, 0x00));
        assert!(app.tabs[0].paint((2, 3), Brush::Terrain(5)));

        app.tabs[0].width_text = "abc".into();
        app.tabs[0].game_type_choice = GameType::Marching;
        app.apply_controls(0);

        let tab = &app.tabs[0];
        assert_eq!(tab.game_type_choice, GameType::Plucking);
        assert_eq!(tab.view.game_type, GameType::Plucking);
        assert!(tab.modified);
        assert_eq!(tab.grid.as_ref().unwrap().terrain_at(2, 3), Some(5));
    }

    #[test]
    fn test_game_type_switch_keeps_edits() {
        let (mut app, dir) = app_with_card(EditorConfig::default(), &level_bytes(0, 1, 0x00));
        assert!(app.tabs[0].paint((2, 3), Brush::Terrain(5)));

        app.tabs[0].game_type_choice = GameType::Marching;
        app.apply_controls(0);
        assert_eq!(app.tabs[0].view.game_type, GameType::Marching);
        assert!(app.tabs[0].grid.is_none());
        assert!(app.tabs[0].modified);
        assert!(
            app.tabs[0]
                .notice
                .as_ref()
                .unwrap()
                .contains("not supported")
        );

        app.tabs[0].game_type_choice = GameType::Plucking;
        app.apply_controls(0);
        let tab = &app.tabs[0];
        assert!(tab.modified);
        assert_eq!(tab.grid.as_ref().unwrap().terrain_at(2, 3), Some(5));
        assert_eq!(tab.grid.as_ref().unwrap().terrain_at(2, 4), Some(0));

        let out = dir.path().join("saved.bin");
        app.write_back().unwrap();
        app.card.as_ref().unwrap().save(&out).unwrap();
        assert_eq!(reopen(&out, 1).terrain_at(2, 3), Some(5));
    }

    #[test]
    fn test_camera_change_does_not_redecode() {
        let (mut app, _dir) = app_with_card(EditorConfig::default(), &level_bytes(0, 1, 0x00));
        assert!(app.tabs[0].paint((0, 0), Brush::Pikmin(3)));

        app.tabs[0].width_text = "4".into();
        app.apply_controls(0);
        let tab = &app.tabs[0];
        assert_eq!(tab.view.camera(), (4, 8));
        assert_eq!(tab.grid.as_ref().unwrap().overlay_at(0, 0), Some(3));
        // Edits stay out of the card until save or a game type switch
        let card = app.card.as_ref().unwrap();
        let occ = tab.occurrence.as_ref().unwrap();
        assert_eq!(
            card.decode_as(occ, GameType::Plucking).unwrap().overlay_at(0, 0),
            Some(0)
        );
    }

    #[test]
    fn test_write_back_only_touches_modified_levels() {
        let mut data = level_bytes(8, 1, 0x01);
        data.extend(level_bytes(4, 2, 0x02));
        let config = EditorConfig::builder().levels_per_card(2).build();
        let (mut app, dir) = app_with_card(config, &data);

        assert_eq!(app.write_back().unwrap(), 0);
        assert_eq!(app.card.as_ref().unwrap().data(), data.as_slice());

        assert!(app.tabs[0].paint((7, 10), Brush::Terrain(6)));
        assert_eq!(app.write_back().unwrap(), 1);

        let out = dir.path().join("out.bin");
        let card = app.card.as_ref().unwrap();
        card.save(&out).unwrap();
        assert_eq!(card.len(), data.len());
        assert_eq!(&card.data()[..8], &data[..8]);

        let grid = reopen(&out, 1);
        assert_eq!(grid.terrain_at(7, 10), Some(6));
        assert_eq!(grid.terrain_at(0, 0), Some(0x01));
    }

    #[test]
    fn test_write_back_without_card() {
        let mut app = EditorApp::new(EditorConfig::default());
        assert_eq!(app.write_back().unwrap(), 0);
    }
}
