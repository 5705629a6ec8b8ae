//! Palette footer: terrain and pikmin swatches that select the paint brush.

use std::collections::HashMap;

use eframe::egui;
use pikcard_core::TileCache;
use pikcard_core::tiles::{PIKMIN_PALETTE, TERRAIN_PALETTE, pikmin_palette_file, terrain_file};
use tracing::warn;

use crate::app::to_color_image;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Brush {
    Terrain(u8),
    Pikmin(u8),
}

impl Brush {
    pub fn value(&self) -> u8 {
        match self {
            Self::Terrain(v) | Self::Pikmin(v) => *v,
        }
    }

    pub fn file_name(&self) -> String {
        match self {
            Self::Terrain(v) => terrain_file(*v),
            Self::Pikmin(v) => pikmin_palette_file(*v),
        }
    }
}

/// Swatch textures keyed by file name
#[derive(Default)]
pub struct SwatchTextures {
    textures: HashMap<String, Option<egui::TextureHandle>>,
}

impl SwatchTextures {
    /// Forget every swatch so the next frame reloads them from the tile folder.
    pub fn clear(&mut self) {
        self.textures.clear();
    }

    fn get(
        &mut self,
        ctx: &egui::Context,
        tiles: &mut TileCache,
        file: &str,
        size: u32,
    ) -> Option<egui::TextureId> {
        self.textures
            .entry(file.to_string())
            .or_insert_with(|| match tiles.get(file, size) {
                Ok(Some(image)) => Some(ctx.load_texture(
                    file,
                    to_color_image(image),
                    egui::TextureOptions::LINEAR,
                )),
                Ok(None) => None,
                Err(e) => {
                    warn!("Failed to load swatch {}: {}", file, e);
                    None
                }
            })
            .as_ref()
            .map(|t| t.id())
    }
}

/// Draw both palette rows; clicking a swatch selects (or deselects) it.
pub fn show(
    ui: &mut egui::Ui,
    swatches: &mut SwatchTextures,
    tiles: &mut TileCache,
    size: u32,
    brush: &mut Option<Brush>,
) {
    let rows: [Vec<Brush>; 2] = [
        TERRAIN_PALETTE.map(Brush::Terrain).collect(),
        PIKMIN_PALETTE.map(Brush::Pikmin).collect(),
    ];

    for row in rows {
        ui.horizontal(|ui| {
            ui.spacing_mut().item_spacing = egui::vec2(2.0, 2.0);
            for swatch in row {
                let selected = *brush == Some(swatch);
                let texture = swatches.get(ui.ctx(), tiles, &swatch.file_name(), size);
                if swatch_button(ui, texture, swatch, size as f32, selected).clicked() {
                    *brush = if selected { None } else { Some(swatch) };
                }
            }
        });
    }
}

fn swatch_button(
    ui: &mut egui::Ui,
    texture: Option<egui::TextureId>,
    swatch: Brush,
    size: f32,
    selected: bool,
) -> egui::Response {
    let (rect, response) = ui.allocate_exact_size(egui::vec2(size, size), egui::Sense::click());
    let painter = ui.painter();

    match texture {
        Some(id) => {
            let uv = egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0));
            painter.image(id, rect, uv, egui::Color32::WHITE);
        }
        None => {
            painter.rect_filled(rect, 2.0, egui::Color32::from_gray(0xCC));
            painter.text(
                rect.center(),
                egui::Align2::CENTER_CENTER,
                format!("{:02X}", swatch.value()),
                egui::FontId::monospace(10.0),
                egui::Color32::BLACK,
            );
        }
    }

    if selected {
        let stroke = egui::Stroke::new(2.0, egui::Color32::from_rgb(0xF4, 0x90, 0x3C));
        painter.rect_stroke(rect, 2.0, stroke);
    }

    response.on_hover_text(swatch.file_name())
}
