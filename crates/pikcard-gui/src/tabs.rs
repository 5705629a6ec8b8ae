//! Per-level tab state and its control panel.

use eframe::egui;
use pikcard_core::{GameType, LevelGrid, Occurrence, ViewSettings};

use crate::palette::Brush;

pub const TAB_NAMES: [&str; 3] = ["Level 1", "Level 2", "Level 3"];

/// Tab that shows a signature slot (slot 1 -> first tab)
pub fn tab_index_for_slot(slot: u8) -> Option<usize> {
    let index = (slot as usize).checked_sub(1)?;
    (index < TAB_NAMES.len()).then_some(index)
}

pub struct LevelTab {
    pub index: usize,
    pub view: ViewSettings,
    pub game_type_choice: GameType,
    pub width_text: String,
    pub height_text: String,

    pub occurrence: Option<Occurrence>,
    pub grid: Option<LevelGrid>,
    /// Shown instead of the canvas when there is nothing to draw
    pub notice: Option<String>,
    pub modified: bool,

    pub texture: Option<egui::TextureHandle>,
    pub needs_redraw: bool,
}

impl LevelTab {
    pub fn new(index: usize) -> Self {
        let view = ViewSettings::default();
        Self {
            index,
            view,
            game_type_choice: view.game_type,
            width_text: view.width.to_string(),
            height_text: view.height.to_string(),
            occurrence: None,
            grid: None,
            notice: None,
            modified: false,
            texture: None,
            needs_redraw: true,
        }
    }

    pub fn name(&self) -> &'static str {
        TAB_NAMES[self.index]
    }

    /// Push the current control values through the view settings.
    ///
    /// When the camera text does not parse nothing is applied and the combo
    /// box falls back to the game type still in effect.
    pub fn apply_controls(&mut self) -> bool {
        let applied = self.view.apply_input(
            self.index,
            self.game_type_choice,
            &self.width_text,
            &self.height_text,
        );
        if applied {
            self.needs_redraw = true;
        } else {
            self.game_type_choice = self.view.game_type;
        }
        applied
    }

    /// Select `game_type` regardless of the camera text.
    pub fn set_game_type(&mut self, game_type: GameType) {
        self.game_type_choice = game_type;
        self.view.game_type = game_type;
        self.needs_redraw = true;
    }

    /// Step a spin control by `delta`, staying inside `1..=max`.
    pub fn step(text: &mut String, delta: i64, max: u8) {
        let current = text.trim().parse::<i64>().unwrap_or(1);
        *text = (current + delta).clamp(1, max as i64).to_string();
    }

    pub fn set_level(
        &mut self,
        occurrence: Occurrence,
        grid: Option<LevelGrid>,
        notice: Option<String>,
    ) {
        self.occurrence = Some(occurrence);
        self.grid = grid;
        self.notice = notice;
        self.modified = false;
        self.needs_redraw = true;
    }

    pub fn clear_level(&mut self) {
        self.occurrence = None;
        self.grid = None;
        self.notice = None;
        self.modified = false;
        self.texture = None;
        self.needs_redraw = true;
    }

    /// Paint one cell with `brush`. Returns true if the cell changed.
    pub fn paint(&mut self, (row, col): (usize, usize), brush: Brush) -> bool {
        let Some(grid) = self.grid.as_mut() else {
            return false;
        };

        let (before, result) = match brush {
            Brush::Terrain(value) => (
                grid.terrain_at(row, col),
                grid.set_terrain(row, col, value),
            ),
            Brush::Pikmin(value) => (
                grid.overlay_at(row, col),
                grid.set_overlay(row, col, value),
            ),
        };

        let changed = result.is_ok() && before != Some(brush.value());
        if changed {
            self.modified = true;
            self.needs_redraw = true;
        }
        changed
    }
}

/// Left-hand control panel. Returns true when any control was touched; the
/// caller applies them.
pub fn show_controls(tab: &mut LevelTab, ui: &mut egui::Ui) -> bool {
    let mut game_type_changed = false;
    let mut camera_changed = false;

    ui.add_space(10.0);
    ui.label("Game Type:");
    let before = tab.game_type_choice;
    egui::ComboBox::from_id_source(("game_type", tab.index))
        .selected_text(tab.game_type_choice.label())
        .width(140.0)
        .show_ui(ui, |ui| {
            for game_type in GameType::ALL {
                ui.selectable_value(&mut tab.game_type_choice, game_type, game_type.label());
            }
        });
    if tab.game_type_choice != before {
        game_type_changed = true;
    }

    ui.add_space(8.0);
    ui.label("Camera Coordinates");
    ui.horizontal(|ui| {
        ui.label("X");
        camera_changed |= spin(ui, &mut tab.width_text, pikcard_core::level::MAX_WIDTH);
    });
    ui.horizontal(|ui| {
        ui.label("Y");
        camera_changed |= spin(ui, &mut tab.height_text, pikcard_core::level::MAX_HEIGHT);
    });

    ui.add_space(12.0);
    ui.separator();
    match &tab.occurrence {
        Some(occ) => {
            ui.label(format!("{} at 0x{:X}", occ.signature, occ.offset));
            if tab.modified {
                ui.colored_label(egui::Color32::from_rgb(0xF4, 0x90, 0x3C), "modified");
            }
        }
        None => {
            ui.weak("No level loaded");
        }
    }

    game_type_changed || camera_changed
}

/// Text box with -/+ buttons, like a spinbox.
fn spin(ui: &mut egui::Ui, text: &mut String, max: u8) -> bool {
    let mut changed = false;
    if ui.small_button("-").clicked() {
        LevelTab::step(text, -1, max);
        changed = true;
    }
    changed |= ui
        .add(egui::TextEdit::singleline(text).desired_width(28.0))
        .changed();
    if ui.small_button("+").clicked() {
        LevelTab::step(text, 1, max);
        changed = true;
    }
    changed
}
