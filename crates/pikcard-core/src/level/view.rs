//! Per-tab camera and game type settings.

use std::num::IntErrorKind;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::game_type::GameType;

pub const DEFAULT_WIDTH: u8 = 11;
pub const DEFAULT_HEIGHT: u8 = 8;
pub const MAX_WIDTH: u8 = 11;
pub const MAX_HEIGHT: u8 = 9;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewSettings {
    pub game_type: GameType,
    /// Camera width in cells (1..=11)
    pub width: u8,
    /// Camera height in cells (1..=9)
    pub height: u8,
}

impl Default for ViewSettings {
    fn default() -> Self {
        Self {
            game_type: GameType::default(),
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
        }
    }
}

impl ViewSettings {
    /// Apply raw control input for tab `tab`.
    ///
    /// Returns `false` and leaves the settings untouched when either
    /// coordinate fails to parse. Parsed values are clamped.
    pub fn apply_input(
        &mut self,
        tab: usize,
        game_type: GameType,
        width: &str,
        height: &str,
    ) -> bool {
        let (Some(width), Some(height)) = (parse_coordinate(width), parse_coordinate(height))
        else {
            debug!("[Tab {}] ignoring non-numeric camera input", tab);
            return false;
        };

        self.game_type = game_type;
        self.width = width.clamp(1, MAX_WIDTH as i64) as u8;
        self.height = height.clamp(1, MAX_HEIGHT as i64) as u8;

        info!(
            "[Tab {}] Game: {}, X={}, Y={}",
            tab, self.game_type, self.width, self.height
        );
        true
    }

    /// Camera size in cells
    pub fn camera(&self) -> (u8, u8) {
        (self.width, self.height)
    }
}

/// Parse a camera coordinate. Integers too large for `i64` saturate so they
/// still clamp to the edge of the grid.
fn parse_coordinate(text: &str) -> Option<i64> {
    match text.trim().parse::<i64>() {
        Ok(value) => Some(value),
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow => Some(i64::MAX),
            IntErrorKind::NegOverflow => Some(i64::MIN),
            _ => None,
        },
    }
}
