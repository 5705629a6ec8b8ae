use serde::{Deserialize, Serialize};
use strum::{Display, EnumString, FromRepr, IntoStaticStr};
use tracing::warn;

use super::grid::LevelGrid;
use crate::error::{Error, Result};

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    EnumString,
    IntoStaticStr,
    Display,
    FromRepr,
)]
#[repr(u8)]
pub enum GameType {
    #[default]
    #[strum(serialize = "Plucking Pikmin")]
    Plucking = 0,
    #[strum(serialize = "Marching Pikmin")]
    Marching = 1,
    #[strum(serialize = "Connecting Pikmin")]
    Connecting = 2,
}

impl GameType {
    pub const ALL: [GameType; 3] = [Self::Plucking, Self::Marching, Self::Connecting];

    pub fn from_u8(value: u8) -> Option<Self> {
        Self::from_repr(value)
    }

    /// Game type introduced by a signature slot
    pub fn for_slot(slot: u8) -> Option<Self> {
        match slot {
            1 => Some(Self::Plucking),
            2 => Some(Self::Marching),
            3 => Some(Self::Connecting),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        self.into()
    }

    pub fn is_supported(&self) -> bool {
        matches!(self, Self::Plucking)
    }

    /// Decode a level block for this game type.
    ///
    /// Only Plucking Pikmin has a known layout; the other two are stubs.
    pub fn decode(&self, block: &[u8]) -> Result<LevelGrid> {
        match self {
            Self::Plucking => LevelGrid::decode(block),
            Self::Marching | Self::Connecting => {
                warn!("No decoder for {} yet", self);
                Err(Error::UnsupportedGameType(self.to_string()))
            }
        }
    }
}
