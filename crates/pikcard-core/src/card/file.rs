//! In-memory card file: scan, decode, patch and save.

use std::fs;
use std::path::Path;

use tracing::{debug, info, warn};

use super::scan::{Occurrence, clamp_levels_per_card, scan_card};
use super::signature::LevelSignature;
use crate::error::{Error, Result};
use crate::level::layout::{BLOCK_LEN, BLOCK_SKIP};
use crate::level::{GameType, LevelGrid};

/// Outcome of decoding one signature occurrence
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LevelLoad {
    Decoded(LevelGrid),
    /// The game type for this slot has no decoder yet
    Unsupported,
    /// The block could not be read (e.g. truncated at end of file)
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedLevel {
    pub occurrence: Occurrence,
    pub game_type: GameType,
    pub load: LevelLoad,
}

impl LoadedLevel {
    pub fn grid(&self) -> Option<&LevelGrid> {
        match &self.load {
            LevelLoad::Decoded(grid) => Some(grid),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct CardFile {
    data: Vec<u8>,
}

impl CardFile {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let data = fs::read(path)?;
        info!("Read {} bytes from {}", data.len(), path.display());
        Ok(Self { data })
    }

    pub fn from_bytes(data: impl Into<Vec<u8>>) -> Self {
        Self { data: data.into() }
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn occurrences(&self, signatures: &[LevelSignature]) -> Result<Vec<Occurrence>> {
        scan_card(&self.data, signatures)
    }

    /// First occurrence introducing level `slot`
    pub fn occurrence_for_slot(
        &self,
        signatures: &[LevelSignature],
        slot: u8,
    ) -> Result<Occurrence> {
        self.occurrences(signatures)?
            .into_iter()
            .find(|o| o.slot == slot)
            .ok_or(Error::LevelNotFound(slot))
    }

    /// The 176-byte level block that follows an occurrence
    pub fn level_block(&self, occurrence: &Occurrence) -> Result<&[u8]> {
        let start = occurrence.offset + BLOCK_SKIP;
        let available = self.data.len().saturating_sub(start);
        if available < BLOCK_LEN {
            return Err(Error::TruncatedBlock {
                offset: occurrence.offset,
                needed: BLOCK_LEN,
                available,
            });
        }
        Ok(&self.data[start..start + BLOCK_LEN])
    }

    pub fn decode_as(&self, occurrence: &Occurrence, game_type: GameType) -> Result<LevelGrid> {
        let block = self.level_block(occurrence)?;
        game_type.decode(block)
    }

    /// Decode the first `levels_per_card` occurrences.
    ///
    /// A level that fails or has no decoder does not stop the others.
    pub fn load_levels(
        &self,
        signatures: &[LevelSignature],
        levels_per_card: usize,
    ) -> Result<Vec<LoadedLevel>> {
        let occurrences = self.occurrences(signatures)?;
        if occurrences.is_empty() {
            return Err(Error::SignatureNotFound);
        }

        let limit = clamp_levels_per_card(levels_per_card);
        let levels = occurrences
            .into_iter()
            .take(limit)
            .map(|occurrence| {
                let game_type = GameType::for_slot(occurrence.slot).unwrap_or_default();
                debug!(
                    "{} at {:#x} -> {}",
                    occurrence.signature, occurrence.offset, game_type
                );

                let load = match self.decode_as(&occurrence, game_type) {
                    Ok(grid) => LevelLoad::Decoded(grid),
                    Err(Error::UnsupportedGameType(_)) => LevelLoad::Unsupported,
                    Err(e) => {
                        warn!("{}: {}", occurrence.signature, e);
                        LevelLoad::Failed(e.to_string())
                    }
                };

                LoadedLevel {
                    occurrence,
                    game_type,
                    load,
                }
            })
            .collect();

        Ok(levels)
    }

    /// Encode `grid` back into the block that follows `occurrence`.
    pub fn write_level(&mut self, occurrence: &Occurrence, grid: &LevelGrid) -> Result<()> {
        self.level_block(occurrence)?;
        let start = occurrence.offset + BLOCK_SKIP;
        self.data[start..start + BLOCK_LEN].copy_from_slice(&grid.encode());
        debug!(
            "Wrote level block for {} at {:#x}",
            occurrence.signature, start
        );
        Ok(())
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        fs::write(path, &self.data)?;
        info!("Saved {} bytes to {}", self.data.len(), path.display());
        Ok(())
    }
}
