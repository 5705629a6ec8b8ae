//! Signature scanning over raw card bytes.

use memchr::memmem;
use serde::Serialize;
use tracing::debug;

use super::signature::LevelSignature;
use crate::error::Result;

/// Upper bound on how many level slots a single card can carry
pub const MAX_LEVELS_PER_CARD: usize = 3;

/// One place in the card data where a level signature was found
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Occurrence {
    pub offset: usize,
    pub signature: String,
    pub slot: u8,
}

/// Find every offset of `needle` in `data`, overlapping matches included.
pub fn find_all(data: &[u8], needle: &[u8]) -> Vec<usize> {
    if needle.is_empty() {
        return Vec::new();
    }

    let finder = memmem::Finder::new(needle);
    let mut found = Vec::new();
    let mut start = 0;

    while start <= data.len() {
        match finder.find(&data[start..]) {
            Some(pos) => {
                found.push(start + pos);
                start += pos + 1;
            }
            None => break,
        }
    }

    found
}

/// Scan card data for all signatures.
///
/// Results are grouped by signature (in the order given) and sorted by
/// offset within each group.
pub fn scan_card(data: &[u8], signatures: &[LevelSignature]) -> Result<Vec<Occurrence>> {
    let mut occurrences = Vec::new();

    for sig in signatures {
        let needle = sig.pattern_bytes()?;
        let offsets = find_all(data, &needle);
        debug!("{}: {} match(es)", sig.name, offsets.len());

        occurrences.extend(offsets.into_iter().map(|offset| Occurrence {
            offset,
            signature: sig.name.clone(),
            slot: sig.slot,
        }));
    }

    Ok(occurrences)
}

/// Clamp a configured level count to what a card can hold.
pub fn clamp_levels_per_card(levels: usize) -> usize {
    levels.clamp(1, MAX_LEVELS_PER_CARD)
}
