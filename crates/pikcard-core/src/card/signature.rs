use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Marker text shared by every level signature, followed by a two-digit slot.
pub const SIGNATURE_PREFIX: &[u8] = b"PIKMINPUZZLE";

/// Length of a complete signature (prefix + two ASCII digits)
pub const SIGNATURE_LEN: usize = 14;

/// A fixed byte marker that precedes one level block in card data
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelSignature {
    pub name: String,
    /// Level slot (1-based) this signature introduces
    pub slot: u8,
    pub pattern: String,
}

impl LevelSignature {
    pub fn new(name: impl Into<String>, slot: u8, pattern: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            slot,
            pattern: pattern.into(),
        }
    }

    pub fn pattern_bytes(&self) -> Result<Vec<u8>> {
        parse_pattern(&self.pattern)
    }
}

/// The three signatures known to appear in card data, in search order.
pub fn builtin_signatures() -> Vec<LevelSignature> {
    (1..=3u8)
        .map(|slot| {
            let mut bytes = SIGNATURE_PREFIX.to_vec();
            bytes.extend_from_slice(format!("{:02}", slot).as_bytes());
            LevelSignature::new(format!("SEQ{}", slot), slot, format_pattern(&bytes))
        })
        .collect()
}

pub fn parse_pattern(pattern: &str) -> Result<Vec<u8>> {
    let mut bytes = Vec::new();
    for token in pattern.split_whitespace() {
        let value = u8::from_str_radix(token, 16).map_err(|e| {
            Error::InvalidPattern(format!("Invalid signature token '{}': {}", token, e))
        })?;
        bytes.push(value);
    }

    if bytes.is_empty() {
        return Err(Error::InvalidPattern(
            "Signature pattern is empty".to_string(),
        ));
    }

    Ok(bytes)
}

pub fn format_pattern(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| format!("{:02X}", b))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_signatures_match_known_bytes() {
        let sigs = builtin_signatures();
        assert_eq!(sigs.len(), 3);
        assert_eq!(sigs[0].name, "SEQ1");
        assert_eq!(sigs[0].slot, 1);
        assert_eq!(
            sigs[0].pattern,
            "50 49 4B 4D 49 4E 50 55 5A 5A 4C 45 30 31"
        );
        assert_eq!(
            sigs[2].pattern,
            "50 49 4B 4D 49 4E 50 55 5A 5A 4C 45 30 33"
        );
        for sig in &sigs {
            assert_eq!(sig.pattern_bytes().unwrap().len(), SIGNATURE_LEN);
        }
    }

    #[test]
    fn test_parse_pattern() {
        let bytes = parse_pattern("50 49 4b").unwrap();
        assert_eq!(bytes, vec![0x50, 0x49, 0x4B]);
    }

    #[test]
    fn test_parse_pattern_rejects_bad_input() {
        assert!(parse_pattern("").is_err());
        assert!(parse_pattern("   ").is_err());
        assert!(parse_pattern("50 ZZ").is_err());
        assert!(parse_pattern("50 ??").is_err());
    }

    #[test]
    fn test_format_pattern_roundtrip() {
        let formatted = format_pattern(b"PIK");
        assert_eq!(formatted, "50 49 4B");
        assert_eq!(parse_pattern(&formatted).unwrap(), b"PIK".to_vec());
    }
}
