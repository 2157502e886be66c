//! Seed: the fixed byte sequence behind every random decision.

use std::fmt;
use std::str::FromStr;

use zeroize::{Zeroize, ZeroizeOnDrop};

use super::SeedStream;
use crate::error::SeedError;

/// Canonical seed size in bytes (256 bits).
pub const SEED_LEN: usize = 32;

/// Immutable, non-empty byte sequence. Wiped from memory on drop.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct Seed {
    bytes: Vec<u8>,
}

impl Seed {
    /// Wrap raw bytes. Any byte value is valid; only emptiness is rejected.
    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Result<Self, SeedError> {
        let bytes = bytes.into();
        if bytes.is_empty() {
            return Err(SeedError::Empty);
        }
        Ok(Self { bytes })
    }

    /// Decode a hex string (surrounding whitespace is ignored).
    pub fn from_hex(hex_str: &str) -> Result<Self, SeedError> {
        let mut bytes = hex::decode(hex_str.trim())?;
        let seed = Self::from_bytes(bytes.as_slice());
        bytes.zeroize();
        seed
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Length in bytes; also the period of the expanded stream.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Always false: an empty seed cannot be constructed.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Fresh cursor over this seed, positioned at 0.
    pub fn stream(&self) -> SeedStream<'_> {
        SeedStream::new(self)
    }
}

impl From<[u8; SEED_LEN]> for Seed {
    fn from(bytes: [u8; SEED_LEN]) -> Self {
        Self {
            bytes: bytes.to_vec(),
        }
    }
}

impl FromStr for Seed {
    type Err = SeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl fmt::Debug for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Seed")
            .field("len", &self.bytes.len())
            .field("bytes", &"[redacted]")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex_decodes_bytes() {
        let seed = Seed::from_hex("deadBEEF").unwrap();
        assert_eq!(seed.as_bytes(), &[0xde, 0xad, 0xbe, 0xef]);
        assert_eq!(seed.len(), 4);
    }

    #[test]
    fn test_from_hex_trims_whitespace() {
        let seed = Seed::from_hex("  0001ff\n").unwrap();
        assert_eq!(seed.as_bytes(), &[0x00, 0x01, 0xff]);
    }

    #[test]
    fn test_empty_hex_is_rejected() {
        assert_eq!(Seed::from_hex(""), Err(SeedError::Empty));
        assert_eq!(Seed::from_hex("   "), Err(SeedError::Empty));
    }

    #[test]
    fn test_odd_length_hex_is_rejected() {
        assert!(matches!(Seed::from_hex("abc"), Err(SeedError::Hex(_))));
    }

    #[test]
    fn test_non_hex_is_rejected() {
        assert!(matches!(Seed::from_hex("zz"), Err(SeedError::Hex(_))));
    }

    #[test]
    fn test_empty_bytes_are_rejected() {
        assert_eq!(Seed::from_bytes(Vec::new()), Err(SeedError::Empty));
    }

    #[test]
    fn test_parse_via_from_str() {
        let seed: Seed = "00ff".parse().unwrap();
        assert_eq!(seed.as_bytes(), &[0x00, 0xff]);
    }

    #[test]
    fn test_debug_does_not_leak_bytes() {
        let seed = Seed::from([0xab; SEED_LEN]);
        let shown = format!("{:?}", seed);
        assert!(shown.contains("[redacted]"));
        assert!(!shown.contains("171"));
        assert!(!shown.to_lowercase().contains("ab, "));
    }
}
