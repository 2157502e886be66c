//! Error types for seed decoding and password synthesis.

use thiserror::Error;

use crate::pass::CharacterClass;

/// Reasons a seed cannot be used.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SeedError {
    /// The seed decoded to zero bytes.
    #[error("seed is empty")]
    Empty,
    /// The seed string is not valid hex.
    #[error("seed is not valid hex: {0}")]
    Hex(#[from] hex::FromHexError),
}

/// Errors produced by [`crate::synthesize`] and friends.
///
/// All variants are permanent validation failures; none is retried or
/// corrected internally.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SynthesisError {
    #[error("invalid seed: {0}")]
    InvalidSeed(#[from] SeedError),
    #[error("no character class selected")]
    NoClassSelected,
    #[error("sum of minimums ({required}) exceeds password length ({length})")]
    MinimumsExceedLength { required: usize, length: usize },
    #[error("{class} minimum is {minimum} but the class is disabled")]
    MinimumWithoutClass {
        class: CharacterClass,
        minimum: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_no_class_selected() {
        assert_eq!(
            SynthesisError::NoClassSelected.to_string(),
            "no character class selected"
        );
    }

    #[test]
    fn test_display_minimums_exceed_length() {
        let err = SynthesisError::MinimumsExceedLength {
            required: 10,
            length: 8,
        };
        assert_eq!(
            err.to_string(),
            "sum of minimums (10) exceeds password length (8)"
        );
    }

    #[test]
    fn test_display_minimum_without_class() {
        let err = SynthesisError::MinimumWithoutClass {
            class: CharacterClass::Upper,
            minimum: 1,
        };
        assert_eq!(
            err.to_string(),
            "uppercase minimum is 1 but the class is disabled"
        );
    }

    #[test]
    fn test_seed_error_converts_to_invalid_seed() {
        let err: SynthesisError = SeedError::Empty.into();
        assert_eq!(err, SynthesisError::InvalidSeed(SeedError::Empty));
        assert_eq!(err.to_string(), "invalid seed: seed is empty");
    }
}
