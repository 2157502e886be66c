//! Character classes and their alphabets.

use std::fmt;

use super::ConstraintSpec;

// Ambiguous glyphs are left out: no `O`, no `l`, no `0`/`1`.
const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNPQRSTUVWXYZ";
const LOWERCASE: &[u8] = b"abcdefghijkmnopqrstuvwxyz";
const DIGITS: &[u8] = b"23456789";
const SYMBOLS: &[u8] = b"!@#$%^&*()-_=+?";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharacterClass {
    Upper,
    Lower,
    Digit,
    Symbol,
}

impl CharacterClass {
    /// Canonical order. Minimum draws and the fill pool both follow it.
    pub const ALL: [Self; 4] = [Self::Upper, Self::Lower, Self::Digit, Self::Symbol];

    pub const fn alphabet(self) -> &'static [u8] {
        match self {
            Self::Upper => UPPERCASE,
            Self::Lower => LOWERCASE,
            Self::Digit => DIGITS,
            Self::Symbol => SYMBOLS,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Upper => "uppercase",
            Self::Lower => "lowercase",
            Self::Digit => "digit",
            Self::Symbol => "symbol",
        }
    }

    pub fn contains(self, c: char) -> bool {
        c.is_ascii() && self.alphabet().contains(&(c as u8))
    }

    /// The class whose alphabet holds `c`, if any.
    pub fn of(c: char) -> Option<Self> {
        Self::ALL.into_iter().find(|class| class.contains(c))
    }
}

impl fmt::Display for CharacterClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Concatenation of every enabled class's alphabet, in canonical order.
pub fn pool(spec: &ConstraintSpec) -> Vec<u8> {
    let mut chars = Vec::with_capacity(size(spec));
    for class in spec.enabled_classes() {
        chars.extend_from_slice(class.alphabet());
    }
    chars
}

/// Size of the fill pool (for entropy estimates).
pub fn size(spec: &ConstraintSpec) -> usize {
    spec.enabled_classes().map(|class| class.alphabet().len()).sum()
}
