//! Deterministic password synthesis.
//!
//! A seed (any non-empty byte sequence, canonically 32 bytes) is expanded
//! into a cyclic byte stream. Each random decision consumes one stream byte:
//! per-class minimum characters first, then the fill from the pool of
//! enabled classes, then a Fisher-Yates shuffle. One call draws exactly
//! `2L - 1` bytes for a password of length `L`.
//!
//! ```
//! use seedpass::{CharacterClass, ConstraintSpec, synthesize_hex};
//!
//! let spec = ConstraintSpec::new(12)
//!     .with_class(CharacterClass::Digit, true, 2)
//!     .with_class(CharacterClass::Symbol, false, 0);
//! let password = synthesize_hex("8f1e0c9a77b2d4e5", &spec).unwrap();
//! assert_eq!(password.len(), 12);
//! ```

pub mod cli;
pub mod error;
pub mod logging;
pub mod pass;
pub mod rand;
pub mod settings;
pub mod terminal;

pub use error::{SeedError, SynthesisError};
pub use pass::{
    CharacterClass, ClassRule, ConstraintSpec, Password, synthesize, synthesize_from,
    synthesize_hex,
};
pub use rand::{SEED_LEN, Seed, SeedStream};
