//! Local fallback entropy: fresh seeds from the operating system.

use zeroize::Zeroize;

use super::{SEED_LEN, Seed};

pub fn source_name() -> &'static str {
    "getrandom (OS)"
}

/// Draw a fresh [`SEED_LEN`]-byte seed from the OS entropy source.
pub fn fresh_seed() -> Result<Seed, getrandom::Error> {
    let mut buf = [0u8; SEED_LEN];
    getrandom::fill(&mut buf)?;
    let seed = Seed::from(buf);
    buf.zeroize();
    Ok(seed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_seed_has_canonical_length() {
        let seed = fresh_seed().unwrap();
        assert_eq!(seed.len(), SEED_LEN);
    }

    #[test]
    fn test_fresh_seeds_differ() {
        let a = fresh_seed().unwrap();
        let b = fresh_seed().unwrap();
        assert_ne!(a.as_bytes(), b.as_bytes());
    }
}
