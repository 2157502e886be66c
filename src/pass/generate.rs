//! Password synthesis.

use tracing::{debug, trace};
use zeroize::Zeroize;

use super::{CharacterClass, ConstraintSpec, Password, charset};
use crate::error::SynthesisError;
use crate::rand::{Seed, SeedStream};

/// Synthesize a password from a hex-encoded seed.
///
/// The spec is validated before the seed is decoded, so spec errors win over
/// a bad seed.
pub fn synthesize_hex(seed_hex: &str, spec: &ConstraintSpec) -> Result<Password, SynthesisError> {
    spec.validate()?;
    let seed = Seed::from_hex(seed_hex)?;
    synthesize(&seed, spec)
}

/// Synthesize a password from `seed`. Pure: same inputs, same output.
pub fn synthesize(seed: &Seed, spec: &ConstraintSpec) -> Result<Password, SynthesisError> {
    let mut stream = seed.stream();
    synthesize_from(&mut stream, spec)
}

/// Synthesize using a caller-owned stream.
///
/// On success the stream has advanced by exactly `2L - 1` bytes (0 when
/// `L == 0`). On a validation error nothing is drawn.
pub fn synthesize_from(
    stream: &mut SeedStream<'_>,
    spec: &ConstraintSpec,
) -> Result<Password, SynthesisError> {
    spec.validate()?;

    let start = stream.position();
    let mut buf = Vec::with_capacity(spec.length);

    for class in CharacterClass::ALL {
        draw_into(stream, class.alphabet(), spec.rule(class).minimum, &mut buf);
    }

    let pool = charset::pool(spec);
    let remaining = spec.length - spec.required();
    debug!(
        length = spec.length,
        required = spec.required(),
        remaining,
        pool = pool.len(),
        "synthesizing password"
    );
    draw_into(stream, &pool, remaining, &mut buf);

    shuffle(stream, &mut buf);

    let password = Password::from_ascii(&buf);
    buf.zeroize();
    trace!(consumed = stream.position() - start, "seed stream drawn");
    Ok(password)
}

fn draw_into(stream: &mut SeedStream<'_>, alphabet: &[u8], count: usize, buf: &mut Vec<u8>) {
    buf.extend((0..count).map(|_| stream.pick(alphabet)));
}

/// Fisher-Yates, `i` from `len - 1` down to 1, `j = byte mod (i + 1)`.
/// Draws `len - 1` bytes (none for `len <= 1`).
#[inline]
fn shuffle(stream: &mut SeedStream<'_>, chars: &mut [u8]) {
    for i in (1..chars.len()).rev() {
        let j = usize::from(stream.next_byte()) % (i + 1);
        chars.swap(i, j);
    }
}
