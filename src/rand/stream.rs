//! Seed stream: cyclic, position-tracked expansion of a seed.
//!
//! Output byte at logical position `p` is `seed[p mod len(seed)]`. The seed
//! is repeated, not hashed, so the stream is periodic with period
//! `len(seed)`. Draws past one period reuse seed bytes and add no entropy.

use super::Seed;

/// Cursor over a [`Seed`]. Create one per synthesis call and do not share it.
#[derive(Debug)]
pub struct SeedStream<'a> {
    seed: &'a [u8],
    position: usize,
}

impl<'a> SeedStream<'a> {
    pub fn new(seed: &'a Seed) -> Self {
        Self {
            seed: seed.as_bytes(),
            position: 0,
        }
    }

    /// Next byte of the stream; advances the position by exactly one.
    #[inline]
    pub fn next_byte(&mut self) -> u8 {
        let byte = self.seed[self.position % self.seed.len()];
        self.position += 1;
        byte
    }

    /// Next `n` bytes of the stream.
    pub fn draw(&mut self, n: usize) -> Vec<u8> {
        (0..n).map(|_| self.next_byte()).collect()
    }

    /// Fill `dest` from the stream.
    pub fn fill(&mut self, dest: &mut [u8]) {
        for byte in dest.iter_mut() {
            *byte = self.next_byte();
        }
    }

    /// Bytes emitted since construction.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Pick an element of `alphabet` as `byte mod len`.
    ///
    /// Slightly non-uniform when `len` does not divide 256. Kept as-is so a
    /// given seed always yields the same password.
    #[inline]
    pub fn pick(&mut self, alphabet: &[u8]) -> u8 {
        alphabet[usize::from(self.next_byte()) % alphabet.len()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counting_seed(len: u8) -> Seed {
        Seed::from_bytes((0..len).collect::<Vec<u8>>()).unwrap()
    }

    #[test]
    fn test_stream_starts_at_zero() {
        let seed = counting_seed(4);
        let stream = seed.stream();
        assert_eq!(stream.position(), 0);
    }

    #[test]
    fn test_stream_wraps_around_seed() {
        let seed = counting_seed(3);
        let mut stream = seed.stream();
        assert_eq!(stream.draw(8), vec![0, 1, 2, 0, 1, 2, 0, 1]);
        assert_eq!(stream.position(), 8);
    }

    #[test]
    fn test_draw_continues_from_previous_position() {
        let seed = counting_seed(5);
        let mut stream = seed.stream();
        assert_eq!(stream.draw(2), vec![0, 1]);
        assert_eq!(stream.next_byte(), 2);
        assert_eq!(stream.draw(3), vec![3, 4, 0]);
        assert_eq!(stream.position(), 6);
    }

    #[test]
    fn test_single_byte_seed_repeats() {
        let seed = Seed::from_bytes([0x7f]).unwrap();
        let mut stream = seed.stream();
        assert_eq!(stream.draw(4), vec![0x7f; 4]);
    }

    #[test]
    fn test_fill_matches_draw() {
        let seed = counting_seed(7);
        let mut buf = [0u8; 10];
        seed.stream().fill(&mut buf);
        assert_eq!(buf.to_vec(), seed.stream().draw(10));
    }

    #[test]
    fn test_pick_uses_byte_mod_length() {
        let seed = Seed::from_bytes([0, 5, 255]).unwrap();
        let mut stream = seed.stream();
        let alphabet = b"abcd";
        assert_eq!(stream.pick(alphabet), b'a');
        assert_eq!(stream.pick(alphabet), b'b');
        assert_eq!(stream.pick(alphabet), b'd');
        assert_eq!(stream.position(), 3);
    }

    #[test]
    fn test_zero_draw_consumes_nothing() {
        let seed = counting_seed(2);
        let mut stream = seed.stream();
        assert!(stream.draw(0).is_empty());
        assert_eq!(stream.position(), 0);
    }
}
