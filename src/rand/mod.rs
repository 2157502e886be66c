//! Seed handling and seed stream expansion.

pub mod os;
mod seed;
mod stream;

pub use seed::{SEED_LEN, Seed};
pub use stream::SeedStream;

pub fn entropy_source() -> &'static str {
    os::source_name()
}
