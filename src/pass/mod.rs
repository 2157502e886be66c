//! Password synthesis and output.

pub mod charset;
mod generate;
pub mod output;
mod password;
mod spec;

pub use charset::CharacterClass;
pub use generate::{synthesize, synthesize_from, synthesize_hex};
pub use output::SecureBufWriter;
pub use password::Password;
pub use spec::{ClassRule, ConstraintSpec};
