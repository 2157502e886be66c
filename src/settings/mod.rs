//! Generation settings and their persisted defaults.

mod file;

use crate::pass::{CharacterClass, ClassRule, ConstraintSpec};

/// Shortest password the command line accepts.
pub const MIN_LENGTH: usize = 8;
/// Longest password the command line accepts.
pub const MAX_LENGTH: usize = 32;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub spec: ConstraintSpec,
    pub number_of_passwords: usize,
    pub output_file_path: String,
    pub to_clipboard: bool,
    pub show_entropy: bool,
}

impl Settings {
    pub fn load_from_file() -> Result<Self, std::io::Error> {
        let mut settings = Settings::default();
        file::load(&mut settings)?;
        Ok(settings)
    }

    pub fn save_to_file(&self) -> Result<(), std::io::Error> {
        file::save(self)
    }

    pub fn config_path() -> std::path::PathBuf {
        file::get_path()
    }
}

impl Default for Settings {
    fn default() -> Self {
        let mut spec = ConstraintSpec::new(16);
        for class in CharacterClass::ALL {
            *spec.rule_mut(class) = ClassRule::new(true, 1);
        }
        Self {
            spec,
            number_of_passwords: 1,
            output_file_path: String::new(),
            to_clipboard: false,
            show_entropy: false,
        }
    }
}
