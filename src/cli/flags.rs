use crate::pass::CharacterClass;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CliFlags {
    pub help: bool,
    pub version: bool,
    pub quiet: bool,
    pub bytes: bool,
    pub clipboard: bool,
    pub saved: bool,
    pub save: bool,
    pub entropy: bool,
    pub length: Option<usize>,
    pub number: Option<usize>,
    pub number_raw: Option<String>,
    pub seed: Option<String>,
    pub output: Option<String>,
    pub disabled: Vec<CharacterClass>,
    pub minimums: Vec<(CharacterClass, usize)>,
}
