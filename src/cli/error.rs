use std::io;

use thiserror::Error;

use super::ParseError;
use crate::error::SynthesisError;

/// Everything that can stop a command-line run.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Synthesis(#[from] SynthesisError),
    #[error("failed to gather local entropy: {0}")]
    Entropy(#[from] getrandom::Error),
    #[error("{context}: {source}")]
    Io {
        context: String,
        #[source]
        source: io::Error,
    },
    #[error("clipboard error: {0}")]
    Clipboard(String),
}

impl CliError {
    pub fn io(context: impl Into<String>, source: io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }

    /// 2 for usage errors, 1 for everything else.
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Parse(_) => 2,
            _ => 1,
        }
    }
}
