//! Command-line front end: the caller that feeds seeds to the synthesizer.

mod bytes;
mod context;
mod error;
mod flags;
mod help;
mod parse;
pub mod prompts;
pub mod quiet;

use std::process::ExitCode;

pub use bytes::output as output_bytes;
pub use bytes::{dump_path, parse_byte_count};
pub use context::Context;
pub use error::CliError;
pub use flags::CliFlags;
pub use help::print_help;
pub use parse::{ParseError, check_length, parse};

/// Run the command line and map the outcome to a process exit code.
pub fn run(args: Vec<String>) -> ExitCode {
    let result = Context::new(&args).and_then(|mut ctx| ctx.run());
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            prompts::error(&e.to_string());
            ExitCode::from(e.exit_code())
        }
    }
}
