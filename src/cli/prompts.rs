//! Centralized warning and prompt messages for CLI output.

use std::io::Write;

use crossterm::style::{Stylize, style};

use super::quiet;
use crate::terminal::format_number;

/// Print a warning message to stderr (yellow) - suppressed in quiet mode
pub fn warn(msg: &str) {
    if !quiet::enabled() {
        eprintln!("{}", style(msg).yellow());
    }
}

/// Print an error message to stderr (red) - NOT suppressed (errors are always shown)
pub fn error(msg: &str) {
    eprintln!("{}", style(msg).red());
}

pub fn seed_count_ignored(count: usize) {
    warn(&format!(
        "Warning: a fixed --seed always yields the same password; ignoring -n {count}"
    ));
}

pub fn settings_load_failed(err: &str) {
    warn(&format!("Failed to load settings: {err}"));
}

pub fn settings_saved(path: &str) {
    if !quiet::enabled() {
        eprintln!("Settings saved \u{2192} {path}");
    }
}

/// Print clipboard copied confirmation - suppressed in quiet mode
pub fn clipboard_copied() {
    if !quiet::enabled() {
        println!("*** -COPIED TO CLIPBOARD- ***");
    }
}

/// Prompt user when clipboard is unavailable. Returns true to fallback to terminal, false to abort.
/// In quiet/non-interactive mode, silently falls back to terminal.
pub fn clipboard_fallback_prompt() -> bool {
    if quiet::skip_prompt() {
        return true;
    }

    eprint!("Clipboard unavailable. Print to terminal instead? [Y/n]: ");
    let _ = std::io::stderr().flush();

    let mut input = String::new();
    if std::io::stdin().read_line(&mut input).is_ok() {
        let input = input.trim().to_lowercase();
        if input.is_empty() || input == "y" || input == "yes" {
            eprintln!();
            return true;
        }
    } else {
        return true;
    }

    eprintln!("\nAborted.");
    false
}

/// Print password output summary - suppressed in quiet mode
pub fn passwords_written(count: usize, path: &str) {
    if !quiet::enabled() {
        eprintln!("{count} password(s) \u{2192} {path}");
    }
}

pub fn bytes_written(count: usize, path: &str) {
    if !quiet::enabled() {
        eprintln!("{} bytes \u{2192} {path}", format_number(count));
    }
}
