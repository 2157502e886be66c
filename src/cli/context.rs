//! CLI context - bundles settings, flags, and clipboard state.

use std::io::{self, Write};
use std::path::Path;

use copypasta::{ClipboardContext, ClipboardProvider};
use tracing::debug;
use zeroize::Zeroize;

use super::{
    CliError, CliFlags, ParseError, check_length, dump_path, output_bytes, parse_byte_count,
    prompts, quiet,
};
use crate::error::SynthesisError;
use crate::logging;
use crate::pass::{self, ClassRule, ConstraintSpec, Password, charset, output};
use crate::rand::{self, SEED_LEN, Seed};
use crate::settings::Settings;
use crate::terminal::{box_bottom, box_line, box_top, calculate_entropy, entropy_strength};

const DEFAULT_OUTPUT_FILE: &str = "seedpass.txt";

/// Application context for CLI mode.
pub struct Context {
    pub settings: Settings,
    pub clipboard: Option<ClipboardContext>,
    pub flags: CliFlags,
}

impl Context {
    /// Create a new context by parsing command-line arguments.
    pub fn new(args: &[String]) -> Result<Self, CliError> {
        let flags = super::parse(args)?;
        Ok(Self {
            settings: Settings::default(),
            clipboard: None,
            flags,
        })
    }

    pub fn run(&mut self) -> Result<(), CliError> {
        if self.handle_info_flags()? {
            return Ok(());
        }
        quiet::set(self.flags.quiet);
        logging::init(self.flags.quiet);
        self.load_settings();
        self.apply_flags()?;
        self.handle_save()?;
        if self.flags.bytes {
            return self.handle_bytes();
        }
        if !self.handle_clipboard() {
            return Ok(());
        }
        self.generate_output()
    }

    /// Returns true when the run is finished (help or version shown).
    fn handle_info_flags(&self) -> Result<bool, CliError> {
        if self.flags.help {
            super::print_help().map_err(|e| CliError::io("writing help", e))?;
            return Ok(true);
        }
        if self.flags.version {
            println!("seedpass {}", env!("CARGO_PKG_VERSION"));
            return Ok(true);
        }
        Ok(false)
    }

    fn load_settings(&mut self) {
        if !self.flags.saved {
            return;
        }
        match Settings::load_from_file() {
            Ok(settings) => self.settings = settings,
            Err(e) => prompts::settings_load_failed(&e.to_string()),
        }
    }

    /// Apply CLI flags to settings.
    fn apply_flags(&mut self) -> Result<(), CliError> {
        let spec = &mut self.settings.spec;
        if let Some(length) = self.flags.length {
            spec.length = length;
        }
        // --no-<class> also drops the default minimum; an explicit
        // --min-<class> on a disabled class is still reported
        for &class in &self.flags.disabled {
            *spec.rule_mut(class) = ClassRule::new(false, 0);
        }
        for &(class, minimum) in &self.flags.minimums {
            spec.rule_mut(class).minimum = minimum;
        }
        // saved settings may hold a length the command line would reject
        check_length(spec.length)?;

        if let Some(number) = self.flags.number {
            self.settings.number_of_passwords = number;
        }

        if let Some(ref path) = self.flags.output {
            self.settings.output_file_path = output_path(path);
        }

        self.settings.to_clipboard = self.flags.clipboard;
        self.settings.show_entropy = self.flags.entropy;
        Ok(())
    }

    fn handle_save(&self) -> Result<(), CliError> {
        if !self.flags.save {
            return Ok(());
        }
        // only a valid spec is persisted
        self.settings.spec.validate()?;
        self.settings
            .save_to_file()
            .map_err(|e| CliError::io("saving settings", e))?;
        prompts::settings_saved(&Settings::config_path().display().to_string());
        Ok(())
    }

    fn handle_bytes(&self) -> Result<(), CliError> {
        let seed = match self.read_seed()? {
            Some(seed) => seed,
            None => rand::os::fresh_seed()?,
        };
        let limit = match self.flags.number_raw.as_deref() {
            Some(raw) => Some(
                parse_byte_count(raw).ok_or_else(|| ParseError::InvalidNumber(raw.to_string()))?,
            ),
            None => None,
        };
        // only an explicit -o; the saved password file is never a dump target
        let path = self.flags.output.as_deref().map(dump_path).transpose()?;
        output_bytes(&seed, limit, path)
    }

    /// Returns false when the user declined the terminal fallback.
    fn handle_clipboard(&mut self) -> bool {
        if !self.settings.to_clipboard {
            return true;
        }
        match ClipboardContext::new() {
            Ok(ctx) => {
                self.clipboard = Some(ctx);
                true
            }
            Err(e) => {
                debug!(error = %e, "clipboard unavailable");
                self.settings.to_clipboard = false;
                prompts::clipboard_fallback_prompt()
            }
        }
    }

    /// Decode `--seed`, reading one line from stdin for `-`.
    fn read_seed(&self) -> Result<Option<Seed>, CliError> {
        let Some(raw) = self.flags.seed.as_deref() else {
            return Ok(None);
        };
        if raw != "-" {
            return Ok(Some(Seed::from_hex(raw).map_err(SynthesisError::from)?));
        }
        let mut line = String::new();
        io::stdin()
            .read_line(&mut line)
            .map_err(|e| CliError::io("reading seed from stdin", e))?;
        let seed = Seed::from_hex(&line).map_err(SynthesisError::from);
        line.zeroize();
        Ok(Some(seed?))
    }

    /// Generate passwords and handle output.
    pub fn generate_output(&mut self) -> Result<(), CliError> {
        let spec = self.settings.spec.clone();
        spec.validate()?;
        let count = self.settings.number_of_passwords.max(1);

        let (passwords, seed_len, source) = match self.read_seed()? {
            Some(seed) => {
                if count > 1 {
                    prompts::seed_count_ignored(count);
                }
                (vec![pass::synthesize(&seed, &spec)?], seed.len(), "--seed")
            }
            None => {
                let batch = output::generate_batch(&spec, count, || {
                    rand::os::fresh_seed().map_err(CliError::from)
                })?;
                (batch, SEED_LEN, rand::entropy_source())
            }
        };

        if self.settings.show_entropy && !quiet::enabled() {
            let stderr = io::stderr();
            write_entropy(&mut stderr.lock(), &spec, seed_len, source)
                .map_err(|e| CliError::io("writing entropy estimate", e))?;
        }

        self.emit(&passwords)
    }

    fn emit(&mut self, passwords: &[Password]) -> Result<(), CliError> {
        if self.settings.to_clipboard {
            if let Some(ctx) = self.clipboard.as_mut() {
                let mut text = output::joined(passwords);
                let result = ctx.set_contents(text.clone());
                text.zeroize();
                result.map_err(|e| CliError::Clipboard(e.to_string()))?;
                if let Ok(mut retrieved) = ctx.get_contents() {
                    retrieved.zeroize();
                }
                prompts::clipboard_copied();
            }
            return Ok(());
        }

        if !self.settings.output_file_path.is_empty() {
            let path = &self.settings.output_file_path;
            output::append_to_file(Path::new(path), passwords)
                .map_err(|e| CliError::io(format!("writing {path}"), e))?;
            let full_path = std::fs::canonicalize(path)
                .map(|p| p.display().to_string())
                .unwrap_or_else(|_| path.clone());
            prompts::passwords_written(passwords.len(), &full_path);
            return Ok(());
        }

        let stdout = io::stdout();
        output::write_lines(stdout.lock(), passwords).map_err(|e| CliError::io("writing stdout", e))
    }
}

/// Resolve `-o` into a file path: directories get the default file name and
/// a missing extension becomes `.txt`.
fn output_path(path: &str) -> String {
    if path == "." {
        DEFAULT_OUTPUT_FILE.to_string()
    } else if path.ends_with('/') {
        format!("{}{}", path, DEFAULT_OUTPUT_FILE)
    } else if Path::new(path).extension().is_none() {
        format!("{}.txt", path)
    } else {
        path.to_string()
    }
}

fn write_entropy<W: Write>(
    out: &mut W,
    spec: &ConstraintSpec,
    seed_len: usize,
    source: &str,
) -> io::Result<()> {
    let chars = charset::size(spec);
    let bits = calculate_entropy(spec.length, chars);
    let drawn = (2 * spec.length).saturating_sub(1);

    box_top(out, "Entropy")?;
    box_line(out, &format!("{:.1} bits ({})", bits, entropy_strength(bits)))?;
    box_line(
        out,
        &format!("Source: {} ({} bytes) \u{2022} Charset: {} chars", source, seed_len, chars),
    )?;
    if drawn > seed_len {
        box_line(
            out,
            &format!("Seed reused: {} draws from a {}-byte seed", drawn, seed_len),
        )?;
    }
    box_bottom(out)?;
    writeln!(out)
}
