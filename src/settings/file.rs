//! Settings file persistence.
//!
//! One comma-separated line:
//! `length,upper_on,upper_min,lower_on,lower_min,digit_on,digit_min,symbol_on,symbol_min,count,output_path`.
//! The output path is last so it may contain commas.

use std::env;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use super::Settings;
use crate::pass::CharacterClass;

const FIELD_COUNT: usize = 11;

pub fn save(settings: &Settings) -> std::io::Result<()> {
    let path = get_path();
    if let Some(parent) = path.parent()
        && !parent.exists()
    {
        fs::create_dir_all(parent)?;
    }

    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(&path)?;

    file.write_all(encode(settings).as_bytes())?;
    debug!(path = %path.display(), "settings saved");
    Ok(())
}

pub fn load(settings: &mut Settings) -> std::io::Result<()> {
    let path = get_path();
    if !Path::new(&path).exists() {
        debug!(path = %path.display(), "no settings file, using defaults");
        return Ok(());
    }

    let line = fs::read_to_string(&path)?;
    if !decode(line.trim_end_matches(['\r', '\n']), settings) {
        warn!(path = %path.display(), "malformed settings file, rewriting defaults");
        *settings = Settings::default();
        save(settings)?;
    }

    Ok(())
}

pub fn get_path() -> PathBuf {
    if let Ok(path) = env::var("SEEDPASS_CONFIG")
        && !path.is_empty()
    {
        return PathBuf::from(path);
    }
    let home = env::var("HOME").unwrap_or_else(|_| ".".into());
    PathBuf::from(format!("{}/.config/seedpass/settings", home))
}

pub(super) fn encode(settings: &Settings) -> String {
    let mut fields = vec![settings.spec.length.to_string()];
    for class in CharacterClass::ALL {
        let rule = settings.spec.rule(class);
        fields.push(rule.enabled.to_string());
        fields.push(rule.minimum.to_string());
    }
    fields.push(settings.number_of_passwords.to_string());
    fields.push(settings.output_file_path.clone());
    format!("{}\n", fields.join(","))
}

/// Apply a settings line. Unparsable fields keep their current value.
/// Returns false when the line has the wrong shape.
pub(super) fn decode(line: &str, settings: &mut Settings) -> bool {
    let parts: Vec<&str> = line.splitn(FIELD_COUNT, ',').collect();
    if parts.len() != FIELD_COUNT {
        return false;
    }

    let spec = &mut settings.spec;
    spec.length = parts[0].parse().unwrap_or(spec.length);
    for (i, class) in CharacterClass::ALL.into_iter().enumerate() {
        let rule = spec.rule_mut(class);
        rule.enabled = parts[1 + 2 * i].parse().unwrap_or(rule.enabled);
        rule.minimum = parts[2 + 2 * i].parse().unwrap_or(rule.minimum);
    }
    settings.number_of_passwords = parts[9].parse().unwrap_or(settings.number_of_passwords);
    settings.output_file_path = parts[10].to_string();
    true
}
