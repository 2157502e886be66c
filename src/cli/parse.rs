use thiserror::Error;

use super::CliFlags;
use crate::pass::CharacterClass;
use crate::settings::{MAX_LENGTH, MIN_LENGTH};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("invalid number: {0}")]
    InvalidNumber(String),
    #[error("missing value for {0}")]
    MissingValue(String),
    #[error("unknown argument: {0}")]
    UnknownArg(String),
    #[error("length {0} is outside {min}..={max}", min = MIN_LENGTH, max = MAX_LENGTH)]
    LengthOutOfRange(usize),
    #[error("--bytes needs a file path for -o, got {0}")]
    BytesOutputNotFile(String),
}

pub fn parse(args: &[String]) -> Result<CliFlags, ParseError> {
    let mut flags = CliFlags::default();
    let mut i = 1;

    while i < args.len() {
        let arg = args[i].as_str();
        match arg {
            "-h" | "--help" => flags.help = true,
            "-v" | "--version" => flags.version = true,
            "-q" | "--quiet" => flags.quiet = true,
            "--bytes" => flags.bytes = true,
            "-b" | "--board" => flags.clipboard = true,
            "-s" | "--saved" => flags.saved = true,
            "--save" => flags.save = true,
            "-e" | "--entropy" => flags.entropy = true,
            "--no-upper" => flags.disabled.push(CharacterClass::Upper),
            "--no-lower" => flags.disabled.push(CharacterClass::Lower),
            "--no-digit" => flags.disabled.push(CharacterClass::Digit),
            "--no-symbol" => flags.disabled.push(CharacterClass::Symbol),
            "-l" | "--length" => {
                let length = parse_number(value(args, &mut i)?)?;
                check_length(length)?;
                flags.length = Some(length);
            }
            "-n" | "--number" => {
                let raw = value(args, &mut i)?;
                flags.number_raw = Some(raw.to_string());
                // K/M/G suffixes are only valid with --bytes, which may come later
                flags.number = raw.parse().ok();
            }
            "--seed" => flags.seed = Some(value(args, &mut i)?.to_string()),
            "--min-upper" | "--min-lower" | "--min-digit" | "--min-symbol" => {
                let class = match arg {
                    "--min-upper" => CharacterClass::Upper,
                    "--min-lower" => CharacterClass::Lower,
                    "--min-digit" => CharacterClass::Digit,
                    _ => CharacterClass::Symbol,
                };
                let minimum = parse_number(value(args, &mut i)?)?;
                flags.minimums.push((class, minimum));
            }
            "-o" | "--output" => {
                if i + 1 < args.len() && !args[i + 1].starts_with('-') {
                    i += 1;
                    flags.output = Some(args[i].clone());
                } else {
                    flags.output = Some(".".to_string());
                }
            }
            _ => return Err(ParseError::UnknownArg(arg.to_string())),
        }
        i += 1;
    }

    if !flags.bytes
        && flags.number.is_none()
        && let Some(raw) = &flags.number_raw
    {
        return Err(ParseError::InvalidNumber(raw.clone()));
    }

    Ok(flags)
}

pub fn check_length(length: usize) -> Result<(), ParseError> {
    if (MIN_LENGTH..=MAX_LENGTH).contains(&length) {
        Ok(())
    } else {
        Err(ParseError::LengthOutOfRange(length))
    }
}

/// Value following the flag at `args[*i]`; advances `i` past it.
fn value<'a>(args: &'a [String], i: &mut usize) -> Result<&'a str, ParseError> {
    let flag = &args[*i];
    *i += 1;
    args.get(*i)
        .map(String::as_str)
        .ok_or_else(|| ParseError::MissingValue(flag.clone()))
}

fn parse_number(s: &str) -> Result<usize, ParseError> {
    s.parse()
        .map_err(|_| ParseError::InvalidNumber(s.to_string()))
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        std::iter::once("seedpass")
            .chain(list.iter().copied())
            .map(String::from)
            .collect()
    }

    #[test]
    fn test_no_args_is_default() {
        assert_eq!(parse(&args(&[])).unwrap(), CliFlags::default());
    }

    #[test]
    fn test_parses_spec_flags() {
        let flags = parse(&args(&[
            "-l",
            "20",
            "--no-symbol",
            "--min-upper",
            "2",
            "--min-digit",
            "3",
        ]))
        .unwrap();
        assert_eq!(flags.length, Some(20));
        assert_eq!(flags.disabled, vec![CharacterClass::Symbol]);
        assert_eq!(
            flags.minimums,
            vec![(CharacterClass::Upper, 2), (CharacterClass::Digit, 3)]
        );
    }

    #[test]
    fn test_parses_seed_and_output() {
        let flags = parse(&args(&["--seed", "00ff", "-o", "pw.txt", "-b", "-q"])).unwrap();
        assert_eq!(flags.seed.as_deref(), Some("00ff"));
        assert_eq!(flags.output.as_deref(), Some("pw.txt"));
        assert!(flags.clipboard);
        assert!(flags.quiet);
    }

    #[test]
    fn test_output_without_path_defaults_to_current_dir() {
        let flags = parse(&args(&["-o", "-q"])).unwrap();
        assert_eq!(flags.output.as_deref(), Some("."));
        assert!(flags.quiet);
    }

    #[test]
    fn test_number_keeps_raw_suffix() {
        let flags = parse(&args(&["--bytes", "-n", "4K"])).unwrap();
        assert_eq!(flags.number, None);
        assert_eq!(flags.number_raw.as_deref(), Some("4K"));
    }

    #[rstest]
    #[case(&["--frobnicate"], ParseError::UnknownArg("--frobnicate".into()))]
    #[case(&["-l"], ParseError::MissingValue("-l".into()))]
    #[case(&["--seed"], ParseError::MissingValue("--seed".into()))]
    #[case(&["-l", "ten"], ParseError::InvalidNumber("ten".into()))]
    #[case(&["--min-lower", "-1"], ParseError::InvalidNumber("-1".into()))]
    #[case(&["-l", "7"], ParseError::LengthOutOfRange(7))]
    #[case(&["-l", "33"], ParseError::LengthOutOfRange(33))]
    #[case(&["-n", "ten"], ParseError::InvalidNumber("ten".into()))]
    #[case(&["-n", "4K"], ParseError::InvalidNumber("4K".into()))]
    fn test_rejects_bad_input(#[case] list: &[&str], #[case] expected: ParseError) {
        assert_eq!(parse(&args(list)), Err(expected));
    }

    #[test]
    fn test_length_bounds_are_inclusive() {
        assert_eq!(check_length(MIN_LENGTH), Ok(()));
        assert_eq!(check_length(MAX_LENGTH), Ok(()));
    }
}
