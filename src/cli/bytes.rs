//! Raw dump of the expanded seed stream.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use zeroize::Zeroize;

use super::{CliError, ParseError, prompts};
use crate::rand::Seed;

/// Parse byte count with optional K, M, G suffix
pub fn parse_byte_count(s: &str) -> Option<usize> {
    let s = s.trim().to_uppercase();
    let (num_str, multiplier) = if let Some(n) = s.strip_suffix('K') {
        (n, 1024)
    } else if let Some(n) = s.strip_suffix('M') {
        (n, 1024 * 1024)
    } else if let Some(n) = s.strip_suffix('G') {
        (n, 1024 * 1024 * 1024)
    } else {
        (s.as_str(), 1)
    };
    num_str.parse::<usize>().ok()?.checked_mul(multiplier)
}

/// The dump truncates its target, so `-o` must name a file. Directories are
/// rejected rather than mapped onto the password file.
pub fn dump_path(path: &str) -> Result<&str, ParseError> {
    if path == "." || path.ends_with('/') || Path::new(path).is_dir() {
        return Err(ParseError::BytesOutputNotFile(path.to_string()));
    }
    Ok(path)
}

fn write_bytes<W: Write>(out: &mut W, seed: &Seed, limit: usize) -> std::io::Result<()> {
    let mut stream = seed.stream();
    let mut buf = [0u8; 65536];
    let mut written: usize = 0;

    while written < limit {
        let to_write = (limit - written).min(buf.len());
        stream.fill(&mut buf[..to_write]);
        out.write_all(&buf[..to_write])?;
        written += to_write;
    }

    buf.zeroize();
    out.flush()
}

/// Write `limit` stream bytes (default: one seed period) to a file or stdout.
pub fn output(seed: &Seed, limit: Option<usize>, file_path: Option<&str>) -> Result<(), CliError> {
    let limit = limit.unwrap_or(seed.len());
    if let Some(path) = file_path {
        let mut file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(path)
            .map_err(|e| CliError::io(format!("opening {path}"), e))?;
        write_bytes(&mut file, seed, limit)
            .map_err(|e| CliError::io(format!("writing {path}"), e))?;
        prompts::bytes_written(limit, path);
        Ok(())
    } else {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        write_bytes(&mut out, seed, limit).map_err(|e| CliError::io("writing stdout", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_byte_count_suffixes() {
        assert_eq!(parse_byte_count("10"), Some(10));
        assert_eq!(parse_byte_count("2k"), Some(2048));
        assert_eq!(parse_byte_count(" 1M "), Some(1024 * 1024));
        assert_eq!(parse_byte_count("1G"), Some(1024 * 1024 * 1024));
        assert_eq!(parse_byte_count("K"), None);
        assert_eq!(parse_byte_count("ten"), None);
    }

    #[test]
    fn test_dump_path_rejects_directories() {
        let dir = std::env::temp_dir();
        let dir = dir.to_str().unwrap();
        for path in [".", "out/", dir] {
            assert_eq!(
                dump_path(path),
                Err(ParseError::BytesOutputNotFile(path.to_string()))
            );
        }
        assert_eq!(dump_path("stream.bin"), Ok("stream.bin"));
    }

    #[test]
    fn test_write_bytes_repeats_seed() {
        let seed = Seed::from_bytes([1, 2, 3]).unwrap();
        let mut out = Vec::new();
        write_bytes(&mut out, &seed, 7).unwrap();
        assert_eq!(out, vec![1, 2, 3, 1, 2, 3, 1]);
    }

    #[test]
    fn test_write_bytes_spans_chunks() {
        let seed = Seed::from_bytes([0xaa, 0xbb]).unwrap();
        let mut out = Vec::new();
        write_bytes(&mut out, &seed, 65536 + 3).unwrap();
        assert_eq!(out.len(), 65539);
        // chunk boundary keeps the stream phase
        assert_eq!(&out[65535..], &[0xbb, 0xaa, 0xbb, 0xaa]);
    }
}
