//! Batch generation and password output.

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

use zeroize::Zeroize;

use super::{ConstraintSpec, Password, synthesize};
use crate::error::SynthesisError;
use crate::rand::Seed;

const BUF_CAPACITY: usize = 8 * 1024;

/// Buffered writer that wipes its buffer after every flush and on drop.
pub struct SecureBufWriter<W: Write> {
    inner: W,
    buf: Vec<u8>,
}

impl<W: Write> SecureBufWriter<W> {
    pub fn new(inner: W) -> Self {
        Self {
            inner,
            buf: Vec::with_capacity(BUF_CAPACITY),
        }
    }

    fn flush_buf(&mut self) -> io::Result<()> {
        let result = self.inner.write_all(&self.buf);
        self.buf.zeroize();
        result
    }
}

impl<W: Write> Write for SecureBufWriter<W> {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        if self.buf.len() + data.len() > BUF_CAPACITY {
            self.flush_buf()?;
        }
        if data.len() >= BUF_CAPACITY {
            return self.inner.write(data);
        }
        self.buf.extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.flush_buf()?;
        self.inner.flush()
    }
}

/// Drop flushes on a best-effort basis and loses any error from that last
/// write. Callers that need the result call `flush` first.
impl<W: Write> Drop for SecureBufWriter<W> {
    fn drop(&mut self) {
        let _ = self.flush();
        self.buf.zeroize();
    }
}

/// Synthesize `count` passwords, asking `next_seed` for a seed each time.
pub fn generate_batch<F, E>(
    spec: &ConstraintSpec,
    count: usize,
    mut next_seed: F,
) -> Result<Vec<Password>, E>
where
    F: FnMut() -> Result<Seed, E>,
    E: From<SynthesisError>,
{
    spec.validate()?;
    let mut passwords = Vec::with_capacity(count);
    for _ in 0..count {
        let seed = next_seed()?;
        passwords.push(synthesize(&seed, spec)?);
    }
    Ok(passwords)
}

/// Write one password per line.
pub fn write_lines<W: Write>(out: W, passwords: &[Password]) -> io::Result<()> {
    let mut out = SecureBufWriter::new(out);
    for password in passwords {
        out.write_all(password.as_bytes())?;
        out.write_all(b"\n")?;
    }
    out.flush()
}

/// Append passwords to `path`, creating the file and its parent directory.
pub fn append_to_file(path: &Path, passwords: &[Password]) -> io::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    write_lines(file, passwords)
}

/// Newline-joined passwords for the clipboard. Caller zeroizes the result.
pub fn joined(passwords: &[Password]) -> String {
    let mut text = String::new();
    for password in passwords {
        text.push_str(password.as_str());
        text.push('\n');
    }
    text
}
