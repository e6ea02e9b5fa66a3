// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::io::{self, Stderr, Stdout, Write};

/// A writer that flushes after every write.
#[derive(Debug)]
pub struct Unbuffered<W: Write> {
    inner: W,
}

impl<W: Write> Unbuffered<W> {
    pub fn new(inner: W) -> Self {
        Self { inner }
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: Write> Write for Unbuffered<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let written = self.inner.write(buf)?;
        self.inner.flush()?;
        Ok(written)
    }

    fn write_all(&mut self, buf: &[u8]) -> io::Result<()> {
        self.inner.write_all(buf)?;
        self.inner.flush()
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}

pub fn unbuffered_stdout() -> Unbuffered<Stdout> {
    Unbuffered::new(io::stdout())
}

pub fn unbuffered_stderr() -> Unbuffered<Stderr> {
    Unbuffered::new(io::stderr())
}
