use std::io::{Result, Write};

/// Where one output channel goes: a real process stream, or a capture
/// buffer for tests.
#[derive(Debug)]
pub enum Sink {
    Stdout,
    Stderr,
    Buffer(Vec<u8>),
}

impl Write for Sink {
    fn write(&mut self, bytes: &[u8]) -> Result<usize> {
        match self {
            Self::Stdout => std::io::stdout().write(bytes),
            Self::Stderr => std::io::stderr().write(bytes),
            Self::Buffer(buf) => {
                buf.extend_from_slice(bytes);
                Ok(bytes.len())
            }
        }
    }

    fn flush(&mut self) -> Result<()> {
        match self {
            Self::Stdout => std::io::stdout().flush(),
            Self::Stderr => std::io::stderr().flush(),
            Self::Buffer(_) => Ok(()),
        }
    }
}

impl Sink {
    /// Everything written so far, for `Buffer` sinks. Real streams record
    /// nothing.
    pub fn recorded(&self) -> &str {
        match self {
            Self::Buffer(buf) => std::str::from_utf8(buf).unwrap_or(""),
            _ => "",
        }
    }
}

/// The reporting channel. The core never touches this; drivers render
/// outcomes through it, and tests capture what would have been printed.
#[derive(Debug)]
pub struct Logger {
    pub stdout: Sink,
    pub stderr: Sink,
}

impl Logger {
    pub fn new_real() -> Self {
        Self {
            stdout: Sink::Stdout,
            stderr: Sink::Stderr,
        }
    }

    pub fn new_vec() -> Self {
        Self {
            stdout: Sink::Buffer(vec![]),
            stderr: Sink::Buffer(vec![]),
        }
    }

    pub fn recorded(&self) -> (&str, &str) {
        (self.stdout.recorded(), self.stderr.recorded())
    }
}
