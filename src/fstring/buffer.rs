//! Checked writes to an underlying sink

use std::io::{self, Write};

use thiserror::Error;

/// A failed write, with the chain of operations it went through (innermost first)
#[derive(Debug, Error)]
#[error("{}{source}", frame_prefix(.frames))]
pub struct WriteError {
    frames: Vec<&'static str>,
    #[source]
    source: io::Error,
}

impl WriteError {
    pub fn new(frame: &'static str, source: io::Error) -> Self {
        WriteError {
            frames: vec![frame],
            source,
        }
    }

    fn short_write(frame: &'static str) -> Self {
        Self::new(frame, io::Error::new(io::ErrorKind::WriteZero, "short write"))
    }

    /// Record an outer operation the error passed through.
    pub fn add_frame(mut self, frame: &'static str) -> Self {
        self.frames.push(frame);
        self
    }

    pub fn frames(&self) -> &[&'static str] {
        &self.frames
    }

    pub fn kind(&self) -> io::ErrorKind {
        self.source.kind()
    }
}

/// Outermost frame first, each followed by ": "
fn frame_prefix(frames: &[&'static str]) -> String {
    frames.iter().rev().map(|frame| format!("{frame}: ")).collect()
}

/// Sink wrapper whose writes either write everything or fail
#[derive(Debug)]
pub struct Buffer<W> {
    w: W,
}

impl<W: Write> Buffer<W> {
    pub fn new(w: W) -> Self {
        Buffer { w }
    }

    pub fn get_ref(&self) -> &W {
        &self.w
    }

    pub fn get_mut(&mut self) -> &mut W {
        &mut self.w
    }

    pub fn into_inner(self) -> W {
        self.w
    }

    pub fn write(&mut self, data: &[u8]) -> Result<(), WriteError> {
        self.write_checked(data, "Buffer::write")
    }

    /// Write `line` followed by a newline.
    pub fn write_line(&mut self, line: &str) -> Result<(), WriteError> {
        let mut data = Vec::with_capacity(line.len() + 1);
        data.extend_from_slice(line.as_bytes());
        data.push(b'\n');

        self.write_checked(&data, "Buffer::write_line")
    }

    pub fn write_empty_line(&mut self) -> Result<(), WriteError> {
        self.write_checked(b"\n", "Buffer::write_empty_line")
    }

    /// One write call on the sink; fewer bytes than requested is an error.
    fn write_checked(&mut self, data: &[u8], frame: &'static str) -> Result<(), WriteError> {
        let n = self
            .w
            .write(data)
            .map_err(|err| WriteError::new(frame, err))?;

        if n != data.len() {
            return Err(WriteError::short_write(frame));
        }

        Ok(())
    }
}
