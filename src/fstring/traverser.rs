use std::io::{self, Write};

use crate::fstring::buffer::{Buffer, WriteError};

/// Indentation written once per nesting level
pub const INDENT: &str = "   ";

/// Types that print themselves as indented lines
pub trait FStringer {
    fn fstring<W: Write>(&self, trav: &mut Traverser<W>) -> Result<(), WriteError>;
}

/// Line writer with a fixed indentation level
#[derive(Debug)]
pub struct Traverser<W> {
    buffer: Buffer<W>,
    indent_level: usize,
}

impl<W: Write> Traverser<W> {
    pub fn new(w: W) -> Self {
        Traverser {
            buffer: Buffer::new(w),
            indent_level: 0,
        }
    }

    pub fn indent_level(&self) -> usize {
        self.indent_level
    }

    pub fn into_inner(self) -> W {
        self.buffer.into_inner()
    }

    /// Write one line. Empty lines are written without indentation.
    pub fn write_line(&mut self, line: &str) -> Result<(), WriteError> {
        let result = if line.is_empty() {
            self.buffer.write_empty_line()
        } else {
            let indented = format!("{}{line}", INDENT.repeat(self.indent_level));
            self.buffer.write_line(&indented)
        };

        result.map_err(|err| err.add_frame("Traverser::write_line"))
    }

    /// A traverser over the same sink, `n` levels deeper (or shallower, never below zero).
    ///
    /// The sink is type-erased so that nested traversers all share one type.
    pub fn indent_by(&mut self, n: isize) -> Traverser<&mut dyn Write> {
        let sink: &mut dyn Write = self.buffer.get_mut();

        Traverser {
            indent_level: self.indent_level.saturating_add_signed(n),
            buffer: Buffer::new(sink),
        }
    }
}

impl<W: Write> Write for Traverser<W> {
    /// Writes `buf` verbatim. Always writes all of it or fails.
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if buf.is_empty() {
            return Ok(0);
        }

        self.buffer
            .write(buf)
            .map_err(|err| io::Error::new(err.kind(), err.add_frame("Traverser::write")))?;

        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.buffer.get_mut().flush()
    }
}
