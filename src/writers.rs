use std::io::{self, Write};

use crate::ansi;
use crate::{StyleSet, WriteStyle};

/// Satisfies `WriteStyle` using standard ANSI escape sequences.
///
/// Every style is emitted as given. Deciding whether the destination
/// understands ANSI is left to the caller.
#[derive(Clone, Debug)]
pub struct StyleWriter<W>(pub W);

impl<W: Write> StyleWriter<W> {
    /// Create a new writer that satisfies `WriteStyle` using standard ANSI
    /// escape sequences.
    pub fn new(wtr: W) -> StyleWriter<W> {
        StyleWriter(wtr)
    }

    /// Consume this `StyleWriter` value and return the inner writer.
    pub fn into_inner(self) -> W {
        self.0
    }

    /// Return a reference to the inner writer.
    pub fn get_ref(&self) -> &W {
        &self.0
    }

    /// Return a mutable reference to the inner writer.
    pub fn get_mut(&mut self) -> &mut W {
        &mut self.0
    }
}

impl<W: io::Write> io::Write for StyleWriter<W> {
    #[inline]
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.write(buf)
    }

    #[inline]
    fn write_all(&mut self, buf: &[u8]) -> io::Result<()> {
        self.0.write_all(buf)
    }

    #[inline]
    fn flush(&mut self) -> io::Result<()> {
        self.0.flush()
    }
}

impl<W: io::Write> WriteStyle for StyleWriter<W> {
    #[inline]
    fn set_style(&mut self, style: &StyleSet) -> io::Result<()> {
        ansi::ansi_style(&mut self.0, style)
    }

    #[inline]
    fn reset(&mut self) -> io::Result<()> {
        ansi::ansi_reset(&mut self.0)
    }
}

impl WriteStyle for Vec<u8> {
    fn set_style(&mut self, style: &StyleSet) -> io::Result<()> {
        ansi::ansi_style(self, style)
    }

    fn reset(&mut self) -> io::Result<()> {
        ansi::ansi_reset(self)
    }
}
