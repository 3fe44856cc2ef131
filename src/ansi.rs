//! ANSI escape sequence generation for style sets.
//!
//! Everything in this module is formatting only. Nothing here inspects the
//! terminal: callers decide where the output goes and whether it should be
//! styled at all.

use crate::{Code, RenderOptions, StyleSet};
use std::fmt;
use std::io;

/// The escape character that starts every control sequence.
pub const ESC: char = '\x1B';

/// The sequence that clears every active style.
pub const RESET: &str = "\x1B[0m";

/// Returns a value that formats `codes` as a single SGR sequence.
///
/// The codes are joined with `;` between `ESC[` and `m`. An empty slice
/// formats as `ESC[m`.
pub fn sgr(codes: &[Code]) -> Sgr<'_> {
    Sgr { codes }
}

/// A single `ESC[...m` sequence, created by [`sgr`].
#[derive(Clone, Copy, Debug)]
pub struct Sgr<'a> {
    codes: &'a [Code],
}

impl fmt::Display for Sgr<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{ESC}[")?;
        for (i, code) in self.codes.iter().enumerate() {
            if i > 0 {
                f.write_str(";")?;
            }
            f.write_str(code)?;
        }
        f.write_str("m")
    }
}

/// Writes the escape prefix for the given style.
///
/// The caller must provide their own `io::Write` to write to. Callers should
/// prefer higher level types in this crate, such as `StyleWriter`.
pub fn ansi_style<W: io::Write>(mut wtr: W, style: &StyleSet) -> io::Result<()> {
    write!(wtr, "{}", sgr(style.codes()))
}

/// Writes the reset sequence, `ESC[0m`.
pub fn ansi_reset<W: io::Write>(mut wtr: W) -> io::Result<()> {
    wtr.write_all(RESET.as_bytes())
}

/// Values joined by a separator, without any escape codes.
pub(crate) struct Payload<'a, D> {
    pub(crate) values: &'a [D],
    pub(crate) separator: &'a str,
}

impl<D: fmt::Display> fmt::Display for Payload<'_, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, value) in self.values.iter().enumerate() {
            if i > 0 {
                f.write_str(self.separator)?;
            }
            write!(f, "{value}")?;
        }
        Ok(())
    }
}

/// Values wrapped in a style, formatted on demand.
///
/// This is created by [`StyleSet::painted`]. Its `Display` output is exactly
/// what [`StyleSet::apply`] returns.
#[derive(Clone, Debug)]
pub struct Painted<'a, D> {
    style: &'a StyleSet,
    values: &'a [D],
    options: RenderOptions,
}

impl<'a, D> Painted<'a, D> {
    pub(crate) fn new(
        style: &'a StyleSet,
        values: &'a [D],
        options: RenderOptions,
    ) -> Painted<'a, D> {
        Painted { style, values, options }
    }

    /// The style wrapped around the values.
    pub fn style(&self) -> &StyleSet {
        self.style
    }

    /// The options used for rendering.
    pub fn options(&self) -> &RenderOptions {
        &self.options
    }
}

impl<D: fmt::Display> fmt::Display for Painted<'_, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let payload =
            Payload { values: self.values, separator: self.options.separator() };
        write!(f, "{}{}", sgr(self.style.codes()), payload)?;
        if self.options.reset() {
            f.write_str(RESET)?;
        }
        Ok(())
    }
}
