use crate::ansi::Payload;
use crate::{Code, RenderOptions, StyleSet};
use std::io;

/// Types that hold an ordered list of SGR codes.
///
/// This is the capability that makes a value usable on the right hand side
/// of `StyleSet + _` and with [`StyleSet::combine`]. Implementing it is an
/// explicit opt in; nothing is combinable just because it looks like a
/// style.
pub trait StyleCodes {
    /// The codes, in rendering order.
    fn codes(&self) -> &[Code];
}

impl StyleCodes for StyleSet {
    fn codes(&self) -> &[Code] {
        StyleSet::codes(self)
    }
}

impl<T: ?Sized + StyleCodes> StyleCodes for &T {
    fn codes(&self) -> &[Code] {
        (**self).codes()
    }
}

impl<T: ?Sized + StyleCodes> StyleCodes for Box<T> {
    fn codes(&self) -> &[Code] {
        (**self).codes()
    }
}

/// This trait describes writers that can emit styled output.
pub trait WriteStyle: io::Write {
    /// Write the escape prefix for `style`.
    ///
    /// Subsequent writes to this writer will use that style until either
    /// `reset` is called or another style is set. Styles are not cleared
    /// first, so setting `BOLD` and then `RED` leaves both active.
    fn set_style(&mut self, style: &StyleSet) -> io::Result<()>;

    /// Clear every active style by writing `ESC[0m`.
    fn reset(&mut self) -> io::Result<()>;

    /// Write `values` wrapped in `style`.
    ///
    /// The bytes written are the same as those returned by
    /// [`StyleSet::apply`] for the same arguments.
    fn write_styled<D: std::fmt::Display>(
        &mut self,
        style: &StyleSet,
        values: &[D],
        options: &RenderOptions,
    ) -> io::Result<()>
    where
        Self: Sized,
    {
        self.set_style(style)?;
        write!(self, "{}", Payload { values, separator: options.separator() })?;
        if options.reset() {
            self.reset()?;
        }
        Ok(())
    }
}

impl<T: ?Sized + WriteStyle> WriteStyle for &mut T {
    fn set_style(&mut self, style: &StyleSet) -> io::Result<()> {
        (**self).set_style(style)
    }
    fn reset(&mut self) -> io::Result<()> {
        (**self).reset()
    }
}

impl<T: ?Sized + WriteStyle> WriteStyle for Box<T> {
    fn set_style(&mut self, style: &StyleSet) -> io::Result<()> {
        (**self).set_style(style)
    }
    fn reset(&mut self) -> io::Result<()> {
        (**self).reset()
    }
}
