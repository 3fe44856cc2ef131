use std::borrow::Cow;
use std::fmt;
use std::iter::Sum;
use std::num::IntErrorKind;
use std::ops::Add;
use std::str::FromStr;

use crate::ansi::{self, Painted};
use crate::colors;
use crate::traits::StyleCodes;

/// A single SGR parameter, such as `"31"` or `"38;5;196"`.
///
/// Codes are stored without the `ESC[` introducer or the trailing `m`.
pub type Code = Cow<'static, str>;

/// An immutable, ordered set of SGR parameter codes.
///
/// A `StyleSet` is built from a named constant (see [`crate::colors`]), one
/// of the checked factories, or [`StyleSet::new`]. Sets are combined with
/// [`StyleSet::combine`] or the `+` operator, which both produce a new set
/// holding the left operand's codes followed by the right operand's codes.
///
/// Rendering never modifies the set:
///
/// ```
/// use termstyle::{BOLD, RED, UNDERLINE};
///
/// let important = BOLD + UNDERLINE;
/// assert_eq!(important.paint("Important"), "\x1b[1;4mImportant\x1b[0m");
/// assert_eq!(RED.paint("Error"), "\x1b[31mError\x1b[0m");
/// ```
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct StyleSet {
    codes: Cow<'static, [Code]>,
}

impl Default for StyleSet {
    fn default() -> StyleSet {
        StyleSet::empty()
    }
}

impl StyleSet {
    /// Create a style set from the given codes, kept in the given order.
    ///
    /// Codes are not checked for ANSI legality.
    pub fn new<I, S>(codes: I) -> StyleSet
    where
        I: IntoIterator<Item = S>,
        S: Into<Code>,
    {
        StyleSet { codes: Cow::Owned(codes.into_iter().map(Into::into).collect()) }
    }

    /// Create a style set that borrows a static code table.
    pub const fn from_static(codes: &'static [Code]) -> StyleSet {
        StyleSet { codes: Cow::Borrowed(codes) }
    }

    /// Create a style set with no codes.
    pub const fn empty() -> StyleSet {
        const NONE: &[Code] = &[];
        StyleSet::from_static(NONE)
    }

    /// A foreground color from the 256-color palette.
    pub fn fg256(index: u8) -> StyleSet {
        StyleSet::new([format!("38;5;{index}")])
    }

    /// A background color from the 256-color palette.
    pub fn bg256(index: u8) -> StyleSet {
        StyleSet::new([format!("48;5;{index}")])
    }

    /// A 24-bit foreground color.
    pub fn fg_rgb(r: u8, g: u8, b: u8) -> StyleSet {
        StyleSet::new([format!("38;2;{r};{g};{b}")])
    }

    /// A 24-bit background color.
    pub fn bg_rgb(r: u8, g: u8, b: u8) -> StyleSet {
        StyleSet::new([format!("48;2;{r};{g};{b}")])
    }

    /// The codes of this set, in rendering order.
    pub fn codes(&self) -> &[Code] {
        &self.codes
    }

    /// The number of codes in this set.
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    /// Returns true if this set has no codes.
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Combine this set with another, returning a new set.
    ///
    /// The result holds `self`'s codes followed by `other`'s codes. Neither
    /// operand is modified. The `+` operator is sugar for this method.
    pub fn combine<T: StyleCodes + ?Sized>(&self, other: &T) -> StyleSet {
        let rhs = other.codes();
        let mut codes = Vec::with_capacity(self.codes.len() + rhs.len());
        codes.extend_from_slice(&self.codes);
        codes.extend_from_slice(rhs);
        StyleSet { codes: Cow::Owned(codes) }
    }

    /// Render `values` wrapped in this style.
    ///
    /// Each value is formatted with `Display` and the results are joined by
    /// the separator in `options`. The output starts with this set's escape
    /// prefix and, when `options.reset()` is true, ends with `ESC[0m`.
    pub fn apply<D: fmt::Display>(
        &self,
        values: &[D],
        options: &RenderOptions,
    ) -> String {
        self.painted(values, options).to_string()
    }

    /// Render a single value with the default options: no separator and a
    /// trailing reset.
    pub fn paint<D: fmt::Display>(&self, text: D) -> String {
        self.apply(&[text], &RenderOptions::default())
    }

    /// Like [`StyleSet::apply`], but formats lazily through `Display`.
    pub fn painted<'a, D: fmt::Display>(
        &'a self,
        values: &'a [D],
        options: &RenderOptions,
    ) -> Painted<'a, D> {
        Painted::new(self, values, options.clone())
    }
}

/// Formats as the escape prefix alone, e.g. `"\x1b[31m"` for red.
impl fmt::Display for StyleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", ansi::sgr(&self.codes))
    }
}

/// Combination is only defined for operands that expose ordered codes.
///
/// ```compile_fail
/// let _ = termstyle::RED + 5;
/// ```
impl<T: StyleCodes> Add<T> for StyleSet {
    type Output = StyleSet;

    fn add(self, rhs: T) -> StyleSet {
        self.combine(&rhs)
    }
}

impl<T: StyleCodes> Add<T> for &StyleSet {
    type Output = StyleSet;

    fn add(self, rhs: T) -> StyleSet {
        self.combine(&rhs)
    }
}

impl Sum for StyleSet {
    fn sum<I: Iterator<Item = StyleSet>>(iter: I) -> StyleSet {
        iter.fold(StyleSet::empty(), |acc, style| acc.combine(&style))
    }
}

impl<'a> Sum<&'a StyleSet> for StyleSet {
    fn sum<I: Iterator<Item = &'a StyleSet>>(iter: I) -> StyleSet {
        iter.fold(StyleSet::empty(), |acc, style| acc.combine(style))
    }
}

impl<S: Into<Code>> FromIterator<S> for StyleSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> StyleSet {
        StyleSet::new(iter)
    }
}

/// Per-call rendering options for [`StyleSet::apply`].
///
/// The default joins values with no separator and appends a reset.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RenderOptions {
    separator: Cow<'static, str>,
    reset: bool,
}

impl Default for RenderOptions {
    fn default() -> RenderOptions {
        RenderOptions::new()
    }
}

impl RenderOptions {
    /// Create options with an empty separator and reset enabled.
    pub const fn new() -> RenderOptions {
        RenderOptions { separator: Cow::Borrowed(""), reset: true }
    }

    /// Get the separator placed between rendered values.
    pub fn separator(&self) -> &str {
        &self.separator
    }

    /// Set the separator placed between rendered values.
    pub fn set_separator(
        &mut self,
        separator: impl Into<Cow<'static, str>>,
    ) -> &mut RenderOptions {
        self.separator = separator.into();
        self
    }

    /// Get whether `ESC[0m` is appended after the payload.
    pub fn reset(&self) -> bool {
        self.reset
    }

    /// Set whether `ESC[0m` is appended after the payload.
    ///
    /// Disabling this leaves the style active for whatever the caller writes
    /// next.
    pub fn set_reset(&mut self, yes: bool) -> &mut RenderOptions {
        self.reset = yes;
        self
    }
}

/// The color channel that failed validation.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Channel {
    Red,
    Green,
    Blue,
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match *self {
            Channel::Red => "red",
            Channel::Green => "green",
            Channel::Blue => "blue",
        };
        f.write_str(name)
    }
}

/// An error from building a color with an out of range component.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum StyleError {
    /// A 256-color palette index outside `0..=255`.
    #[error("Color index must be in range 0..255")]
    PaletteIndex { index: i128 },
    /// An RGB channel outside `0..=255`. Only the first offending channel
    /// is reported.
    #[error("RGB values must be in range 0..255")]
    RgbChannel { channel: Channel, value: i128 },
}

/// An error from parsing a style string.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum ParseStyleError {
    /// The token is not the name of a known style.
    #[error("unrecognized style name '{0}'")]
    UnknownName(String),
    /// A `fg:`/`bg:` value that isn't a decimal or hex number.
    #[error(
        "unrecognized color number, should be '[0-255]' (or a hex number), \
         but is '{0}'"
    )]
    InvalidNumber(String),
    /// A `fg:`/`bg:` value that isn't a number or a triple of numbers.
    #[error(
        "unrecognized RGB color triple, should be '[0-255],[0-255],[0-255]' \
         (or a hex triple), but is '{0}'"
    )]
    InvalidRgb(String),
    /// A well formed number that the color factories rejected.
    #[error("invalid color '{given}'")]
    OutOfRange {
        given: String,
        #[source]
        source: StyleError,
    },
}

impl ParseStyleError {
    /// Return the part of the input that couldn't be parsed.
    pub fn invalid(&self) -> &str {
        match self {
            ParseStyleError::UnknownName(given)
            | ParseStyleError::InvalidNumber(given)
            | ParseStyleError::InvalidRgb(given)
            | ParseStyleError::OutOfRange { given, .. } => given,
        }
    }
}

/// Parses a human readable style string.
///
/// Tokens are separated by `+` or whitespace and matched case
/// insensitively. A token is one of:
///
/// 1. A style name from [`crate::colors::NAMED`], e.g. `bold` or
///    `bright_bg_yellow`.
/// 2. `fg:` or `bg:` followed by a palette index, in decimal or hexadecimal.
/// 3. `fg:` or `bg:` followed by three comma separated channel values.
///
/// Hexadecimal numbers are written with a `0x` prefix. An empty string
/// parses to the empty set.
///
/// ```
/// use termstyle::StyleSet;
///
/// let style: StyleSet = "bold + fg:202 + bg:0x1e,30,30".parse().unwrap();
/// assert_eq!(style.to_string(), "\x1b[1;38;5;202;48;2;30;30;30m");
/// ```
impl FromStr for StyleSet {
    type Err = ParseStyleError;

    fn from_str(s: &str) -> Result<StyleSet, ParseStyleError> {
        s.split(|c: char| c == '+' || c.is_whitespace())
            .filter(|token| !token.is_empty())
            .map(parse_token)
            .collect::<Result<Vec<StyleSet>, _>>()
            .map(|parts| parts.into_iter().sum())
            .inspect_err(|err| {
                tracing::debug!(input = s, error = %err, "rejected style string")
            })
    }
}

fn parse_token(token: &str) -> Result<StyleSet, ParseStyleError> {
    match token.split_at_checked(3) {
        Some((prefix, value)) if prefix.eq_ignore_ascii_case("fg:") => {
            parse_color(value, true)
        }
        Some((prefix, value)) if prefix.eq_ignore_ascii_case("bg:") => {
            parse_color(value, false)
        }
        _ => colors::lookup(&token.to_lowercase())
            .ok_or_else(|| ParseStyleError::UnknownName(token.to_string())),
    }
}

fn parse_color(value: &str, fg: bool) -> Result<StyleSet, ParseStyleError> {
    let out_of_range = |source| ParseStyleError::OutOfRange {
        given: value.to_string(),
        source,
    };
    let parts: Vec<&str> = value.split(',').collect();
    match parts[..] {
        [index] => {
            let index = parse_number(index)
                .ok_or_else(|| ParseStyleError::InvalidNumber(value.to_string()))?;
            let style = if fg {
                colors::palette_fg(index)
            } else {
                colors::palette_bg(index)
            };
            style.map_err(out_of_range)
        }
        [r, g, b] => {
            let channel = |s: &str| {
                parse_number(s)
                    .ok_or_else(|| ParseStyleError::InvalidRgb(value.to_string()))
            };
            let (r, g, b) = (channel(r)?, channel(g)?, channel(b)?);
            let style = if fg {
                colors::rgb_fg(r, g, b)
            } else {
                colors::rgb_bg(r, g, b)
            };
            style.map_err(out_of_range)
        }
        _ => Err(ParseStyleError::InvalidRgb(value.to_string())),
    }
}

/// Parses a decimal or `0x` hex number. Numbers too large for `i128`
/// saturate so that the color factories reject them as out of range.
fn parse_number(s: &str) -> Option<i128> {
    let parsed = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex) => i128::from_str_radix(hex, 16),
        None => s.parse::<i128>(),
    };
    match parsed {
        Ok(n) => Some(n),
        Err(err) => match err.kind() {
            IntErrorKind::PosOverflow => Some(i128::MAX),
            IntErrorKind::NegOverflow => Some(i128::MIN),
            _ => None,
        },
    }
}
