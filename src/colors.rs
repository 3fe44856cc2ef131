//! Named styles and checked color factories.
//!
//! Each named style is a single SGR code: foreground colors use 30-37 and
//! 90-97, background colors 40-47 and 100-107, and text attributes 1-9.
//! All of them are also listed, by lowercase name, in [`NAMED`].
//!
//! The palette and RGB factories accept any integer and reject values
//! outside `0..=255` with a [`StyleError`].

use std::borrow::Cow;

use crate::{Channel, Code, StyleError, StyleSet};

macro_rules! named_styles {
    ($($name:ident => $key:literal, $code:literal;)*) => {
        $(
            #[allow(missing_docs)]
            pub const $name: StyleSet = StyleSet::from_static({
                const CODES: &[Code] = &[Cow::Borrowed($code)];
                CODES
            });
        )*

        /// Every named style paired with its lowercase name.
        pub static NAMED: &[(&str, StyleSet)] = &[$(($key, $name)),*];
    };
}

named_styles! {
    BLACK => "black", "30";
    RED => "red", "31";
    GREEN => "green", "32";
    YELLOW => "yellow", "33";
    BLUE => "blue", "34";
    MAGENTA => "magenta", "35";
    CYAN => "cyan", "36";
    WHITE => "white", "37";
    GRAY => "gray", "90";
    BRIGHT_RED => "bright_red", "91";
    BRIGHT_GREEN => "bright_green", "92";
    BRIGHT_YELLOW => "bright_yellow", "93";
    BRIGHT_BLUE => "bright_blue", "94";
    BRIGHT_MAGENTA => "bright_magenta", "95";
    BRIGHT_CYAN => "bright_cyan", "96";
    BRIGHT_WHITE => "bright_white", "97";

    BG_BLACK => "bg_black", "40";
    BG_RED => "bg_red", "41";
    BG_GREEN => "bg_green", "42";
    BG_YELLOW => "bg_yellow", "43";
    BG_BLUE => "bg_blue", "44";
    BG_MAGENTA => "bg_magenta", "45";
    BG_CYAN => "bg_cyan", "46";
    BG_WHITE => "bg_white", "47";
    BG_GRAY => "bg_gray", "100";
    BRIGHT_BG_RED => "bright_bg_red", "101";
    BRIGHT_BG_GREEN => "bright_bg_green", "102";
    BRIGHT_BG_YELLOW => "bright_bg_yellow", "103";
    BRIGHT_BG_BLUE => "bright_bg_blue", "104";
    BRIGHT_BG_MAGENTA => "bright_bg_magenta", "105";
    BRIGHT_BG_CYAN => "bright_bg_cyan", "106";
    BRIGHT_BG_WHITE => "bright_bg_white", "107";

    BOLD => "bold", "1";
    DIM => "dim", "2";
    ITALIC => "italic", "3";
    UNDERLINE => "underline", "4";
    BLINK => "blink", "5";
    BLINK_FAST => "blink_fast", "6";
    REVERSE => "reverse", "7";
    HIDDEN => "hidden", "8";
    STRIKETHROUGH => "strikethrough", "9";
}

/// Look up a named style, e.g. `"bright_bg_yellow"`.
///
/// Names are matched exactly; they are all lowercase.
pub fn lookup(name: &str) -> Option<StyleSet> {
    NAMED.iter().find(|(key, _)| *key == name).map(|(_, style)| style.clone())
}

/// A foreground color from the 256-color palette.
///
/// Returns an error if `index` is outside `0..=255`.
///
/// ```
/// use termstyle::palette_fg;
///
/// let orange = palette_fg(202).unwrap();
/// assert_eq!(orange.paint("Orange text"), "\x1b[38;5;202mOrange text\x1b[0m");
/// assert!(palette_fg(256).is_err());
/// ```
pub fn palette_fg(index: impl TryInto<i128>) -> Result<StyleSet, StyleError> {
    palette_index(widen(index)).map(StyleSet::fg256)
}

/// A background color from the 256-color palette.
///
/// Returns an error if `index` is outside `0..=255`.
pub fn palette_bg(index: impl TryInto<i128>) -> Result<StyleSet, StyleError> {
    palette_index(widen(index)).map(StyleSet::bg256)
}

/// A 24-bit foreground color.
///
/// Returns an error naming the first channel outside `0..=255`.
pub fn rgb_fg(
    r: impl TryInto<i128>,
    g: impl TryInto<i128>,
    b: impl TryInto<i128>,
) -> Result<StyleSet, StyleError> {
    let (r, g, b) = rgb_channels(widen(r), widen(g), widen(b))?;
    Ok(StyleSet::fg_rgb(r, g, b))
}

/// A 24-bit background color.
///
/// Returns an error naming the first channel outside `0..=255`.
pub fn rgb_bg(
    r: impl TryInto<i128>,
    g: impl TryInto<i128>,
    b: impl TryInto<i128>,
) -> Result<StyleSet, StyleError> {
    let (r, g, b) = rgb_channels(widen(r), widen(g), widen(b))?;
    Ok(StyleSet::bg_rgb(r, g, b))
}

// Every primitive integer fits except a `u128` above `i128::MAX`, which
// saturates. Either way it is out of range.
fn widen(value: impl TryInto<i128>) -> i128 {
    value.try_into().unwrap_or(i128::MAX)
}

fn palette_index(index: i128) -> Result<u8, StyleError> {
    u8::try_from(index).map_err(|_| {
        tracing::debug!(index, "palette index out of range");
        StyleError::PaletteIndex { index }
    })
}

fn rgb_channels(r: i128, g: i128, b: i128) -> Result<(u8, u8, u8), StyleError> {
    let channel = |channel: Channel, value: i128| {
        u8::try_from(value).map_err(|_| {
            tracing::debug!(%channel, value, "rgb channel out of range");
            StyleError::RgbChannel { channel, value }
        })
    };
    Ok((
        channel(Channel::Red, r)?,
        channel(Channel::Green, g)?,
        channel(Channel::Blue, b)?,
    ))
}
