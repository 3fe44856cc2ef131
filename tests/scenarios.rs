use std::fmt::Display;

use termstyle::{
    BG_BLUE, BOLD, ITALIC, RED, RenderOptions, StyleSet, StyleWriter,
    UNDERLINE, WriteStyle, palette_bg, palette_fg, rgb_bg, rgb_fg,
};

#[test]
fn red_error() {
    let out = RED.apply(&["Error"], &RenderOptions::default());
    assert_eq!(out, "\x1b[31mError\x1b[0m");
    assert_eq!(RED.paint("Error"), out);
}

#[test]
fn bold_underline_important() {
    let style = BOLD.combine(&UNDERLINE);
    assert_eq!(style.paint("Important"), "\x1b[1;4mImportant\x1b[0m");
}

#[test]
fn separator_without_reset() {
    let out = RED.apply(
        &["a", "b"],
        RenderOptions::new().set_separator("-").set_reset(false),
    );
    assert_eq!(out, "\x1b[31ma-b");
}

#[test]
fn palette_orange() {
    let orange = palette_fg(202).unwrap();
    assert_eq!(orange.paint("Orange text"), "\x1b[38;5;202mOrange text\x1b[0m");
}

#[test]
fn rgb_then_bold() {
    let style = rgb_fg(255, 80, 80).unwrap() + BOLD;
    assert_eq!(style.paint("Error"), "\x1b[38;2;255;80;80;1mError\x1b[0m");
}

#[test]
fn mixed_value_types() {
    let values: [&dyn Display; 3] = [&"count", &42, &1.5];
    let mut options = RenderOptions::new();
    options.set_separator(" ");
    assert_eq!(ITALIC.apply(&values, &options), "\x1b[3mcount 42 1.5\x1b[0m");
}

#[test]
fn no_values() {
    let none: [&str; 0] = [];
    assert_eq!(RED.apply(&none, &RenderOptions::new()), "\x1b[31m\x1b[0m");
}

#[test]
fn rendering_is_repeatable() {
    let style = BOLD + palette_bg(17).unwrap() + RED;
    let options = RenderOptions::new();
    let first = style.apply(&["x", "y"], &options);
    let second = style.apply(&["x", "y"], &options);
    assert_eq!(first, second);
    assert_eq!(style, BOLD + palette_bg(17).unwrap() + RED);
}

#[test]
fn range_errors_construct_nothing() {
    assert!(palette_fg(-1).is_err());
    assert!(palette_fg(256).is_err());
    assert!(palette_bg(-1).is_err());
    assert!(palette_bg(256).is_err());
    assert!(rgb_fg(256, 0, 0).is_err());
    assert!(rgb_fg(0, -1, 0).is_err());
    assert!(rgb_bg(0, 0, 256).is_err());

    let err = palette_fg(300).unwrap_err();
    assert_eq!(err.to_string(), "Color index must be in range 0..255");
    let err = rgb_bg(0, 0, -5).unwrap_err();
    assert_eq!(err.to_string(), "RGB values must be in range 0..255");
}

#[test]
fn parsed_style_matches_constants() {
    let parsed: StyleSet = "bold+underline+red".parse().unwrap();
    assert_eq!(parsed, BOLD + UNDERLINE + RED);
    let parsed: StyleSet = "fg:255,80,80 bold".parse().unwrap();
    assert_eq!(parsed, rgb_fg(255, 80, 80).unwrap() + BOLD);
}

#[test]
fn writer_output_matches_apply() {
    let style = BOLD + BG_BLUE;
    let mut options = RenderOptions::new();
    options.set_separator(", ");

    let mut wtr = StyleWriter::new(Vec::new());
    wtr.write_styled(&style, &["one", "two"], &options).unwrap();
    let written = String::from_utf8(wtr.into_inner()).unwrap();

    assert_eq!(written, style.apply(&["one", "two"], &options));
}
