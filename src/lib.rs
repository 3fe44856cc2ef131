/*!
This crate builds ANSI escape sequences for styling terminal text: named
foreground and background colors, the 256-color palette, 24-bit truecolor
and text attributes such as bold or underline.

The central type is [`StyleSet`], an immutable ordered list of SGR
parameter codes. Style sets are combined with `+` (or
[`StyleSet::combine`]) and applied to text with [`StyleSet::apply`] or
[`StyleSet::paint`]. Nothing in this crate inspects the terminal or writes
to it on its own; callers print the returned strings themselves.

# Organization

The [`colors`] module holds the named constants (`RED`, `BG_CYAN`, `BOLD`,
...) and the checked factories for palette and RGB colors, all re-exported
at the crate root. The [`ansi`] module has the low-level sequence
formatting. The `WriteStyle` trait extends `io::Write` with methods for
setting and resetting styles, and `StyleWriter` satisfies it for any
`io::Write`.

# Example: combining and applying styles

```
use termstyle::{BOLD, RED, RenderOptions, UNDERLINE, palette_fg, rgb_fg};

assert_eq!(RED.paint("Error"), "\x1b[31mError\x1b[0m");
assert_eq!((BOLD + UNDERLINE).paint("Important"), "\x1b[1;4mImportant\x1b[0m");

let warm = rgb_fg(255, 80, 80)? + BOLD;
assert_eq!(warm.paint("Error"), "\x1b[38;2;255;80;80;1mError\x1b[0m");

let orange = palette_fg(202)?;
let line = orange.apply(&["a", "b"], RenderOptions::new().set_separator("-").set_reset(false));
assert_eq!(line, "\x1b[38;5;202ma-b");
# Ok::<(), termstyle::StyleError>(())
```

# Example: writing to a stream

```rust,no_run
# fn test() -> Result<(), Box<dyn std::error::Error>> {
use std::io::Write;
use termstyle::{GREEN, StyleWriter, WriteStyle};

let mut stdout = StyleWriter::new(std::io::stdout());
stdout.set_style(&GREEN)?;
writeln!(&mut stdout, "green text!")?;
stdout.reset()?;
# Ok(()) }
```
*/

pub mod ansi;
pub mod colors;
mod traits;
mod types;
mod writers;

// Re-export core traits and types
pub use colors::*;
pub use traits::{StyleCodes, WriteStyle};
pub use types::{
    Channel, Code, ParseStyleError, RenderOptions, StyleError, StyleSet,
};
pub use writers::StyleWriter;
