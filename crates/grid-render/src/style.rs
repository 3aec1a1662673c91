//! Style decoration: render a cell's content with ANSI escapes.
//!
//! Decoration is width-neutral by contract: escape sequences occupy zero
//! display columns, so it always runs after padding has fixed every
//! cell's visual width. Nesting decorated output is not supported (the
//! trailing reset of an inner span would cancel an outer one), which is
//! why the engine picks exactly one style per cell before calling in.

use crossterm::style::{Attribute, Color, ContentStyle};
use grid_config::{StyleColor, StyleSpec};

fn color_of(color: StyleColor) -> Color {
    match color {
        StyleColor::Black => Color::Black,
        StyleColor::DarkRed => Color::DarkRed,
        StyleColor::DarkGreen => Color::DarkGreen,
        StyleColor::DarkYellow => Color::DarkYellow,
        StyleColor::DarkBlue => Color::DarkBlue,
        StyleColor::DarkMagenta => Color::DarkMagenta,
        StyleColor::DarkCyan => Color::DarkCyan,
        StyleColor::Grey => Color::Grey,
        StyleColor::DarkGrey => Color::DarkGrey,
        StyleColor::Red => Color::Red,
        StyleColor::Green => Color::Green,
        StyleColor::Yellow => Color::Yellow,
        StyleColor::Blue => Color::Blue,
        StyleColor::Magenta => Color::Magenta,
        StyleColor::Cyan => Color::Cyan,
        StyleColor::White => Color::White,
        StyleColor::Rgb { r, g, b } => Color::Rgb { r, g, b },
        StyleColor::Ansi(value) => Color::AnsiValue(value),
    }
}

/// Wrap `text` in the escape sequences `spec` calls for. A plain spec
/// returns the input unchanged.
pub fn decorate(text: &str, spec: &StyleSpec) -> String {
    if spec.is_plain() {
        return text.to_string();
    }
    let mut style = ContentStyle::new();
    style.foreground_color = spec.fg.map(color_of);
    style.background_color = spec.bg.map(color_of);
    if spec.bold {
        style.attributes.set(Attribute::Bold);
    }
    if spec.dim {
        style.attributes.set(Attribute::Dim);
    }
    if spec.italic {
        style.attributes.set(Attribute::Italic);
    }
    if spec.underline {
        style.attributes.set(Attribute::Underlined);
    }
    if spec.reverse {
        style.attributes.set(Attribute::Reverse);
    }
    style.apply(text).to_string()
}
