//! Border side flags and glyph sets.

use bitflags::bitflags;

bitflags! {
    /// Which decorative rules a table draws.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct BorderSides: u8 {
        const TOP = 1 << 0;
        const BOTTOM = 1 << 1;
        const LEFT = 1 << 2;
        const RIGHT = 1 << 3;
        const BETWEEN_COLUMNS = 1 << 4;
        const BETWEEN_ROWS = 1 << 5;
    }
}

/// The full glyph vocabulary of a bordered table. Every field is a single
/// display-column character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BorderGlyphs {
    pub horizontal_line: char,
    pub vertical_line: char,
    pub top_left_corner: char,
    pub top_right_corner: char,
    pub bottom_left_corner: char,
    pub bottom_right_corner: char,
    pub top_separator: char,
    pub bottom_separator: char,
    pub middle_separator: char,
    pub left_separator: char,
    pub right_separator: char,
}

impl BorderGlyphs {
    /// Unicode light box drawing set.
    pub const fn light() -> Self {
        Self {
            horizontal_line: '─',
            vertical_line: '│',
            top_left_corner: '┌',
            top_right_corner: '┐',
            bottom_left_corner: '└',
            bottom_right_corner: '┘',
            top_separator: '┬',
            bottom_separator: '┴',
            middle_separator: '┼',
            left_separator: '├',
            right_separator: '┤',
        }
    }

    /// ASCII fallback for terminals without box-drawing glyphs.
    pub const fn ascii() -> Self {
        Self {
            horizontal_line: '-',
            vertical_line: '|',
            top_left_corner: '+',
            top_right_corner: '+',
            bottom_left_corner: '+',
            bottom_right_corner: '+',
            top_separator: '+',
            bottom_separator: '+',
            middle_separator: '+',
            left_separator: '+',
            right_separator: '+',
        }
    }
}

impl Default for BorderGlyphs {
    fn default() -> Self {
        Self::light()
    }
}
