//! Cell: the smallest addressable unit of table content.
//!
//! Design invariants:
//! * `width` always reflects the rendered display width of `content`;
//!   every mutation updates both together. The one sanctioned exception is
//!   [`Cell::restyle`], which injects zero-display-width escape sequences.
//! * Splitting is defined for content kinds only. A split of a border cell
//!   is a programming error and panics; the overflow-kind mapping for
//!   border kinds is deliberately unspecified.

use grid_text::{display_width, split_at_width, truncate_to_width};

/// Role of a cell inside the finished grid. Everything that is not one of
/// the four content kinds is decoration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellKind {
    Primary,
    PrimaryOverflow,
    Header,
    HeaderOverflow,
    Top,
    Bottom,
    Left,
    Right,
    BetweenColumns,
    BetweenRows,
}

impl CellKind {
    /// A border cell is any cell that does not carry caller content.
    pub const fn is_border(self) -> bool {
        !matches!(
            self,
            Self::Primary | Self::PrimaryOverflow | Self::Header | Self::HeaderOverflow
        )
    }

    /// The kind carried by content split off this kind, or `None` for
    /// border kinds (splitting those is not defined).
    pub const fn overflow_variant(self) -> Option<Self> {
        match self {
            Self::Primary | Self::PrimaryOverflow => Some(Self::PrimaryOverflow),
            Self::Header | Self::HeaderOverflow => Some(Self::HeaderOverflow),
            _ => None,
        }
    }
}

/// Where padding goes relative to existing content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    Left,
    Right,
    Center,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    kind: CellKind,
    content: String,
    width: usize, // display columns, not bytes
}

impl Cell {
    /// New cell with its width measured from the content.
    pub fn new(kind: CellKind, content: impl Into<String>) -> Self {
        let content = content.into();
        let width = display_width(&content);
        Self {
            kind,
            content,
            width,
        }
    }

    /// New cell with a caller-supplied width, for content whose measured
    /// width is already known at the call site.
    pub fn with_width(kind: CellKind, content: impl Into<String>, width: usize) -> Self {
        Self {
            kind,
            content: content.into(),
            width,
        }
    }

    /// Empty content cell; scaffold for overflow rows.
    pub fn empty(kind: CellKind) -> Self {
        Self {
            kind,
            content: String::new(),
            width: 0,
        }
    }

    pub fn kind(&self) -> CellKind {
        self.kind
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn is_border(&self) -> bool {
        self.kind.is_border()
    }

    /// Keep only the first `n` display columns; content beyond the cut is
    /// discarded. `n` at or beyond the current width is a no-op.
    pub fn truncate(&mut self, n: usize) {
        if n >= self.width {
            return;
        }
        self.content = truncate_to_width(&self.content, n);
        self.width = display_width(&self.content);
    }

    /// Split at display column `n`: this cell keeps the prefix, the
    /// returned cell holds the suffix under the overflow variant of this
    /// cell's kind.
    ///
    /// Panics when called on a border cell; there is no meaningful
    /// overflow kind for decoration and guessing one would hide a defect.
    pub fn split_at(&mut self, n: usize) -> Self {
        let Some(overflow_kind) = self.kind.overflow_variant() else {
            panic!("split_at on border cell kind {:?}", self.kind);
        };
        let (prefix, suffix) = split_at_width(&self.content, n);
        let rest = Self {
            kind: overflow_kind,
            width: display_width(&suffix),
            content: suffix,
        };
        self.width = display_width(&prefix);
        self.content = prefix;
        rest
    }

    /// Grow the cell by exactly `n` columns of spaces. Center placement
    /// puts `floor(n/2)` on the left so the right side takes the odd
    /// column.
    pub fn pad(&mut self, n: usize, placement: Placement) {
        if n == 0 {
            return;
        }
        let (left, right) = match placement {
            Placement::Left => (n, 0),
            Placement::Right => (0, n),
            Placement::Center => (n / 2, n - n / 2),
        };
        let mut padded = String::with_capacity(self.content.len() + n);
        padded.extend(std::iter::repeat_n(' ', left));
        padded.push_str(&self.content);
        padded.extend(std::iter::repeat_n(' ', right));
        self.content = padded;
        self.width += n;
    }

    /// Replace the stored content with a styled rendition of itself.
    /// The recorded width is intentionally untouched: escape sequences
    /// occupy zero display columns.
    pub fn restyle(&mut self, styled: String) {
        self.content = styled;
    }

    pub fn into_content(self) -> String {
        self.content
    }
}
