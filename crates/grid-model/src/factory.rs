//! Row construction: content rows, blank scaffolds, and border weaving.
//!
//! Pure functions, no shared state. Vertical border weaving mutates an
//! existing row; everything else builds a fresh one.
//!
//! Glyph selection contract: each vertical pass carries its own
//! [`EdgeGlyphs`] set (corners for the left/right edges, tee separators
//! for the between-columns pass). `Left`/`Right` select by the row's own
//! derived kind; `BetweenColumns` selects per adjacent-cell context so a
//! horizontal border row receives tees while content rows receive plain
//! vertical lines.

use crate::cell::{Cell, CellKind};
use crate::row::{Row, RowKind};

/// Wrap an existing cell sequence as-is.
pub fn from_cells(cells: Vec<Cell>) -> Row {
    Row::new(cells)
}

/// One cell per string, all sharing `kind`.
pub fn from_strings<S: AsRef<str>>(contents: &[S], kind: CellKind) -> Row {
    from_cells(
        contents
            .iter()
            .map(|s| Cell::new(kind, s.as_ref()))
            .collect(),
    )
}

/// `n` empty cells of `kind`; the scaffold that receives overflow slices
/// column by column.
pub fn blank_of_length(n: usize, kind: CellKind) -> Row {
    from_cells((0..n).map(|_| Cell::empty(kind)).collect())
}

/// Horizontal border row: one cell per column, `glyph` repeated to that
/// column's width. `kind` must be one of the horizontal border kinds.
pub fn horizontal_border(kind: CellKind, column_widths: &[usize], glyph: char) -> Row {
    debug_assert!(
        matches!(
            kind,
            CellKind::Top | CellKind::Bottom | CellKind::BetweenRows
        ),
        "horizontal_border called with {kind:?}"
    );
    from_cells(
        column_widths
            .iter()
            .map(|&w| {
                let mut content = String::with_capacity(w * glyph.len_utf8());
                content.extend(std::iter::repeat_n(glyph, w));
                Cell::with_width(kind, content, w)
            })
            .collect(),
    )
}

/// Per-pass vertical border glyph set.
#[derive(Debug, Clone, Copy)]
pub struct EdgeGlyphs {
    pub top_edge: char,
    pub bottom_edge: char,
    pub separator: char,
    pub line: char,
}

fn glyph_for_row(kind: RowKind, glyphs: &EdgeGlyphs) -> char {
    match kind {
        RowKind::UpperBorder => glyphs.top_edge,
        RowKind::LowerBorder => glyphs.bottom_edge,
        RowKind::InnerBorder => glyphs.separator,
        RowKind::Primary | RowKind::Header | RowKind::Overflow => glyphs.line,
    }
}

fn glyph_for_cell(kind: CellKind, glyphs: &EdgeGlyphs) -> char {
    match kind {
        CellKind::Top => glyphs.top_edge,
        CellKind::Bottom => glyphs.bottom_edge,
        CellKind::BetweenRows => glyphs.separator,
        _ => glyphs.line,
    }
}

/// Weave one vertical border into `row`.
///
/// * `Left` / `Right`: prepend / append one border cell chosen by the
///   row's own derived kind.
/// * `BetweenColumns`: interleave one border cell between every pair of
///   adjacent cells (never after the last), chosen by the adjacent cell.
///
/// Any other `side` is a programming error.
pub fn with_vertical_border(row: &mut Row, side: CellKind, glyphs: &EdgeGlyphs) {
    match side {
        CellKind::Left => {
            let glyph = glyph_for_row(row.kind(), glyphs);
            row.insert(0, Cell::with_width(side, glyph.to_string(), 1));
        }
        CellKind::Right => {
            let glyph = glyph_for_row(row.kind(), glyphs);
            row.push(Cell::with_width(side, glyph.to_string(), 1));
        }
        CellKind::BetweenColumns => {
            // Back to front so earlier insertions do not shift the
            // positions still to visit.
            for i in (1..row.len()).rev() {
                let glyph = glyph_for_cell(row.cell(i - 1).kind(), glyphs);
                row.insert(i, Cell::with_width(side, glyph.to_string(), 1));
            }
        }
        other => panic!("{other:?} is not a vertical border kind"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEE: EdgeGlyphs = EdgeGlyphs {
        top_edge: '┬',
        bottom_edge: '┴',
        separator: '┼',
        line: '│',
    };
    const LEFT: EdgeGlyphs = EdgeGlyphs {
        top_edge: '┌',
        bottom_edge: '└',
        separator: '├',
        line: '│',
    };

    #[test]
    fn from_strings_measures_each_cell() {
        let row = from_strings(&["ab", "界"], CellKind::Primary);
        assert_eq!(row.len(), 2);
        assert_eq!(row.cell(0).width(), 2);
        assert_eq!(row.cell(1).width(), 2);
    }

    #[test]
    fn blank_scaffold() {
        let row = blank_of_length(3, CellKind::PrimaryOverflow);
        assert_eq!(row.len(), 3);
        assert!(row.cells().iter().all(|c| c.width() == 0));
        assert_eq!(row.kind(), crate::row::RowKind::Overflow);
    }

    #[test]
    fn horizontal_border_repeats_glyph_to_width() {
        let row = horizontal_border(CellKind::Top, &[3, 1], '─');
        assert_eq!(row.cell(0).content(), "───");
        assert_eq!(row.cell(0).width(), 3);
        assert_eq!(row.cell(1).content(), "─");
    }

    #[test]
    fn left_edge_uses_row_kind() {
        let mut top = horizontal_border(CellKind::Top, &[2], '─');
        with_vertical_border(&mut top, CellKind::Left, &LEFT);
        assert_eq!(top.cell(0).content(), "┌");

        let mut content = from_strings(&["x"], CellKind::Primary);
        with_vertical_border(&mut content, CellKind::Left, &LEFT);
        assert_eq!(content.cell(0).content(), "│");
    }

    #[test]
    fn between_columns_interleaves_never_trailing() {
        let mut row = from_strings(&["a", "b", "c"], CellKind::Primary);
        with_vertical_border(&mut row, CellKind::BetweenColumns, &TEE);
        assert_eq!(row.len(), 5);
        let kinds: Vec<_> = row.cells().iter().map(|c| c.kind()).collect();
        assert_eq!(
            kinds,
            vec![
                CellKind::Primary,
                CellKind::BetweenColumns,
                CellKind::Primary,
                CellKind::BetweenColumns,
                CellKind::Primary,
            ]
        );
    }

    #[test]
    fn between_columns_on_inner_border_uses_cross() {
        let mut row = horizontal_border(CellKind::BetweenRows, &[1, 1], '─');
        with_vertical_border(&mut row, CellKind::BetweenColumns, &TEE);
        assert_eq!(row.cell(1).content(), "┼");
    }

    #[test]
    fn single_column_gets_no_interleave() {
        let mut row = from_strings(&["only"], CellKind::Primary);
        with_vertical_border(&mut row, CellKind::BetweenColumns, &TEE);
        assert_eq!(row.len(), 1);
    }
}
