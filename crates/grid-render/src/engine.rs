//! The layout pipeline.
//!
//! Phase order is fixed and none of the phases re-enter:
//! 1. validate shape, then options (policy per `option_checks`);
//! 2. limit logical rows to `max_rows`;
//! 3. limit columns to `min(max_columns, table width)`;
//! 4. wrap the grid into rows (`Header` kind for row 0 on request);
//! 5. compute column widths from pre-split, pre-border content;
//! 6. split overflowing cells into overflow rows (or truncate at
//!    `max_row_height == 1`), recording inserted indices;
//! 7. pad every cell to `column width + cell_padding`, then fold the
//!    padding into the stored widths;
//! 8. weave borders: between-rows, top, bottom, then the vertical passes
//!    (between-columns, right, left) — later passes read the row kinds
//!    the earlier ones established;
//! 9. flatten into the read-only facade.
//!
//! Invariants carried between phases:
//! * column widths are computed once (phase 5) and only ever grow by the
//!   padding fold-in (phase 7); border weaving never alters them;
//! * after phase 6 every content cell fits its column;
//! * `overflow_rows` / `logical_row` index the physical row list and stay
//!   valid exactly until border weaving reshapes it, which is also the
//!   last phase that consults them.
//!
//! Failed validation returns before phase 2, so the caller's input is
//! never partially consumed. Later phases treat inconsistencies (a row
//! with no cells, a split on a border cell) as programming errors and
//! panic.

use crate::facade::TableHandle;
use crate::{TableError, style};
use ahash::AHashSet;
use grid_config::{BorderSpec, StyleOptions, TableOptions, validate_options, validate_shape};
use grid_model::{BorderSides, Cell, CellKind, EdgeGlyphs, Placement, Row, factory};
use tracing::debug;

/// Lay out `grid` under `options` and return the finished read-only
/// table.
pub fn build(grid: &[Vec<String>], options: &TableOptions) -> Result<TableHandle, TableError> {
    validate_shape(grid)?;
    let mut options = options.clone();
    validate_options(&mut options)?;

    let mut table = Table::ingest(grid, &options);
    table.compute_column_widths(&options);
    table.split_overflow(&options);
    table.pad_cells(&options);

    let styles = options.styles.resolve();
    if let Some(styles) = &styles {
        table.apply_content_styles(styles);
    }
    table.insert_borders(&options.borders.resolve());
    if let Some(styles) = &styles {
        table.apply_border_style(styles);
    }
    Ok(TableHandle::new(table.flatten()))
}

/// Working state of one layout run. Owns every row and cell exclusively;
/// nothing escapes until `flatten`.
struct Table {
    rows: Vec<Row>,
    column_widths: Vec<usize>,
    /// Physical indices of overflow continuations; between-row borders
    /// are suppressed at these positions.
    overflow_rows: AHashSet<usize>,
    /// Physical index -> logical source row; drives row striping and
    /// targeted cell styles.
    logical_row: Vec<usize>,
}

impl Table {
    /// Phases 2-4: row limiting, column limiting, row construction.
    fn ingest(grid: &[Vec<String>], options: &TableOptions) -> Self {
        let row_budget = options.max_rows.min(grid.len());
        let mut rows = Vec::with_capacity(row_budget);
        let mut logical_row = Vec::with_capacity(row_budget);
        for (index, source) in grid[..row_budget].iter().enumerate() {
            let kind = if options.header && index == 0 {
                CellKind::Header
            } else {
                CellKind::Primary
            };
            rows.push(factory::from_strings(source, kind));
            logical_row.push(index);
        }

        let mut table = Self {
            rows,
            column_widths: Vec::new(),
            overflow_rows: AHashSet::new(),
            logical_row,
        };
        table.limit_columns(options);
        table
    }

    fn limit_columns(&mut self, options: &TableOptions) {
        let width = self.rows.first().map(Row::len).unwrap_or(0);
        let column_budget = options.max_columns.min(width);
        for row in &mut self.rows {
            let len = row.len();
            if len > column_budget {
                row.splice(column_budget, len, []);
            }
        }
        debug!(
            rows = self.rows.len(),
            columns = column_budget,
            "grid limited"
        );
    }

    /// Phase 5: `min(configured cap, widest observed content)` per
    /// column, from pre-split, pre-border content only.
    fn compute_column_widths(&mut self, options: &TableOptions) {
        let columns = self.rows.first().map(Row::len).unwrap_or(0);
        let caps = options.max_col_widths.resolve(columns);
        let mut widths = vec![0usize; columns];
        for row in &self.rows {
            for (column, cell) in row.cells().iter().enumerate() {
                widths[column] = widths[column].max(cell.width());
            }
        }
        for (width, cap) in widths.iter_mut().zip(&caps) {
            *width = (*width).min(*cap);
        }
        self.column_widths = widths;
    }

    /// Phase 6: overflow splitting.
    ///
    /// At `max_row_height == 1` an overlong cell is truncated in place.
    /// Otherwise the remainder is split column-width at a time into blank
    /// scaffold rows created on demand and inserted directly after the
    /// parent; a remainder still standing once `max_row_height - 1`
    /// continuations exist is truncated into the last slice.
    fn split_overflow(&mut self, options: &TableOptions) {
        let height = options.max_row_height;
        let columns = self.column_widths.len();
        let source = std::mem::take(&mut self.rows);
        let source_logical = std::mem::take(&mut self.logical_row);

        let mut rows = Vec::with_capacity(source.len());
        let mut logical_row = Vec::with_capacity(source.len());
        let mut overflow_rows = AHashSet::new();

        for (mut row, logical) in source.into_iter().zip(source_logical) {
            if height == 1 {
                for (column, &width) in self.column_widths.iter().enumerate() {
                    let cell = row.cell_mut(column);
                    if cell.width() > width {
                        cell.truncate(width);
                    }
                }
                rows.push(row);
                logical_row.push(logical);
                continue;
            }

            let mut spill: Vec<Row> = Vec::new();
            for column in 0..columns {
                let width = self.column_widths[column];
                if row.cell(column).width() <= width {
                    continue;
                }
                let mut rest = row.cell_mut(column).split_at(width);
                let mut produced = 0usize;
                while produced < height - 1 {
                    if spill.len() == produced {
                        spill.push(factory::blank_of_length(columns, rest.kind()));
                    }
                    if rest.width() <= width {
                        spill[produced].replace(column, rest);
                        break;
                    }
                    if produced == height - 2 {
                        // Continuation budget exhausted: the last slice
                        // swallows the remainder, truncated.
                        rest.truncate(width);
                        spill[produced].replace(column, rest);
                        break;
                    }
                    let next = rest.split_at(width);
                    spill[produced].replace(column, rest);
                    rest = next;
                    produced += 1;
                }
            }

            rows.push(row);
            logical_row.push(logical);
            for extra in spill {
                overflow_rows.insert(rows.len());
                rows.push(extra);
                logical_row.push(logical);
            }
        }

        if !overflow_rows.is_empty() {
            debug!(
                physical_rows = rows.len(),
                overflow = overflow_rows.len(),
                "overflow rows inserted"
            );
        }
        self.rows = rows;
        self.logical_row = logical_row;
        self.overflow_rows = overflow_rows;
    }

    /// Phase 7: equalize every cell to `column width + cell_padding`,
    /// then fold the padding into the stored widths so border cells are
    /// cut to the padded width.
    fn pad_cells(&mut self, options: &TableOptions) {
        for row in &mut self.rows {
            for (column, cell) in row.cells_mut().enumerate() {
                let target = self.column_widths[column] + options.cell_padding;
                let deficit = target.saturating_sub(cell.width());
                cell.pad(deficit, Placement::Right);
            }
        }
        for width in &mut self.column_widths {
            *width += options.cell_padding;
        }
    }

    /// Content styling: one style per cell — a targeted cell style wins
    /// over the row stripe; stripes cycle over logical rows so overflow
    /// continuations match their parent.
    fn apply_content_styles(&mut self, styles: &StyleOptions) {
        if styles.row_styles.is_empty() && styles.target_cell_styles.is_empty() {
            return;
        }
        for (physical, row) in self.rows.iter_mut().enumerate() {
            let logical = self.logical_row[physical];
            let stripe = if styles.row_styles.is_empty() {
                None
            } else {
                Some(&styles.row_styles[logical % styles.row_styles.len()])
            };
            for (column, cell) in row.cells_mut().enumerate() {
                let targeted = styles
                    .target_cell_styles
                    .iter()
                    .find(|t| t.row == logical && t.col == column)
                    .map(|t| &t.style);
                let Some(spec) = targeted.or(stripe) else {
                    continue;
                };
                if spec.is_plain() {
                    continue;
                }
                let styled = style::decorate(cell.content(), spec);
                cell.restyle(styled);
            }
        }
    }

    /// Phase 8: border weaving, in an order where every pass can trust
    /// the row kinds established by the passes before it.
    fn insert_borders(&mut self, spec: &BorderSpec) {
        // Nothing to decorate: disabled borders, or a working set emptied
        // by pass-through limits in skip mode.
        if spec.sides.is_empty() || self.rows.is_empty() {
            return;
        }
        let glyphs = &spec.glyphs;

        if spec.sides.contains(BorderSides::BETWEEN_ROWS) {
            let source = std::mem::take(&mut self.rows);
            let mut rows = Vec::with_capacity(source.len() * 2);
            for (index, row) in source.into_iter().enumerate() {
                // A continuation belongs to the logical row above it; no
                // rule between a row and its own overflow.
                if index > 0 && !self.overflow_rows.contains(&index) {
                    rows.push(factory::horizontal_border(
                        CellKind::BetweenRows,
                        &self.column_widths,
                        glyphs.horizontal_line,
                    ));
                }
                rows.push(row);
            }
            self.rows = rows;
        }
        if spec.sides.contains(BorderSides::TOP) {
            self.rows.insert(
                0,
                factory::horizontal_border(
                    CellKind::Top,
                    &self.column_widths,
                    glyphs.horizontal_line,
                ),
            );
        }
        if spec.sides.contains(BorderSides::BOTTOM) {
            self.rows.push(factory::horizontal_border(
                CellKind::Bottom,
                &self.column_widths,
                glyphs.horizontal_line,
            ));
        }

        let vertical_passes = [
            (
                BorderSides::BETWEEN_COLUMNS,
                CellKind::BetweenColumns,
                EdgeGlyphs {
                    top_edge: glyphs.top_separator,
                    bottom_edge: glyphs.bottom_separator,
                    separator: glyphs.middle_separator,
                    line: glyphs.vertical_line,
                },
            ),
            (
                BorderSides::RIGHT,
                CellKind::Right,
                EdgeGlyphs {
                    top_edge: glyphs.top_right_corner,
                    bottom_edge: glyphs.bottom_right_corner,
                    separator: glyphs.right_separator,
                    line: glyphs.vertical_line,
                },
            ),
            (
                BorderSides::LEFT,
                CellKind::Left,
                EdgeGlyphs {
                    top_edge: glyphs.top_left_corner,
                    bottom_edge: glyphs.bottom_left_corner,
                    separator: glyphs.left_separator,
                    line: glyphs.vertical_line,
                },
            ),
        ];
        for (side, kind, edge) in vertical_passes {
            if !spec.sides.contains(side) {
                continue;
            }
            for row in &mut self.rows {
                factory::with_vertical_border(row, kind, &edge);
            }
        }
    }

    fn apply_border_style(&mut self, styles: &StyleOptions) {
        let Some(spec) = &styles.border_style else {
            return;
        };
        if spec.is_plain() {
            return;
        }
        for row in &mut self.rows {
            for cell in row.cells_mut() {
                if cell.is_border() {
                    let styled = style::decorate(cell.content(), spec);
                    cell.restyle(styled);
                }
            }
        }
    }

    /// Phase 9: read out every cell in row/column order.
    fn flatten(self) -> Vec<Vec<String>> {
        self.rows
            .into_iter()
            .map(|row| row.into_cells().into_iter().map(Cell::into_content).collect())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use grid_config::{BorderMode, ColWidthLimit};

    fn grid(rows: &[&[&str]]) -> Vec<Vec<String>> {
        rows.iter()
            .map(|r| r.iter().map(|c| c.to_string()).collect())
            .collect()
    }

    fn bare_options() -> TableOptions {
        TableOptions {
            borders: BorderMode::Enabled(false),
            cell_padding: 0,
            ..Default::default()
        }
    }

    #[test]
    fn column_widths_cap_at_configured_limit() {
        let input = grid(&[&["abcdef", "xy"], &["ab", "wxyz"]]);
        let options = TableOptions {
            max_col_widths: ColWidthLimit::Uniform(4),
            ..bare_options()
        };
        let mut table = Table::ingest(&input, &options);
        table.compute_column_widths(&options);
        assert_eq!(table.column_widths, vec![4, 4]);
    }

    #[test]
    fn column_widths_follow_observed_content_below_cap() {
        let input = grid(&[&["abc", "x"], &["ab", "wxyz"]]);
        let options = bare_options();
        let mut table = Table::ingest(&input, &options);
        table.compute_column_widths(&options);
        assert_eq!(table.column_widths, vec![3, 4]);
    }

    #[test]
    fn height_one_truncates_without_overflow_rows() {
        let input = grid(&[&["abcdefgh"]]);
        let options = TableOptions {
            max_col_widths: ColWidthLimit::Uniform(3),
            max_row_height: 1,
            ..bare_options()
        };
        let mut table = Table::ingest(&input, &options);
        table.compute_column_widths(&options);
        table.split_overflow(&options);
        assert_eq!(table.rows.len(), 1);
        assert!(table.overflow_rows.is_empty());
        assert_eq!(table.rows[0].cell(0).content(), "abc");
    }

    #[test]
    fn overflow_rows_carry_successive_slices() {
        let input = grid(&[&["abcdefgh", "x"]]);
        let options = TableOptions {
            max_col_widths: ColWidthLimit::Uniform(3),
            max_row_height: 4,
            ..bare_options()
        };
        let mut table = Table::ingest(&input, &options);
        table.compute_column_widths(&options);
        table.split_overflow(&options);
        // 8 columns of content over width 3: slices abc, def, gh.
        assert_eq!(table.rows.len(), 3);
        assert_eq!(table.rows[0].cell(0).content(), "abc");
        assert_eq!(table.rows[1].cell(0).content(), "def");
        assert_eq!(table.rows[2].cell(0).content(), "gh");
        // The short column is blank-padded scaffold in continuations.
        assert_eq!(table.rows[1].cell(1).content(), "");
        assert!(table.overflow_rows.contains(&1));
        assert!(table.overflow_rows.contains(&2));
        assert_eq!(table.logical_row, vec![0, 0, 0]);
    }

    #[test]
    fn overflow_budget_truncates_final_slice() {
        let input = grid(&[&["abcdefghij"]]);
        let options = TableOptions {
            max_col_widths: ColWidthLimit::Uniform(3),
            max_row_height: 2,
            ..bare_options()
        };
        let mut table = Table::ingest(&input, &options);
        table.compute_column_widths(&options);
        table.split_overflow(&options);
        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.rows[0].cell(0).content(), "abc");
        // One continuation allowed; the remainder "defghij" is cut to
        // the column width.
        assert_eq!(table.rows[1].cell(0).content(), "def");
    }

    #[test]
    fn overflow_kind_tracks_header() {
        let input = grid(&[&["abcdef"], &["ab"]]);
        let options = TableOptions {
            header: true,
            max_col_widths: ColWidthLimit::Uniform(3),
            max_row_height: 3,
            ..bare_options()
        };
        let mut table = Table::ingest(&input, &options);
        table.compute_column_widths(&options);
        table.split_overflow(&options);
        assert_eq!(table.rows[0].cell(0).kind(), CellKind::Header);
        assert_eq!(table.rows[1].cell(0).kind(), CellKind::HeaderOverflow);
        assert_eq!(table.rows[2].cell(0).kind(), CellKind::Primary);
    }

    #[test]
    fn pad_equalizes_and_folds_padding_into_widths() {
        let input = grid(&[&["one", "two"], &["three", "four"]]);
        let options = TableOptions {
            cell_padding: 2,
            ..bare_options()
        };
        let mut table = Table::ingest(&input, &options);
        table.compute_column_widths(&options);
        table.split_overflow(&options);
        table.pad_cells(&options);
        assert_eq!(table.column_widths, vec![7, 6]);
        assert_eq!(table.rows[0].cell(0).content(), "one    ");
        assert_eq!(table.rows[1].cell(0).content(), "three  ");
        assert_eq!(table.rows[0].cell(0).width(), 7);
    }

    #[test]
    fn row_and_column_limits_drop_trailing() {
        let input = grid(&[&["a", "b", "c"], &["d", "e", "f"], &["g", "h", "i"]]);
        let options = TableOptions {
            max_rows: 2,
            max_columns: 2,
            ..bare_options()
        };
        let table = Table::ingest(&input, &options);
        assert_eq!(table.rows.len(), 2);
        assert!(table.rows.iter().all(|r| r.len() == 2));
        assert_eq!(table.rows[1].cell(1).content(), "e");
    }
}
