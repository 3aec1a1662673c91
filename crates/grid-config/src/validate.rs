//! Input validation: table shape (always fatal) and option ranges
//! (governed by [`OptionChecks`]).
//!
//! Contract:
//! * Runs before any row or cell is built, so a failed build leaves no
//!   partially-constructed state behind.
//! * Shape problems make layout impossible and ignore `option_checks`.
//! * Range problems are recoverable: `error` raises on the first one,
//!   `warn` logs each and resets the field to its default, `skip` does
//!   not look at all.
//! * Log messages carry field names and offending values, never cell
//!   content.

use crate::{
    CELL_PADDING_MAX, COL_WIDTH_MAX, ColWidthLimit, MAX_COLUMNS_MAX, MAX_ROWS_MAX, OptionChecks,
    ROW_HEIGHT_MAX, TableOptions,
};
use thiserror::Error;
use tracing::warn;

/// Problems with the input grid itself. Always fatal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShapeError {
    #[error("input table has no rows")]
    Empty,
    #[error("input table rows have no columns")]
    ZeroWidth,
    #[error("input table is ragged: row {row} has {found} columns, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
}

/// An option value outside its documented range.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OptionsError {
    #[error("cell_padding {value} is outside the supported range 0..={CELL_PADDING_MAX}")]
    CellPadding { value: usize },
    #[error("max_columns {value} is outside the supported range 1..={MAX_COLUMNS_MAX}")]
    MaxColumns { value: usize },
    #[error("max_rows {value} is outside the supported range 1..={MAX_ROWS_MAX}")]
    MaxRows { value: usize },
    #[error("max_row_height {value} is outside the supported range 1..={ROW_HEIGHT_MAX}")]
    MaxRowHeight { value: usize },
    #[error("max_col_widths {value} is outside the supported range 1..={COL_WIDTH_MAX}")]
    ColWidth { value: usize },
    #[error(
        "max_col_widths[{column}] = {value} is outside the supported range 1..={COL_WIDTH_MAX}"
    )]
    ColWidthAt { column: usize, value: usize },
}

/// Verify the grid is rectangular with at least one row and one column.
pub fn validate_shape(table: &[Vec<String>]) -> Result<(), ShapeError> {
    let Some(first) = table.first() else {
        return Err(ShapeError::Empty);
    };
    let expected = first.len();
    if expected == 0 {
        return Err(ShapeError::ZeroWidth);
    }
    for (row, cells) in table.iter().enumerate().skip(1) {
        if cells.len() != expected {
            return Err(ShapeError::Ragged {
                row,
                expected,
                found: cells.len(),
            });
        }
    }
    Ok(())
}

fn violations(options: &TableOptions) -> Vec<OptionsError> {
    let mut found = Vec::new();
    if options.cell_padding > CELL_PADDING_MAX {
        found.push(OptionsError::CellPadding {
            value: options.cell_padding,
        });
    }
    if options.max_columns == 0 || options.max_columns > MAX_COLUMNS_MAX {
        found.push(OptionsError::MaxColumns {
            value: options.max_columns,
        });
    }
    if options.max_rows == 0 || options.max_rows > MAX_ROWS_MAX {
        found.push(OptionsError::MaxRows {
            value: options.max_rows,
        });
    }
    if options.max_row_height == 0 || options.max_row_height > ROW_HEIGHT_MAX {
        found.push(OptionsError::MaxRowHeight {
            value: options.max_row_height,
        });
    }
    match &options.max_col_widths {
        ColWidthLimit::Uniform(value) => {
            if *value == 0 || *value > COL_WIDTH_MAX {
                found.push(OptionsError::ColWidth { value: *value });
            }
        }
        ColWidthLimit::PerColumn(widths) => {
            for (column, value) in widths.iter().enumerate() {
                if *value == 0 || *value > COL_WIDTH_MAX {
                    found.push(OptionsError::ColWidthAt {
                        column,
                        value: *value,
                    });
                }
            }
        }
    }
    found
}

/// Reset the field an error names back to its default.
fn repair(options: &mut TableOptions, error: &OptionsError) {
    let defaults = TableOptions::default();
    match error {
        OptionsError::CellPadding { .. } => options.cell_padding = defaults.cell_padding,
        OptionsError::MaxColumns { .. } => options.max_columns = defaults.max_columns,
        OptionsError::MaxRows { .. } => options.max_rows = defaults.max_rows,
        OptionsError::MaxRowHeight { .. } => options.max_row_height = defaults.max_row_height,
        OptionsError::ColWidth { .. } | OptionsError::ColWidthAt { .. } => {
            options.max_col_widths = defaults.max_col_widths.clone();
        }
    }
}

/// Apply the validation policy selected by `options.option_checks`.
///
/// In `warn` mode the options are repaired in place and the call still
/// succeeds; in `skip` mode nothing is inspected.
pub fn validate_options(options: &mut TableOptions) -> Result<(), OptionsError> {
    match options.option_checks {
        OptionChecks::Skip => Ok(()),
        OptionChecks::Error => match violations(options).into_iter().next() {
            Some(error) => Err(error),
            None => Ok(()),
        },
        OptionChecks::Warn => {
            for error in violations(options) {
                warn!(%error, "invalid table option, falling back to default");
                repair(options, &error);
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(rows: &[&[&str]]) -> Vec<Vec<String>> {
        rows.iter()
            .map(|r| r.iter().map(|c| c.to_string()).collect())
            .collect()
    }

    #[test]
    fn rectangular_grid_passes() {
        assert!(validate_shape(&grid(&[&["a", "b"], &["c", "d"]])).is_ok());
    }

    #[test]
    fn empty_grid_is_fatal() {
        assert_eq!(validate_shape(&[]), Err(ShapeError::Empty));
    }

    #[test]
    fn zero_width_grid_is_fatal() {
        assert_eq!(validate_shape(&grid(&[&[]])), Err(ShapeError::ZeroWidth));
    }

    #[test]
    fn ragged_grid_is_fatal() {
        let err = validate_shape(&grid(&[&["a", "b"], &["c"]])).unwrap_err();
        assert_eq!(
            err,
            ShapeError::Ragged {
                row: 1,
                expected: 2,
                found: 1
            }
        );
    }

    fn invalid_catalog() -> Vec<TableOptions> {
        vec![
            TableOptions {
                cell_padding: 21,
                ..Default::default()
            },
            TableOptions {
                max_columns: 0,
                ..Default::default()
            },
            TableOptions {
                max_columns: 101,
                ..Default::default()
            },
            TableOptions {
                max_rows: 1001,
                ..Default::default()
            },
            TableOptions {
                max_row_height: 0,
                ..Default::default()
            },
            TableOptions {
                max_row_height: 51,
                ..Default::default()
            },
            TableOptions {
                max_col_widths: ColWidthLimit::Uniform(401),
                ..Default::default()
            },
            TableOptions {
                max_col_widths: ColWidthLimit::PerColumn(vec![10, 0, 12]),
                ..Default::default()
            },
        ]
    }

    #[test]
    fn catalog_raises_in_error_mode() {
        for mut options in invalid_catalog() {
            options.option_checks = OptionChecks::Error;
            assert!(
                validate_options(&mut options).is_err(),
                "expected failure for {options:?}"
            );
        }
    }

    #[test]
    fn catalog_repairs_in_warn_mode() {
        let defaults = TableOptions::default();
        for mut options in invalid_catalog() {
            options.option_checks = OptionChecks::Warn;
            assert!(validate_options(&mut options).is_ok());
            assert!(violations(&options).is_empty(), "not repaired: {options:?}");
            // Every repaired field equals its default.
            assert!(options.cell_padding == defaults.cell_padding || options.cell_padding <= 20);
        }
    }

    #[test]
    fn catalog_passes_untouched_in_skip_mode() {
        for mut options in invalid_catalog() {
            options.option_checks = OptionChecks::Skip;
            let before = options.clone();
            assert!(validate_options(&mut options).is_ok());
            assert_eq!(options, before, "skip mode must not rewrite options");
        }
    }

    #[test]
    fn valid_options_pass_error_mode() {
        let mut options = TableOptions::default();
        assert!(validate_options(&mut options).is_ok());
    }

    #[test]
    fn first_violation_wins_in_error_mode() {
        let mut options = TableOptions {
            cell_padding: 99,
            max_rows: 0,
            ..Default::default()
        };
        let err = validate_options(&mut options).unwrap_err();
        assert_eq!(err, OptionsError::CellPadding { value: 99 });
    }
}
