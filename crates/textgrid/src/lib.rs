//! Render tabular string data as an aligned, optionally bordered and
//! styled, fixed-width text grid for terminal output.
//!
//! The heavy lifting lives in the `grid-*` crates (measurement, data
//! model, options, layout engine); this crate is the thin public surface
//! that ties them together.
//!
//! ```
//! use textgrid::{TableOptions, build};
//!
//! let rows = vec![
//!     vec!["name".to_string(), "count".to_string()],
//!     vec!["alpha".to_string(), "9".to_string()],
//! ];
//! let table = build(&rows, &TableOptions::default()).expect("layout");
//! assert_eq!(table.len(), 5); // two content rows plus three border rows
//! println!("{table}");
//! ```

pub use grid_config::{
    BorderMode, BorderOverrides, ColWidthLimit, GlyphOverrides, OptionChecks, OptionsError,
    ShapeError, SideOverrides, StyleColor, StyleMode, StyleOptions, StyleSpec, TableOptions,
    TargetCellStyle, discover, load_from,
};
pub use grid_model::{BorderGlyphs, BorderSides};
pub use grid_render::{TableError, TableHandle};
pub use grid_text::display_width;

/// Validate `table` and `options`, lay the grid out, and return the
/// finished read-only handle.
pub fn build(table: &[Vec<String>], options: &TableOptions) -> Result<TableHandle, TableError> {
    grid_render::build(table, options)
}

/// Convenience: build and join into one printable string.
pub fn render(table: &[Vec<String>], options: &TableOptions) -> Result<String, TableError> {
    Ok(build(table, options)?.to_string())
}
