//! Data model for fixed-width table rendering: cells, rows, row
//! construction, and border vocabulary.
//!
//! Design invariants:
//! * Cells and rows are owned values; splitting and padding produce or
//!   mutate exclusively-owned data, never shared references.
//! * A cell's recorded width tracks its content through every mutation.
//! * Row semantics (kind, border membership) are derived from cell kinds
//!   on demand, so border weaving passes can reshape rows freely.

pub mod border;
pub mod cell;
pub mod factory;
pub mod row;

pub use border::{BorderGlyphs, BorderSides};
pub use cell::{Cell, CellKind, Placement};
pub use factory::EdgeGlyphs;
pub use row::{Row, RowBorders, RowKind};
