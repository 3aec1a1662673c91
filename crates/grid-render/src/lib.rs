//! Table layout engine: turns a validated rectangular string grid into an
//! aligned, optionally bordered and styled, fixed-width text grid.
//!
//! The pipeline is a fixed sequence of phases over an owned working set of
//! rows (validate → limit → build → widths → split/overflow → pad →
//! borders → flatten); see [`engine`]. Styling ([`style`]) and the
//! finished read-only grid ([`facade`]) sit at the edges.

pub mod engine;
pub mod facade;
pub mod style;

pub use engine::build;
pub use facade::TableHandle;

use grid_config::{OptionsError, ShapeError};
use thiserror::Error;

/// Everything `build` can fail with. Shape problems ignore
/// `option_checks`; option problems honor it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    #[error(transparent)]
    Shape(#[from] ShapeError),
    #[error(transparent)]
    Options(#[from] OptionsError),
}
