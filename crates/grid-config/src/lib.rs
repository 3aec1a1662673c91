//! Table option schema, defaults, merge rules, and config file loading.
//!
//! Every option is an explicit struct field with a documented default; the
//! loosely-typed deep-merge of dynamic option bags becomes three concrete
//! rules applied per field:
//! * scalars overwrite their default;
//! * `max_col_widths` broadcasts a scalar across all columns, or
//!   right-pads a short per-column sequence with the default width;
//! * `borders` / `styles` accept a bool shorthand or an object that
//!   patches the default set field-wise.
//!
//! All option types derive `Deserialize`, so an application can keep its
//! table appearance in `textgrid.toml` next to its other configuration.
//! Unknown fields are ignored (TOML deserialization tolerance) to allow
//! forward evolution without immediate warnings.
//!
//! Validation lives in [`validate`]; the split keeps schema and policy
//! apart the same way shape checks and range checks fail differently.

pub mod validate;

pub use validate::{OptionsError, ShapeError, validate_options, validate_shape};

use anyhow::Result;
use grid_model::{BorderGlyphs, BorderSides};
use serde::Deserialize;
use std::{fs, path::PathBuf};
use tracing::{debug, warn};

/// How invalid option values are reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OptionChecks {
    /// Raise on the first invalid option encountered.
    #[default]
    Error,
    /// Log each invalid option and fall back to its default.
    Warn,
    /// No validation at all; caller takes responsibility downstream.
    Skip,
}

/// Content width cap, excluding padding: one value for every column, or a
/// per-column sequence.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum ColWidthLimit {
    Uniform(usize),
    PerColumn(Vec<usize>),
}

impl Default for ColWidthLimit {
    fn default() -> Self {
        Self::Uniform(DEFAULT_MAX_COL_WIDTH)
    }
}

impl ColWidthLimit {
    /// Concrete cap per column: scalar broadcast, short sequences
    /// right-padded with the default width, excess entries ignored.
    pub fn resolve(&self, columns: usize) -> Vec<usize> {
        match self {
            Self::Uniform(w) => vec![*w; columns],
            Self::PerColumn(widths) => {
                let mut resolved: Vec<usize> = widths.iter().copied().take(columns).collect();
                resolved.resize(columns, DEFAULT_MAX_COL_WIDTH);
                resolved
            }
        }
    }
}

// Documented option ranges. Validation speaks in these; the engine
// assumes them.
pub const CELL_PADDING_MAX: usize = 20;
pub const MAX_COLUMNS_MAX: usize = 100;
pub const MAX_ROWS_MAX: usize = 1000;
pub const COL_WIDTH_MAX: usize = 400;
pub const ROW_HEIGHT_MAX: usize = 50;
pub const DEFAULT_MAX_COL_WIDTH: usize = COL_WIDTH_MAX;

/// Field-wise patch over the default (fully enabled) border side set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct SideOverrides {
    pub top: Option<bool>,
    pub bottom: Option<bool>,
    pub left: Option<bool>,
    pub right: Option<bool>,
    pub between_columns: Option<bool>,
    pub between_rows: Option<bool>,
}

/// Field-wise patch over the default glyph set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct GlyphOverrides {
    pub horizontal_line: Option<char>,
    pub vertical_line: Option<char>,
    pub top_left_corner: Option<char>,
    pub top_right_corner: Option<char>,
    pub bottom_left_corner: Option<char>,
    pub bottom_right_corner: Option<char>,
    pub top_separator: Option<char>,
    pub bottom_separator: Option<char>,
    pub middle_separator: Option<char>,
    pub left_separator: Option<char>,
    pub right_separator: Option<char>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct BorderOverrides {
    #[serde(default)]
    pub sides: SideOverrides,
    #[serde(default)]
    pub glyphs: GlyphOverrides,
}

/// Resolved border configuration consumed by the layout engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BorderSpec {
    pub sides: BorderSides,
    pub glyphs: BorderGlyphs,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum BorderMode {
    /// `true`: the full default border set. `false`: no borders.
    Enabled(bool),
    /// Patch the default set per field.
    Custom(BorderOverrides),
}

impl Default for BorderMode {
    fn default() -> Self {
        Self::Enabled(true)
    }
}

impl BorderMode {
    pub fn resolve(&self) -> BorderSpec {
        match self {
            Self::Enabled(false) => BorderSpec {
                sides: BorderSides::empty(),
                glyphs: BorderGlyphs::default(),
            },
            Self::Enabled(true) => BorderSpec {
                sides: BorderSides::all(),
                glyphs: BorderGlyphs::default(),
            },
            Self::Custom(overrides) => overrides.resolve(),
        }
    }
}

impl BorderOverrides {
    fn resolve(&self) -> BorderSpec {
        let mut sides = BorderSides::all();
        let mut apply = |flag: BorderSides, value: Option<bool>| {
            if let Some(on) = value {
                sides.set(flag, on);
            }
        };
        apply(BorderSides::TOP, self.sides.top);
        apply(BorderSides::BOTTOM, self.sides.bottom);
        apply(BorderSides::LEFT, self.sides.left);
        apply(BorderSides::RIGHT, self.sides.right);
        apply(BorderSides::BETWEEN_COLUMNS, self.sides.between_columns);
        apply(BorderSides::BETWEEN_ROWS, self.sides.between_rows);

        let d = BorderGlyphs::default();
        let g = &self.glyphs;
        let glyphs = BorderGlyphs {
            horizontal_line: g.horizontal_line.unwrap_or(d.horizontal_line),
            vertical_line: g.vertical_line.unwrap_or(d.vertical_line),
            top_left_corner: g.top_left_corner.unwrap_or(d.top_left_corner),
            top_right_corner: g.top_right_corner.unwrap_or(d.top_right_corner),
            bottom_left_corner: g.bottom_left_corner.unwrap_or(d.bottom_left_corner),
            bottom_right_corner: g.bottom_right_corner.unwrap_or(d.bottom_right_corner),
            top_separator: g.top_separator.unwrap_or(d.top_separator),
            bottom_separator: g.bottom_separator.unwrap_or(d.bottom_separator),
            middle_separator: g.middle_separator.unwrap_or(d.middle_separator),
            left_separator: g.left_separator.unwrap_or(d.left_separator),
            right_separator: g.right_separator.unwrap_or(d.right_separator),
        };
        BorderSpec { sides, glyphs }
    }
}

/// Typed terminal palette entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StyleColor {
    Black,
    DarkRed,
    DarkGreen,
    DarkYellow,
    DarkBlue,
    DarkMagenta,
    DarkCyan,
    Grey,
    DarkGrey,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    Rgb { r: u8, g: u8, b: u8 },
    Ansi(u8),
}

/// One cell-level style: colors plus attribute switches. An empty spec
/// decorates to the input unchanged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct StyleSpec {
    #[serde(default)]
    pub fg: Option<StyleColor>,
    #[serde(default)]
    pub bg: Option<StyleColor>,
    #[serde(default)]
    pub bold: bool,
    #[serde(default)]
    pub dim: bool,
    #[serde(default)]
    pub italic: bool,
    #[serde(default)]
    pub underline: bool,
    #[serde(default)]
    pub reverse: bool,
}

impl StyleSpec {
    pub fn is_plain(&self) -> bool {
        self.fg.is_none()
            && self.bg.is_none()
            && !self.bold
            && !self.dim
            && !self.italic
            && !self.underline
            && !self.reverse
    }
}

/// A style pinned to one logical cell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct TargetCellStyle {
    pub row: usize,
    pub col: usize,
    #[serde(default)]
    pub style: StyleSpec,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct StyleOptions {
    /// Applied to every border cell.
    #[serde(default)]
    pub border_style: Option<StyleSpec>,
    /// Cycled over logical rows (overflow continuations inherit their
    /// parent's stripe).
    #[serde(default)]
    pub row_styles: Vec<StyleSpec>,
    /// Logical row/column targets; these win over row stripes.
    #[serde(default)]
    pub target_cell_styles: Vec<TargetCellStyle>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum StyleMode {
    Enabled(bool),
    Custom(StyleOptions),
}

impl Default for StyleMode {
    fn default() -> Self {
        Self::Enabled(false)
    }
}

impl StyleMode {
    /// `None` when styling is not requested at all.
    pub fn resolve(&self) -> Option<StyleOptions> {
        match self {
            Self::Enabled(false) => None,
            Self::Enabled(true) => Some(StyleOptions::default()),
            Self::Custom(options) => Some(options.clone()),
        }
    }
}

/// Everything the layout engine accepts. All fields optional in TOML and
/// independently validated.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TableOptions {
    #[serde(default)]
    pub option_checks: OptionChecks,
    /// Extra spaces appended per cell once content fits its column.
    #[serde(default = "TableOptions::default_cell_padding")]
    pub cell_padding: usize,
    /// Cap on rendered columns.
    #[serde(default = "TableOptions::default_max_columns")]
    pub max_columns: usize,
    /// Cap on logical rows, counted before overflow expansion.
    #[serde(default = "TableOptions::default_max_rows")]
    pub max_rows: usize,
    #[serde(default)]
    pub max_col_widths: ColWidthLimit,
    /// Physical rows one logical row may expand into when it overflows.
    #[serde(default = "TableOptions::default_max_row_height")]
    pub max_row_height: usize,
    /// Treat row 0 as a header (kind and styling, not layout width).
    #[serde(default)]
    pub header: bool,
    #[serde(default)]
    pub borders: BorderMode,
    #[serde(default)]
    pub styles: StyleMode,
}

impl TableOptions {
    const fn default_cell_padding() -> usize {
        1
    }
    const fn default_max_columns() -> usize {
        MAX_COLUMNS_MAX
    }
    const fn default_max_rows() -> usize {
        MAX_ROWS_MAX
    }
    const fn default_max_row_height() -> usize {
        1
    }
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            option_checks: OptionChecks::default(),
            cell_padding: Self::default_cell_padding(),
            max_columns: Self::default_max_columns(),
            max_rows: Self::default_max_rows(),
            max_col_widths: ColWidthLimit::default(),
            max_row_height: Self::default_max_row_height(),
            header: false,
            borders: BorderMode::default(),
            styles: StyleMode::default(),
        }
    }
}

/// On-disk configuration shape: a `[table]` section holding the options.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub table: Option<TableOptions>,
}

/// Best-effort config path following platform conventions: a working
/// directory `textgrid.toml` wins over the platform config dir.
pub fn discover() -> PathBuf {
    let local = PathBuf::from("textgrid.toml");
    if local.exists() {
        return local;
    }
    if let Some(dir) = dirs::config_dir() {
        return dir.join("textgrid").join("textgrid.toml");
    }
    PathBuf::from("textgrid.toml")
}

/// Load table options from `path` (or the discovered location). A missing
/// file yields the defaults; a malformed file is reported and otherwise
/// treated the same, so a bad user config never takes the caller down.
pub fn load_from(path: Option<PathBuf>) -> Result<TableOptions> {
    let path = path.unwrap_or_else(discover);
    let Ok(content) = fs::read_to_string(&path) else {
        debug!(path = %path.display(), "no config file, using defaults");
        return Ok(TableOptions::default());
    };
    match toml::from_str::<ConfigFile>(&content) {
        Ok(file) => {
            debug!(path = %path.display(), "loaded table options");
            Ok(file.table.unwrap_or_default())
        }
        Err(error) => {
            warn!(path = %path.display(), %error, "malformed config file, using defaults");
            Ok(TableOptions::default())
        }
    }
}
