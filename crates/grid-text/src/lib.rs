//! Display measurement primitives for fixed-width grid rendering.
//!
//! Contract:
//! - Input: raw cell content as `&str`; content is never normalized or
//!   otherwise rewritten (callers are promised their bytes back).
//! - Output: display widths in terminal columns, and byte-safe slicing at
//!   display-column boundaries.
//! - All width decisions flow through [`egc_width`]; no consumer crate
//!   calls `unicode-width` directly.

pub mod slice;
pub mod width;

pub use slice::{split_at_width, truncate_to_width};
pub use width::egc_width;

use unicode_segmentation::UnicodeSegmentation;

/// Display width of a whole string: the sum of its grapheme cluster widths.
pub fn display_width(s: &str) -> usize {
    s.graphemes(true).map(|g| egc_width(g) as usize).sum()
}
