//! Display-column slicing over grapheme clusters.
//!
//! Contract:
//! - Positions are display columns, not bytes or chars.
//! - A cut never splits a grapheme cluster: the boundary is the last
//!   cluster edge whose cumulative width fits the budget. A 2-wide glyph
//!   straddling the cut therefore moves wholly past it, and a prefix may
//!   measure one column short of the requested budget.
//! - Concatenating the two halves of `split_at_width` always reproduces
//!   the input byte-for-byte.

use crate::width::egc_width;
use unicode_segmentation::UnicodeSegmentation;

/// Byte offset of the widest prefix of `s` measuring at most `budget`
/// display columns.
fn boundary_at_width(s: &str, budget: usize) -> usize {
    let mut used = 0usize;
    let mut boundary = 0usize;
    for (offset, cluster) in s.grapheme_indices(true) {
        let w = egc_width(cluster) as usize;
        if used + w > budget {
            break;
        }
        used += w;
        boundary = offset + cluster.len();
    }
    boundary
}

/// Split `s` at display column `n`, returning `(prefix, suffix)`.
pub fn split_at_width(s: &str, n: usize) -> (String, String) {
    let at = boundary_at_width(s, n);
    (s[..at].to_string(), s[at..].to_string())
}

/// The widest prefix of `s` measuring at most `n` display columns.
pub fn truncate_to_width(s: &str, n: usize) -> String {
    let at = boundary_at_width(s, n);
    s[..at].to_string()
}
