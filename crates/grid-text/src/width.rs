//! Grapheme cluster display width engine.
//!
//! A single authoritative function `egc_width` returns the terminal column
//! width of one grapheme cluster (EGC). The baseline comes from the
//! `unicode-width` crate; a small classifier corrects the composite
//! sequences the baseline mis-measures (ZWJ emoji, regional-indicator
//! flags, keycap sequences, skin-tone modifiers, combining clusters), and
//! a short static override table has final say for sequences whose
//! structure alone is insufficient.
//!
//! Width precedence order:
//! 1. Static override table (exact sequence match).
//! 2. Classifier (semantic kind -> width mapping).
//! 3. Conservative widen fallback (pictographic signal but width == 1).
//!
//! Invariants:
//! - No caller bypasses `egc_width` for display width decisions; column
//!   budgets, cell padding, and border widths all flow through here.
//! - The classifier favors over-estimation: an extra blank column is
//!   harmless, under-estimation causes alignment drift across a row.
//! - The override table is sorted and unique (binary searched; checked by
//!   the consistency test below).

/// Semantic classification of a single grapheme cluster.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EgcKind {
    Ascii,
    Narrow,
    Wide,
    EmojiSimple,     // single pictographic, optional VS16, no modifiers
    EmojiModifier,   // pictographic + skin tone modifier
    EmojiKeycap,     // base + optional VS16 + U+20E3
    EmojiFlag,       // regional indicator pair
    EmojiZwj,        // ZWJ sequence joining >= 2 pictographic bases
    Combining(bool), // base + combining mark(s); true => wide/emoji base
}

const ZWJ: char = '\u{200D}';
const VS16: char = '\u{FE0F}';
const KEYCAP_COMBINING: char = '\u{20E3}';

// Sequences whose width must stay forced regardless of classification.
// Sorted by the sequence string for binary search.
const OVERRIDES: &[(&str, u16)] = &[
    ("\u{2049}\u{FE0F}", 2), // exclamation question mark, emoji presentation
    ("\u{2139}\u{FE0F}", 1), // information source renders narrow widely
    ("\u{2699}", 1),         // gear renders narrow in common terminals
    ("\u{2699}\u{FE0F}", 1), // gear + VS16, same treatment
];

fn is_regional_indicator(c: char) -> bool {
    ('\u{1F1E6}'..='\u{1F1FF}').contains(&c)
}

fn is_skin_tone_modifier(c: char) -> bool {
    ('\u{1F3FB}'..='\u{1F3FF}').contains(&c)
}

// Rough Extended Pictographic heuristic: primary emoji blocks plus the
// Misc Symbols / Dingbats ranges where legacy emoji live.
fn is_extended_pictographic(c: char) -> bool {
    ('\u{1F300}'..='\u{1FAFF}').contains(&c) || ('\u{2600}'..='\u{27BF}').contains(&c)
}

// Combining mark ranges commonly encountered (subset).
fn is_combining_mark(c: char) -> bool {
    ('\u{0300}'..='\u{036F}').contains(&c)
        || ('\u{1AB0}'..='\u{1AFF}').contains(&c)
        || ('\u{1DC0}'..='\u{1DFF}').contains(&c)
        || ('\u{20D0}'..='\u{20FF}').contains(&c)
        || ('\u{FE20}'..='\u{FE2F}').contains(&c)
}

fn override_width(egc: &str) -> Option<u16> {
    OVERRIDES
        .binary_search_by(|&(seq, _)| seq.cmp(egc))
        .ok()
        .map(|i| OVERRIDES[i].1)
}

fn classify(egc: &str) -> EgcKind {
    let mut chars = egc.chars();
    let first = match chars.next() {
        Some(c) => c,
        None => return EgcKind::Narrow,
    };
    let rest = chars.as_str();

    // Quick single-codepoint path.
    if rest.is_empty() {
        if first.is_ascii() {
            return EgcKind::Ascii;
        }
        if is_extended_pictographic(first) {
            return EgcKind::EmojiSimple;
        }
        let uwidth = unicode_width::UnicodeWidthChar::width(first).unwrap_or(1);
        if uwidth == 2 {
            return EgcKind::Wide;
        }
        return EgcKind::Narrow;
    }

    let total = egc.chars().count();
    let mut count_ep = 0usize;
    let mut count_ri = 0usize;
    let mut has_zwj = false;
    let mut has_skin = false;
    let mut has_combining = false;
    let mut keycap_base = false;
    let mut ends_with_keycap = false;
    let mut any_wide = false;
    let mut base_wide_or_emoji = false;
    let mut saw_base = false;

    for (i, c) in egc.chars().enumerate() {
        if is_extended_pictographic(c) {
            count_ep += 1;
        }
        if is_regional_indicator(c) {
            count_ri += 1;
        }
        has_zwj |= c == ZWJ;
        has_skin |= is_skin_tone_modifier(c);
        has_combining |= is_combining_mark(c);
        if c == KEYCAP_COMBINING && i == total - 1 {
            ends_with_keycap = true;
        }
        if i == 0 && (c.is_ascii_digit() || c == '#' || c == '*') {
            keycap_base = true;
        }
        if unicode_width::UnicodeWidthChar::width(c).unwrap_or(1) == 2 {
            any_wide = true;
        }
        if !saw_base && !is_combining_mark(c) && c != VS16 {
            saw_base = true;
            if is_extended_pictographic(c)
                || unicode_width::UnicodeWidthChar::width(c).unwrap_or(1) == 2
            {
                base_wide_or_emoji = true;
            }
        }
    }

    if ends_with_keycap && keycap_base {
        return EgcKind::EmojiKeycap;
    }
    if count_ri == 2 && total == 2 {
        return EgcKind::EmojiFlag;
    }
    if has_zwj && count_ep >= 2 {
        return EgcKind::EmojiZwj;
    }
    if count_ep >= 1 && has_skin {
        return EgcKind::EmojiModifier;
    }
    if count_ep == 1 && !has_zwj {
        return EgcKind::EmojiSimple;
    }
    if has_combining {
        return EgcKind::Combining(base_wide_or_emoji);
    }
    if any_wide {
        return EgcKind::Wide;
    }
    if count_ep > 0 {
        return EgcKind::EmojiSimple;
    }
    EgcKind::Narrow
}

#[inline]
fn width_for_kind(kind: EgcKind) -> u16 {
    match kind {
        EgcKind::Ascii | EgcKind::Narrow => 1,
        EgcKind::Wide
        | EgcKind::EmojiSimple
        | EgcKind::EmojiModifier
        | EgcKind::EmojiKeycap
        | EgcKind::EmojiFlag
        | EgcKind::EmojiZwj => 2,
        EgcKind::Combining(base_wide) => {
            if base_wide {
                2
            } else {
                1
            }
        }
    }
}

/// Return the display column width for a single grapheme cluster.
///
/// Precondition: `egc` is a single grapheme cluster boundary slice. Callers
/// already perform segmentation; the slice is not re-validated here to
/// avoid double scanning. Empty input returns 0.
#[inline]
pub fn egc_width(egc: &str) -> u16 {
    if egc.is_empty() {
        return 0;
    }

    if let Some(w) = override_width(egc) {
        return w;
    }

    let mut width = width_for_kind(classify(egc));

    // Conservative guard: a width-1 verdict with a pictographic or regional
    // indicator signal still widens to 2 to avoid drift.
    if width == 1
        && egc
            .chars()
            .any(|c| is_extended_pictographic(c) || is_regional_indicator(c))
    {
        width = 2;
    }
    width
}
