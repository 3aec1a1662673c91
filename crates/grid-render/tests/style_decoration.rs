//! Styling through the build path: row stripes, targeted cells, border
//! style, and the width-neutrality of decoration.

use grid_config::{
    BorderMode, ColWidthLimit, StyleColor, StyleMode, StyleOptions, StyleSpec, TableOptions,
    TargetCellStyle,
};
use grid_render::build;
use grid_text::display_width;

fn grid(rows: &[&[&str]]) -> Vec<Vec<String>> {
    rows.iter()
        .map(|r| r.iter().map(|c| c.to_string()).collect())
        .collect()
}

/// Remove CSI sequences (`ESC [ ... final-byte`).
fn strip_ansi(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\u{1b}' && chars.peek() == Some(&'[') {
            chars.next();
            for d in chars.by_ref() {
                if ('\u{40}'..='\u{7e}').contains(&d) {
                    break;
                }
            }
            continue;
        }
        out.push(c);
    }
    out
}

fn red() -> StyleSpec {
    StyleSpec {
        fg: Some(StyleColor::Red),
        ..Default::default()
    }
}

fn bold() -> StyleSpec {
    StyleSpec {
        bold: true,
        ..Default::default()
    }
}

#[test]
fn row_stripes_cycle_over_logical_rows() {
    let input = grid(&[&["a"], &["b"], &["c"]]);
    let options = TableOptions {
        cell_padding: 0,
        borders: BorderMode::Enabled(false),
        styles: StyleMode::Custom(StyleOptions {
            row_styles: vec![red(), StyleSpec::default()],
            ..Default::default()
        }),
        ..Default::default()
    };
    let table = build(&input, &options).expect("build");
    // Stripe pattern: styled, plain, styled.
    assert!(table[0][0].starts_with('\u{1b}'));
    assert_eq!(table[1][0], "b");
    assert!(table[2][0].starts_with('\u{1b}'));
}

#[test]
fn overflow_continuations_inherit_their_parent_stripe() {
    let input = grid(&[&["aaaabbbb"], &["c"]]);
    let options = TableOptions {
        cell_padding: 0,
        max_col_widths: ColWidthLimit::Uniform(4),
        max_row_height: 2,
        borders: BorderMode::Enabled(false),
        styles: StyleMode::Custom(StyleOptions {
            row_styles: vec![red(), StyleSpec::default()],
            ..Default::default()
        }),
        ..Default::default()
    };
    let table = build(&input, &options).expect("build");
    assert_eq!(table.len(), 3);
    // Both physical rows of logical row 0 take stripe 0.
    assert!(table[0][0].starts_with('\u{1b}'));
    assert!(table[1][0].starts_with('\u{1b}'));
    // Logical row 1 takes the plain stripe.
    assert_eq!(table[2][0], "c   ");
}

#[test]
fn targeted_cell_style_wins_over_stripe() {
    let input = grid(&[&["a", "b"], &["c", "d"]]);
    let options = TableOptions {
        cell_padding: 0,
        borders: BorderMode::Enabled(false),
        styles: StyleMode::Custom(StyleOptions {
            row_styles: vec![red()],
            target_cell_styles: vec![TargetCellStyle {
                row: 1,
                col: 0,
                style: bold(),
            }],
            ..Default::default()
        }),
        ..Default::default()
    };
    let table = build(&input, &options).expect("build");
    // Bold is SGR 1; the stripe is a color code.
    assert!(table[1][0].contains("\u{1b}[1m"));
    assert!(!table[0][0].contains("\u{1b}[1m"));
}

#[test]
fn border_style_decorates_only_border_cells() {
    let input = grid(&[&["a"]]);
    let options = TableOptions {
        cell_padding: 0,
        styles: StyleMode::Custom(StyleOptions {
            border_style: Some(bold()),
            ..Default::default()
        }),
        ..Default::default()
    };
    let table = build(&input, &options).expect("build");
    // Corners and rules are styled, content is not.
    assert!(table[0][0].contains("\u{1b}[1m"));
    assert!(table[2][1].contains("\u{1b}[1m"));
    assert_eq!(table[1][1], "a");
}

#[test]
fn decoration_is_width_neutral() {
    let input = grid(&[&["alpha", "b"], &["c", "delta"]]);
    let styled_options = TableOptions {
        styles: StyleMode::Custom(StyleOptions {
            border_style: Some(red()),
            row_styles: vec![bold(), red()],
            ..Default::default()
        }),
        ..Default::default()
    };
    let plain_options = TableOptions::default();
    let styled = build(&input, &styled_options).expect("build styled");
    let plain = build(&input, &plain_options).expect("build plain");
    let stripped: Vec<String> = styled.to_lines().iter().map(|l| strip_ansi(l)).collect();
    assert_eq!(stripped, plain.to_lines());
    for line in &stripped {
        assert_eq!(display_width(line), display_width(&stripped[0]));
    }
}

#[test]
fn styles_disabled_is_the_default() {
    let input = grid(&[&["a"]]);
    let options = TableOptions {
        cell_padding: 0,
        borders: BorderMode::Enabled(false),
        ..Default::default()
    };
    let table = build(&input, &options).expect("build");
    assert_eq!(table[0][0], "a");
}

#[test]
fn styles_true_without_specs_changes_nothing() {
    let input = grid(&[&["a"]]);
    let options = TableOptions {
        cell_padding: 0,
        borders: BorderMode::Enabled(false),
        styles: StyleMode::Enabled(true),
        ..Default::default()
    };
    let table = build(&input, &options).expect("build");
    assert_eq!(table[0][0], "a");
}
