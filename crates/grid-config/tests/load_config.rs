//! Config file loading behavior: present, absent, and malformed files.

use grid_config::{BorderMode, ColWidthLimit, TableOptions, load_from};
use std::fs;
use tempfile::tempdir;

fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

#[test]
fn loads_table_section() {
    init_tracing();
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("textgrid.toml");
    fs::write(
        &path,
        r#"
[table]
cell_padding = 3
max_row_height = 4
max_col_widths = 24
borders = false
"#,
    )
    .expect("write config");

    let options = load_from(Some(path)).expect("load");
    assert_eq!(options.cell_padding, 3);
    assert_eq!(options.max_row_height, 4);
    assert_eq!(options.max_col_widths, ColWidthLimit::Uniform(24));
    assert_eq!(options.borders, BorderMode::Enabled(false));
}

#[test]
fn missing_file_yields_defaults() {
    init_tracing();
    let dir = tempdir().expect("tempdir");
    let options = load_from(Some(dir.path().join("absent.toml"))).expect("load");
    assert_eq!(options, TableOptions::default());
}

#[test]
fn malformed_file_yields_defaults() {
    init_tracing();
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("textgrid.toml");
    fs::write(&path, "[table\ncell_padding = ").expect("write config");
    let options = load_from(Some(path)).expect("load");
    assert_eq!(options, TableOptions::default());
}

#[test]
fn unknown_fields_are_tolerated() {
    init_tracing();
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("textgrid.toml");
    fs::write(
        &path,
        r#"
[table]
cell_padding = 2
future_option = "ignored"
"#,
    )
    .expect("write config");
    let options = load_from(Some(path)).expect("load");
    assert_eq!(options.cell_padding, 2);
}
