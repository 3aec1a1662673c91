//! Read-only view over the finished string grid.
//!
//! Indexed access mirrors a plain 2D string sequence: border glyphs are
//! ordinary entries occupying their own rows and columns. Cells carry
//! their own padding and border glyphs, so joining a row needs no
//! separator. No mutation after construction.

use anyhow::Result;
use crossterm::{queue, style::Print};
use std::fmt;
use std::io::{self, Write, stdout};
use std::ops::Index;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableHandle {
    grid: Vec<Vec<String>>,
}

impl TableHandle {
    pub(crate) fn new(grid: Vec<Vec<String>>) -> Self {
        Self { grid }
    }

    /// Physical row count, border rows included.
    pub fn len(&self) -> usize {
        self.grid.len()
    }

    pub fn is_empty(&self) -> bool {
        self.grid.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &[String]> {
        self.grid.iter().map(Vec::as_slice)
    }

    /// Each physical row joined into one line (cells carry their own
    /// separation).
    pub fn to_lines(&self) -> Vec<String> {
        self.grid.iter().map(|row| row.concat()).collect()
    }

    /// Write every line, newline-terminated, to `out`.
    pub fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        for row in &self.grid {
            out.write_all(row.concat().as_bytes())?;
            out.write_all(b"\n")?;
        }
        Ok(())
    }

    /// Print the table to standard output.
    pub fn print(&self) -> Result<()> {
        let mut out = stdout();
        for row in &self.grid {
            queue!(out, Print(row.concat()), Print("\n"))?;
        }
        out.flush()?;
        Ok(())
    }
}

impl Index<usize> for TableHandle {
    type Output = [String];

    fn index(&self, index: usize) -> &[String] {
        &self.grid[index]
    }
}

impl fmt::Display for TableHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for row in &self.grid {
            if !first {
                writeln!(f)?;
            }
            first = false;
            for cell in row {
                f.write_str(cell)?;
            }
        }
        Ok(())
    }
}
