//! Row: an ordered, exclusively-owned sequence of cells.
//!
//! A row's semantic type is derived, never stored: the defining cell is
//! the first cell, or the second when a `Left` border cell has already
//! been prepended. Deriving keeps the type correct across the border
//! weaving passes, which reshape rows in place.

use crate::cell::{Cell, CellKind};
use bitflags::bitflags;

bitflags! {
    /// Set of distinct border kinds present among a row's cells.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct RowBorders: u8 {
        const TOP = 1 << 0;
        const BOTTOM = 1 << 1;
        const LEFT = 1 << 2;
        const RIGHT = 1 << 3;
        const BETWEEN_COLUMNS = 1 << 4;
        const BETWEEN_ROWS = 1 << 5;
    }
}

/// Derived row category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowKind {
    Primary,
    Header,
    Overflow,
    UpperBorder,
    LowerBorder,
    InnerBorder,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    cells: Vec<Cell>,
}

impl Row {
    pub fn new(cells: Vec<Cell>) -> Self {
        Self { cells }
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn cell(&self, index: usize) -> &Cell {
        &self.cells[index]
    }

    pub fn cell_mut(&mut self, index: usize) -> &mut Cell {
        &mut self.cells[index]
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn cells_mut(&mut self) -> impl Iterator<Item = &mut Cell> {
        self.cells.iter_mut()
    }

    pub fn push(&mut self, cell: Cell) {
        self.cells.push(cell);
    }

    pub fn insert(&mut self, index: usize, cell: Cell) {
        self.cells.insert(index, cell);
    }

    /// Swap the cell at `index` for `cell`, returning the old one.
    pub fn replace(&mut self, index: usize, cell: Cell) -> Cell {
        std::mem::replace(&mut self.cells[index], cell)
    }

    /// Remove the cell range `start..end` and insert `replacement` in its
    /// place, returning the removed cells.
    pub fn splice(
        &mut self,
        start: usize,
        end: usize,
        replacement: impl IntoIterator<Item = Cell>,
    ) -> Vec<Cell> {
        self.cells.splice(start..end, replacement).collect()
    }

    pub fn into_cells(self) -> Vec<Cell> {
        self.cells
    }

    /// The cell that defines this row's semantic type: the second cell
    /// when a left border has been prepended, the first otherwise.
    fn defining_cell(&self) -> &Cell {
        let first = match self.cells.first() {
            Some(c) => c,
            None => panic!("row has no cells"),
        };
        if first.kind() == CellKind::Left {
            match self.cells.get(1) {
                Some(c) => c,
                None => panic!("row holds only a left border cell"),
            }
        } else {
            first
        }
    }

    /// Derived row category, per the defining-cell rule.
    pub fn kind(&self) -> RowKind {
        match self.defining_cell().kind() {
            CellKind::Top => RowKind::UpperBorder,
            CellKind::Bottom => RowKind::LowerBorder,
            CellKind::BetweenRows => RowKind::InnerBorder,
            CellKind::Header => RowKind::Header,
            CellKind::PrimaryOverflow | CellKind::HeaderOverflow => RowKind::Overflow,
            CellKind::Primary => RowKind::Primary,
            kind @ (CellKind::Left | CellKind::Right | CellKind::BetweenColumns) => {
                panic!("vertical border cell {kind:?} cannot define a row type")
            }
        }
    }

    /// Distinct border kinds present among this row's cells.
    pub fn borders(&self) -> RowBorders {
        let mut set = RowBorders::empty();
        for cell in &self.cells {
            match cell.kind() {
                CellKind::Top => set |= RowBorders::TOP,
                CellKind::Bottom => set |= RowBorders::BOTTOM,
                CellKind::Left => set |= RowBorders::LEFT,
                CellKind::Right => set |= RowBorders::RIGHT,
                CellKind::BetweenColumns => set |= RowBorders::BETWEEN_COLUMNS,
                CellKind::BetweenRows => set |= RowBorders::BETWEEN_ROWS,
                CellKind::Primary
                | CellKind::PrimaryOverflow
                | CellKind::Header
                | CellKind::HeaderOverflow => {}
            }
        }
        set
    }
}
