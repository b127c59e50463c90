//! A single 3×3 board and the line checks shared with the meta-board.

use serde::{Deserialize, Serialize};

use crate::core::{CellId, Mark, Player, GRID_SIZE};

/// The eight winning triples, in evaluation order: rows, columns, diagonals.
pub const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// Owner of the first complete line in `cells`, if any.
///
/// Used for both sub-boards (cells) and the meta-board (sub-board outcomes).
#[must_use]
pub fn line_winner(cells: &[Mark; GRID_SIZE]) -> Mark {
    for [a, b, c] in LINES {
        if let Some(player) = cells[a] {
            if cells[b] == Some(player) && cells[c] == Some(player) {
                return Some(player);
            }
        }
    }
    None
}

/// True iff no cell is empty.
#[must_use]
pub fn is_full(cells: &[Mark; GRID_SIZE]) -> bool {
    cells.iter().all(Option::is_some)
}

/// One of the nine 3×3 boards.
///
/// Cells only ever go from empty to marked; [`SubBoard::place`] refuses to
/// overwrite.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SubBoard {
    cells: [Mark; GRID_SIZE],
}

impl SubBoard {
    /// Create an empty board.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cells: [None; GRID_SIZE],
        }
    }

    /// Get the mark in a cell.
    #[must_use]
    pub fn get(&self, cell: CellId) -> Mark {
        self.cells[cell.index()]
    }

    /// Check if a cell is empty.
    #[must_use]
    pub fn is_empty_at(&self, cell: CellId) -> bool {
        self.get(cell).is_none()
    }

    /// Mark an empty cell.
    ///
    /// Returns false (and changes nothing) if the cell is already marked.
    pub fn place(&mut self, cell: CellId, player: Player) -> bool {
        let slot = &mut self.cells[cell.index()];
        if slot.is_some() {
            return false;
        }
        *slot = Some(player);
        true
    }

    /// All cells in row-major order.
    #[must_use]
    pub fn cells(&self) -> &[Mark; GRID_SIZE] {
        &self.cells
    }

    /// Owner of a complete line on this board.
    #[must_use]
    pub fn line_winner(&self) -> Mark {
        line_winner(&self.cells)
    }

    /// True iff every cell is marked.
    #[must_use]
    pub fn is_full(&self) -> bool {
        is_full(&self.cells)
    }

    /// Number of marked cells.
    #[must_use]
    pub fn marked_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Empty cells in index order.
    pub fn empty_cells(&self) -> impl Iterator<Item = CellId> + '_ {
        CellId::all().filter(move |&cell| self.is_empty_at(cell))
    }
}
