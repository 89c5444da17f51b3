//! Board primitives: ship occupancy grid and shot-tracking grid.

use serde::{Deserialize, Serialize};

use crate::config::BOARD_SIZE;

/// Returns `true` when (row, col) lies on the board.
pub fn in_bounds(row: usize, col: usize) -> bool {
    row < BOARD_SIZE && col < BOARD_SIZE
}

/// Occupancy state of one board cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    Ship,
}

/// Resolution state of one cell on a shot grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShotMark {
    Unknown,
    Miss,
    Hit,
}

/// An N×N ship occupancy grid, owned by exactly one game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// Create an empty board.
    pub fn new() -> Self {
        Board {
            cells: [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// Returns `true` when the cell holds a ship segment. Out-of-bounds
    /// coordinates read as unoccupied.
    pub fn is_occupied(&self, row: usize, col: usize) -> bool {
        in_bounds(row, col) && self.cells[row][col] == Cell::Ship
    }

    /// Mark a cell as holding a ship segment. Caller must ensure bounds.
    pub fn set_ship(&mut self, row: usize, col: usize) {
        self.cells[row][col] = Cell::Ship;
    }

    /// Number of occupied cells on the board.
    pub fn ship_cells(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|&&c| c == Cell::Ship)
            .count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// An N×N record of shots fired at one board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShotGrid {
    marks: [[ShotMark; BOARD_SIZE]; BOARD_SIZE],
}

impl ShotGrid {
    /// Create a grid with every cell unknown.
    pub fn new() -> Self {
        ShotGrid {
            marks: [[ShotMark::Unknown; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// Current mark at a cell. Caller must ensure bounds.
    pub fn mark(&self, row: usize, col: usize) -> ShotMark {
        self.marks[row][col]
    }

    /// Returns `true` once the cell has been shot at. Caller must ensure
    /// bounds.
    pub fn is_resolved(&self, row: usize, col: usize) -> bool {
        self.marks[row][col] != ShotMark::Unknown
    }

    /// Record the outcome of a shot. Caller must ensure bounds.
    pub fn set_mark(&mut self, row: usize, col: usize, mark: ShotMark) {
        self.marks[row][col] = mark;
    }

    /// Number of cells already resolved as hit or miss.
    pub fn resolved_cells(&self) -> usize {
        self.marks
            .iter()
            .flatten()
            .filter(|&&m| m != ShotMark::Unknown)
            .count()
    }
}

impl Default for ShotGrid {
    fn default() -> Self {
        Self::new()
    }
}
