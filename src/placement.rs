//! Ship placement validation: bounds, overlap, and the no-touch rule.

use serde::{Deserialize, Serialize};

use crate::board::{in_bounds, Board};
use crate::config::{BOARD_SIZE, FLEET};
use crate::error::GameError;

/// Orientation of a ship on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// One ship of a fleet submission.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    pub row: usize,
    pub col: usize,
    pub length: usize,
    pub orientation: Orientation,
}

/// Check whether a ship of `length` can be placed at (row, col) with the
/// given orientation: the span must stay on the board, and no cell of the
/// span or its Chebyshev-distance-1 surroundings may already be occupied.
/// Ships may never touch, not even diagonally.
pub fn can_place(
    board: &Board,
    row: usize,
    col: usize,
    length: usize,
    orientation: Orientation,
) -> bool {
    if length == 0 || !in_bounds(row, col) {
        return false;
    }
    let (end_row, end_col) = match orientation {
        Orientation::Horizontal => (row, col + length - 1),
        Orientation::Vertical => (row + length - 1, col),
    };
    if !in_bounds(end_row, end_col) {
        return false;
    }
    // Scan the span's bounding box expanded by one cell, clamped to the
    // board. Any occupied cell in that window is either an overlap or a
    // no-touch violation.
    let r0 = row.saturating_sub(1);
    let c0 = col.saturating_sub(1);
    let r1 = (end_row + 1).min(BOARD_SIZE - 1);
    let c1 = (end_col + 1).min(BOARD_SIZE - 1);
    for rr in r0..=r1 {
        for cc in c0..=c1 {
            if board.is_occupied(rr, cc) {
                return false;
            }
        }
    }
    true
}

/// Mark the ship's span as occupied. Callable only after [`can_place`]
/// returned `true` for the same arguments; there is no re-validation here.
pub fn place_ship(board: &mut Board, row: usize, col: usize, length: usize, orientation: Orientation) {
    for i in 0..length {
        match orientation {
            Orientation::Horizontal => board.set_ship(row, col + i),
            Orientation::Vertical => board.set_ship(row + i, col),
        }
    }
}

/// Validate a complete fleet submission and build the resulting board.
///
/// The multiset of submitted ship lengths must equal the required fleet
/// exactly; then each placement is validated and applied in order against
/// the grid accumulated so far, so a later ship is rejected for touching
/// an earlier one in the same batch. Any failure rejects the whole
/// submission; no partial board is ever returned.
pub fn apply_fleet(placements: &[Placement]) -> Result<Board, GameError> {
    let mut need: Vec<(usize, usize)> = FLEET.to_vec();
    for p in placements {
        match need.iter_mut().find(|(len, _)| *len == p.length) {
            Some((_, count)) if *count > 0 => *count -= 1,
            _ => return Err(GameError::InvalidFleetComposition),
        }
    }
    if need.iter().any(|&(_, count)| count != 0) {
        return Err(GameError::InvalidFleetComposition);
    }

    let mut board = Board::new();
    for p in placements {
        if !can_place(&board, p.row, p.col, p.length, p.orientation) {
            return Err(GameError::InvalidPlacement {
                row: p.row,
                col: p.col,
                length: p.length,
            });
        }
        place_ship(&mut board, p.row, p.col, p.length, p.orientation);
    }
    Ok(board)
}
