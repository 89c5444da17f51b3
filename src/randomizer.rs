//! Random fleet generation for the computer's board.

use rand::Rng;

use crate::config::{fleet_lengths, BOARD_SIZE, MAX_PLACEMENT_ATTEMPTS};
use crate::board::Board;
use crate::error::GameError;
use crate::placement::{can_place, place_ship, Orientation, Placement};

/// Generate a complete valid fleet satisfying the configured ship set.
///
/// Ships are placed longest first, which yields denser, more human-looking
/// layouts. Each ship draws a uniform orientation and origin and retests
/// with `can_place` until it fits; the attempt counter turns a pathological
/// board/fleet combination into a typed error instead of a hung loop.
pub fn random_fleet<R: Rng>(rng: &mut R) -> Result<Vec<Placement>, GameError> {
    let mut board = Board::new();
    let mut placements = Vec::new();
    for length in fleet_lengths() {
        let mut attempts = 0;
        loop {
            attempts += 1;
            if attempts > MAX_PLACEMENT_ATTEMPTS {
                return Err(GameError::ConfigurationInfeasible {
                    length,
                    attempts: MAX_PLACEMENT_ATTEMPTS,
                });
            }
            let orientation = if rng.random() {
                Orientation::Horizontal
            } else {
                Orientation::Vertical
            };
            let row = rng.random_range(0..BOARD_SIZE);
            let col = rng.random_range(0..BOARD_SIZE);
            if can_place(&board, row, col, length, orientation) {
                place_ship(&mut board, row, col, length, orientation);
                placements.push(Placement {
                    row,
                    col,
                    length,
                    orientation,
                });
                break;
            }
        }
    }
    Ok(placements)
}
