//! Computer shot selection: classic hunt/target heuristic.

use std::collections::VecDeque;

use rand::Rng;

use crate::board::{in_bounds, ShotGrid};
use crate::config::BOARD_SIZE;

/// A board coordinate as (row, col).
pub type Coord = (usize, usize);

/// Pick the computer's next shot.
///
/// Target mode pops queued candidates in FIFO order, lazily skipping cells
/// that were resolved since they were queued. Hunt mode falls back to
/// uniform rejection sampling over unresolved cells. The caller must
/// guarantee at least one unresolved cell remains; the engine's win-check
/// ordering does.
pub fn pick_shot<R: Rng>(rng: &mut R, shots: &ShotGrid, pending: &mut VecDeque<Coord>) -> Coord {
    while let Some((row, col)) = pending.pop_front() {
        if !shots.is_resolved(row, col) {
            return (row, col);
        }
    }
    loop {
        let row = rng.random_range(0..BOARD_SIZE);
        let col = rng.random_range(0..BOARD_SIZE);
        if !shots.is_resolved(row, col) {
            return (row, col);
        }
    }
}

/// Feed a confirmed hit back into the queue: enqueue the in-bounds
/// orthogonal neighbors of (row, col). Duplicates and already-resolved
/// cells are tolerated here and filtered at pop time.
pub fn enqueue_neighbors(pending: &mut VecDeque<Coord>, row: usize, col: usize) {
    let row = row as isize;
    let col = col as isize;
    let candidates = [
        (row - 1, col),
        (row + 1, col),
        (row, col - 1),
        (row, col + 1),
    ];
    for (r, c) in candidates {
        if r < 0 || c < 0 {
            continue;
        }
        let (r, c) = (r as usize, c as usize);
        if in_bounds(r, c) {
            pending.push_back((r, c));
        }
    }
}
