//! Fixed game configuration shared by the placement validator and the
//! fleet randomizer. A mismatch between the two would let the computer
//! play a different game than the human, so both read these constants.

/// Side length of the square board.
pub const BOARD_SIZE: usize = 10;

/// Required fleet as (ship length, count) pairs.
pub const FLEET: [(usize, usize); 3] = [(5, 1), (3, 1), (2, 1)];

/// Attempt ceiling for randomly placing a single ship before the
/// configuration is declared infeasible.
pub const MAX_PLACEMENT_ATTEMPTS: usize = 5000;

/// Ship lengths still owed by a player at the start of placement,
/// largest first.
pub fn fleet_lengths() -> Vec<usize> {
    let mut lengths = Vec::new();
    for &(len, count) in FLEET.iter() {
        for _ in 0..count {
            lengths.push(len);
        }
    }
    lengths.sort_unstable_by(|a, b| b.cmp(a));
    lengths
}

/// Total number of ship cells required by [`FLEET`].
pub fn fleet_cell_total() -> usize {
    FLEET.iter().map(|&(len, count)| len * count).sum()
}
