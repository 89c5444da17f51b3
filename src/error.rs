//! Error taxonomy for engine operations. All variants are local to one
//! request; the caller decides whether to retry or restart.

use thiserror::Error;

use crate::game::GameState;

/// Errors returned by the turn engine, validators, and session store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// Unknown or expired game id.
    #[error("Game not found. Press Restart Game.")]
    NoSuchGame,
    /// Operation attempted outside its legal state.
    #[error("operation requires state {expected:?}, game is in {actual:?}")]
    WrongState {
        expected: GameState,
        actual: GameState,
    },
    /// Submitted ship-length multiset does not match the required fleet.
    #[error("Invalid ship set")]
    InvalidFleetComposition,
    /// A ship fails bounds, overlap, or the no-touch rule.
    #[error("Invalid placement (overlap/out of bounds/adjacent) for length {length} at ({row}, {col})")]
    InvalidPlacement {
        row: usize,
        col: usize,
        length: usize,
    },
    /// Shot target outside the board.
    #[error("Invalid shot coordinates ({row}, {col})")]
    InvalidCoordinates { row: usize, col: usize },
    /// Repeat shot at an already-resolved cell.
    #[error("You already shot there ({row}, {col})")]
    CellAlreadyShot { row: usize, col: usize },
    /// The fleet randomizer exhausted its attempt ceiling; board size and
    /// required ship set are jointly infeasible.
    #[error("could not place a ship of length {length} after {attempts} attempts")]
    ConfigurationInfeasible { length: usize, attempts: usize },
    /// Session store failure; prior durable state is unchanged.
    #[error("persistence failure: {0}")]
    Persistence(String),
}
