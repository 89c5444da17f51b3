//! The game aggregate and its turn engine: fleet submission, shot
//! resolution, win detection.

use core::fmt;
use std::collections::VecDeque;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::board::{in_bounds, Board, ShotGrid, ShotMark};
use crate::config::fleet_lengths;
use crate::error::GameError;
use crate::placement::{apply_fleet, Placement};
use crate::randomizer::random_fleet;
use crate::targeting::{enqueue_neighbors, pick_shot, Coord};

/// Opaque token identifying one game in the session store. Generated once
/// at game creation, never interpreted by the engine.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GameId(String);

impl GameId {
    /// Draw a fresh 128-bit hex token.
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        use core::fmt::Write;
        let bytes: [u8; 16] = rng.random();
        let mut token = String::with_capacity(32);
        for b in bytes {
            let _ = write!(token, "{b:02x}");
        }
        GameId(token)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Lifecycle state of a game. `CpuTurn` is a transient label: the
/// computer's reply is always resolved before `fire_shot` returns, so the
/// engine is never observed waiting in it between operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GameState {
    Placing,
    PlayerTurn,
    CpuTurn,
    GameOver,
}

/// Outcome of a single resolved shot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShotEvent {
    Hit,
    Miss,
}

impl fmt::Display for ShotEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShotEvent::Hit => f.write_str("hit"),
            ShotEvent::Miss => f.write_str("miss"),
        }
    }
}

/// Final result of a finished game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    PlayerWins,
    CpuWins,
}

/// The computer's reply within one `fire_shot` call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CpuShot {
    pub row: usize,
    pub col: usize,
    pub event: ShotEvent,
}

/// What one `fire_shot` call did: the player's result, the computer's
/// reply (absent when the player's shot ended the game), and the state the
/// game landed in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShotReport {
    pub player_event: ShotEvent,
    pub cpu_shot: Option<CpuShot>,
    pub state: GameState,
    pub outcome: Option<Outcome>,
}

impl ShotReport {
    /// Human-readable status line for this exchange.
    pub fn status_message(&self) -> String {
        match self.outcome {
            Some(Outcome::PlayerWins) => {
                "You win! Press Restart Game to play again.".to_string()
            }
            Some(Outcome::CpuWins) => {
                "Computer wins! Press Restart Game to play again.".to_string()
            }
            None => {
                let cpu = self
                    .cpu_shot
                    .map(|s| s.event.to_string())
                    .unwrap_or_default();
                format!(
                    "You fired: {}. Computer fired: {}. Your turn.",
                    self.player_event, cpu
                )
            }
        }
    }
}

/// One independent game: the aggregate root. Mutated only through
/// [`Game::submit_fleet`] and [`Game::fire_shot`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    id: GameId,
    state: GameState,
    player_board: Board,
    cpu_board: Board,
    player_shots: ShotGrid,
    cpu_shots: ShotGrid,
    player_hits: usize,
    cpu_hits: usize,
    total_ship_cells: usize,
    pending_targets: VecDeque<Coord>,
    ships_to_place: Vec<usize>,
}

impl Game {
    /// Create a game in the placement phase: empty player board, fully
    /// populated random computer board. The win threshold is derived from
    /// the board actually generated, not from a constant.
    pub fn new<R: Rng>(rng: &mut R) -> Result<Self, GameError> {
        let cpu_board = apply_fleet(&random_fleet(rng)?)?;
        let total_ship_cells = cpu_board.ship_cells();
        Ok(Game {
            id: GameId::random(rng),
            state: GameState::Placing,
            player_board: Board::new(),
            cpu_board,
            player_shots: ShotGrid::new(),
            cpu_shots: ShotGrid::new(),
            player_hits: 0,
            cpu_hits: 0,
            total_ship_cells,
            pending_targets: VecDeque::new(),
            ships_to_place: fleet_lengths(),
        })
    }

    pub fn id(&self) -> &GameId {
        &self.id
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn player_board(&self) -> &Board {
        &self.player_board
    }

    pub fn cpu_board(&self) -> &Board {
        &self.cpu_board
    }

    pub fn player_shots(&self) -> &ShotGrid {
        &self.player_shots
    }

    pub fn cpu_shots(&self) -> &ShotGrid {
        &self.cpu_shots
    }

    pub fn player_hits(&self) -> usize {
        self.player_hits
    }

    pub fn cpu_hits(&self) -> usize {
        self.cpu_hits
    }

    pub fn total_ship_cells(&self) -> usize {
        self.total_ship_cells
    }

    pub fn pending_targets(&self) -> &VecDeque<Coord> {
        &self.pending_targets
    }

    pub fn ships_to_place(&self) -> &[usize] {
        &self.ships_to_place
    }

    /// Install the player's fleet. Legal only while placing; a rejected
    /// submission leaves the game untouched so the client can retry.
    pub fn submit_fleet(&mut self, placements: &[Placement]) -> Result<(), GameError> {
        if self.state != GameState::Placing {
            return Err(GameError::WrongState {
                expected: GameState::Placing,
                actual: self.state,
            });
        }
        let board = apply_fleet(placements)?;
        self.player_board = board;
        self.ships_to_place.clear();
        self.state = GameState::PlayerTurn;
        Ok(())
    }

    /// Resolve one player shot and, unless it ends the game, the
    /// computer's reply in the same call.
    pub fn fire_shot<R: Rng>(
        &mut self,
        rng: &mut R,
        row: usize,
        col: usize,
    ) -> Result<ShotReport, GameError> {
        if self.state != GameState::PlayerTurn {
            return Err(GameError::WrongState {
                expected: GameState::PlayerTurn,
                actual: self.state,
            });
        }
        if !in_bounds(row, col) {
            return Err(GameError::InvalidCoordinates { row, col });
        }
        if self.player_shots.is_resolved(row, col) {
            return Err(GameError::CellAlreadyShot { row, col });
        }

        let player_event = if self.cpu_board.is_occupied(row, col) {
            self.player_shots.set_mark(row, col, ShotMark::Hit);
            self.player_hits += 1;
            ShotEvent::Hit
        } else {
            self.player_shots.set_mark(row, col, ShotMark::Miss);
            ShotEvent::Miss
        };

        if self.player_hits == self.total_ship_cells {
            self.state = GameState::GameOver;
            return Ok(ShotReport {
                player_event,
                cpu_shot: None,
                state: self.state,
                outcome: Some(Outcome::PlayerWins),
            });
        }

        // Computer reply, resolved before this call returns.
        self.state = GameState::CpuTurn;
        let (cr, cc) = pick_shot(rng, &self.cpu_shots, &mut self.pending_targets);
        let cpu_event = if self.player_board.is_occupied(cr, cc) {
            self.cpu_shots.set_mark(cr, cc, ShotMark::Hit);
            self.cpu_hits += 1;
            enqueue_neighbors(&mut self.pending_targets, cr, cc);
            ShotEvent::Hit
        } else {
            self.cpu_shots.set_mark(cr, cc, ShotMark::Miss);
            ShotEvent::Miss
        };
        log::debug!("cpu fired at ({cr}, {cc}): {cpu_event}");

        let cpu_shot = Some(CpuShot {
            row: cr,
            col: cc,
            event: cpu_event,
        });

        if self.cpu_hits == self.total_ship_cells {
            self.state = GameState::GameOver;
            return Ok(ShotReport {
                player_event,
                cpu_shot,
                state: self.state,
                outcome: Some(Outcome::CpuWins),
            });
        }

        self.state = GameState::PlayerTurn;
        Ok(ShotReport {
            player_event,
            cpu_shot,
            state: self.state,
            outcome: None,
        })
    }

    /// Client-facing view of the game. Never exposes the computer's board.
    pub fn snapshot(&self) -> GameSnapshot {
        let status = match self.state {
            GameState::Placing => "Place your fleet: click on your board to place ships.",
            GameState::GameOver => "Game over. Press Restart Game.",
            _ => "Your turn: fire on the enemy board.",
        };
        GameSnapshot {
            game_id: self.id.clone(),
            state: self.state,
            ships_to_place: self.ships_to_place.clone(),
            player_board: self.player_board.clone(),
            player_shots: self.player_shots.clone(),
            cpu_shots: self.cpu_shots.clone(),
            status: status.to_string(),
        }
    }
}

/// Serializable resume view returned to clients.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameSnapshot {
    pub game_id: GameId,
    pub state: GameState,
    pub ships_to_place: Vec<usize>,
    pub player_board: Board,
    pub player_shots: ShotGrid,
    pub cpu_shots: ShotGrid,
    pub status: String,
}
