//! Session store boundary: durable id → game mapping.
//!
//! The store, not the turn engine, owns the per-game critical section: a
//! load-validate-mutate-persist sequence for one id must never interleave
//! with another operation on the same id.

use std::collections::HashMap;
use std::sync::Mutex;

use crate::error::GameError;
use crate::game::{Game, GameId};

/// Durable key-value mapping of games, keyed by opaque id.
pub trait SessionStore {
    /// Load the game for `id`, or `NoSuchGame` when absent.
    fn load(&self, id: &GameId) -> Result<Game, GameError>;

    /// Upsert the game under its own id; last writer wins per id.
    fn save(&self, game: &Game) -> Result<(), GameError>;

    /// Run `op` against the stored game as one atomic read-modify-write.
    /// When `op` fails, nothing is written and the prior durable state
    /// stays visible.
    fn update<T, F>(&self, id: &GameId, op: F) -> Result<T, GameError>
    where
        F: FnOnce(&mut Game) -> Result<T, GameError>,
        Self: Sized;
}

/// In-memory reference store. Games are held as JSON documents, the same
/// shape a database-backed store would persist, so swapping the backend
/// changes no engine code.
pub struct MemoryStore {
    games: Mutex<HashMap<GameId, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        MemoryStore {
            games: Mutex::new(HashMap::new()),
        }
    }

    fn encode(game: &Game) -> Result<String, GameError> {
        serde_json::to_string(game).map_err(|e| GameError::Persistence(e.to_string()))
    }

    fn decode(doc: &str) -> Result<Game, GameError> {
        serde_json::from_str(doc).map_err(|e| GameError::Persistence(e.to_string()))
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionStore for MemoryStore {
    fn load(&self, id: &GameId) -> Result<Game, GameError> {
        let games = self
            .games
            .lock()
            .map_err(|_| GameError::Persistence("store lock poisoned".into()))?;
        let doc = games.get(id).ok_or(GameError::NoSuchGame)?;
        Self::decode(doc)
    }

    fn save(&self, game: &Game) -> Result<(), GameError> {
        let doc = Self::encode(game)?;
        let mut games = self
            .games
            .lock()
            .map_err(|_| GameError::Persistence("store lock poisoned".into()))?;
        games.insert(game.id().clone(), doc);
        Ok(())
    }

    // The map lock is held across the whole closure, so two operations on
    // the same id can never interleave their read-modify-write sections.
    fn update<T, F>(&self, id: &GameId, op: F) -> Result<T, GameError>
    where
        F: FnOnce(&mut Game) -> Result<T, GameError>,
    {
        let mut games = self
            .games
            .lock()
            .map_err(|_| GameError::Persistence("store lock poisoned".into()))?;
        let doc = games.get(id).ok_or(GameError::NoSuchGame)?;
        let mut game = Self::decode(doc)?;
        let out = op(&mut game)?;
        let doc = Self::encode(&game)?;
        games.insert(id.clone(), doc);
        Ok(out)
    }
}
