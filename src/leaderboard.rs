//! Persisted leaderboard.
//!
//! An append-only list of finished sessions under one storage key. Records
//! are never mutated after creation; ordering is insertion order, and any
//! filtering or sorting is the caller's business. Older payloads may predate
//! the category/difficulty/speed fields, so those default to empty strings
//! on load instead of dropping the record.

use serde::{Deserialize, Serialize};

use crate::storage::{KeyValueStore, StorageError};

/// Fixed localStorage key holding the serialized player list.
pub const STORAGE_KEY: &str = "vocab-drop/leaderboard";

/// One finished session.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
    pub score: i64,
    pub mode: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub difficulty: String,
    #[serde(default)]
    pub speed: String,
    /// Wall-clock ms at session end.
    pub timestamp: f64,
}

pub struct Leaderboard<S: KeyValueStore> {
    store: S,
    players: Vec<Player>,
}

impl<S: KeyValueStore> Leaderboard<S> {
    /// Load from the store. Read or parse failures start fresh with an empty
    /// list; the failure is returned alongside so the caller can log it.
    pub fn load(store: S) -> (Self, Option<StorageError>) {
        let (players, err) = match store.get(STORAGE_KEY) {
            Ok(Some(json)) => match serde_json::from_str::<Vec<Player>>(&json) {
                Ok(players) => (players, None),
                Err(e) => (Vec::new(), Some(StorageError::Corrupt(e.to_string()))),
            },
            Ok(None) => (Vec::new(), None),
            Err(e) => (Vec::new(), Some(e)),
        };
        (Self { store, players }, err)
    }

    /// Full list, insertion order.
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Append a record and persist. On write failure the in-memory list
    /// keeps the record and stays authoritative for the rest of the session.
    pub fn add_player(&mut self, player: Player) -> Result<(), StorageError> {
        self.players.push(player);
        self.save()
    }

    /// Empty the leaderboard. Idempotent.
    pub fn clear(&mut self) -> Result<(), StorageError> {
        self.players.clear();
        self.save()
    }

    fn save(&self) -> Result<(), StorageError> {
        let json = serde_json::to_string(&self.players)
            .map_err(|e| StorageError::Corrupt(e.to_string()))?;
        self.store.set(STORAGE_KEY, &json)
    }
}
