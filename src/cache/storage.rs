//! JSON-file backed score store
//!
//! The whole store is one document mapping date keys to game lists. It is
//! read once, changed in memory and written back in full. Records loaded from
//! disk are kept as raw JSON and written back unchanged; only games fetched by
//! the current run are typed.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::Path;

use crate::error::Result;
use crate::models::{DateKey, GameRecord};

/// One game in the store
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum StoredGame {
    /// Fetched during this run
    Fetched(GameRecord),
    /// Loaded from disk, exactly as found
    Kept(Value),
}

impl<'de> Deserialize<'de> for StoredGame {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Value::deserialize(deserializer).map(StoredGame::Kept)
    }
}

impl From<GameRecord> for StoredGame {
    fn from(game: GameRecord) -> Self {
        StoredGame::Fetched(game)
    }
}

impl StoredGame {
    pub fn id(&self) -> &str {
        match self {
            StoredGame::Fetched(game) => &game.id,
            StoredGame::Kept(value) => str_field(value, "id"),
        }
    }

    /// Status text; empty when a kept record has none
    pub fn status(&self) -> &str {
        match self {
            StoredGame::Fetched(game) => &game.status,
            StoredGame::Kept(value) => str_field(value, "status"),
        }
    }

    pub fn league_key(&self) -> &str {
        match self {
            StoredGame::Fetched(game) => &game.league_key,
            StoredGame::Kept(value) => str_field(value, "league_key"),
        }
    }

    pub fn date_label(&self) -> &str {
        match self {
            StoredGame::Fetched(game) => &game.date_label,
            StoredGame::Kept(value) => str_field(value, "date_label"),
        }
    }

    pub fn completed(&self) -> bool {
        match self {
            StoredGame::Fetched(game) => game.completed,
            StoredGame::Kept(value) => value
                .get("completed")
                .and_then(Value::as_bool)
                .unwrap_or(false),
        }
    }

    /// The typed record, for games fetched by this run
    pub fn as_fetched(&self) -> Option<&GameRecord> {
        match self {
            StoredGame::Fetched(game) => Some(game),
            StoredGame::Kept(_) => None,
        }
    }
}

fn str_field<'a>(value: &'a Value, field: &str) -> &'a str {
    value.get(field).and_then(Value::as_str).unwrap_or("")
}

/// Date key -> games, serialized with keys in ascending order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScoreStore {
    days: BTreeMap<DateKey, Vec<StoredGame>>,
}

impl ScoreStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the store from `path`.
    ///
    /// A missing, unreadable or unparsable file yields an empty store. A run
    /// that crashed mid-write leaves a truncated file behind, and the next run
    /// must still go ahead.
    pub fn load(path: &Path) -> Self {
        let bytes = match std::fs::read(path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                log::info!("No score store at {}, starting empty", path.display());
                return Self::new();
            }
            Err(e) => {
                log::warn!("Failed to read {}: {}; starting empty", path.display(), e);
                return Self::new();
            }
        };

        match serde_json::from_slice::<ScoreStore>(&bytes) {
            Ok(store) => {
                log::debug!("Loaded {} date keys from {}", store.len(), path.display());
                store
            }
            Err(e) => {
                log::warn!(
                    "Score store {} is corrupt ({}); starting empty",
                    path.display(),
                    e
                );
                Self::new()
            }
        }
    }

    /// Write the whole store to `path`, replacing the file.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_vec(self)?;
        std::fs::write(path, json)?;

        log::debug!("Wrote {} date keys to {}", self.len(), path.display());
        Ok(())
    }

    /// Games stored for a day; empty when the key is absent
    pub fn games(&self, key: &str) -> &[StoredGame] {
        self.days.get(key).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Replace the entry for a day with freshly fetched games
    pub fn insert(&mut self, key: impl Into<DateKey>, games: Vec<GameRecord>) {
        self.insert_stored(key, games.into_iter().map(StoredGame::from).collect());
    }

    /// Replace the entry for a day
    pub fn insert_stored(&mut self, key: impl Into<DateKey>, games: Vec<StoredGame>) {
        self.days.insert(key.into(), games);
    }

    /// Take a day's entry out of the store
    pub fn take(&mut self, key: &str) -> Vec<StoredGame> {
        self.days.remove(key).unwrap_or_default()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&DateKey, &Vec<StoredGame>)> {
        self.days.iter()
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    #[cfg(test)]
    pub fn contains_key(&self, key: &str) -> bool {
        self.days.contains_key(key)
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}
