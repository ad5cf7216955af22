//! Finished games, loaded once and written back as a whole on every change.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::domain::game::{GameOverview, StoredGame};
use crate::errors::domain::{DomainError, InfraErrorKind, NotFoundKind};
use crate::store::KeyValueStore;

pub const STORE_KEY: &str = "completedGames";

/// Stored value shape: `{"value": [game, ...]}`
#[derive(Debug, Default, Serialize, Deserialize)]
struct Envelope {
    #[serde(default)]
    value: Vec<StoredGame>,
}

/// Result of writing the collection back to the store.
///
/// The in-memory collection is already updated either way.
#[derive(Debug)]
pub enum PersistOutcome {
    Saved,
    Failed(DomainError),
}

impl PersistOutcome {
    pub fn is_saved(&self) -> bool {
        matches!(self, PersistOutcome::Saved)
    }
}

pub struct CompletedGames<S: KeyValueStore> {
    store: S,
    games: Vec<StoredGame>,
}

impl<S: KeyValueStore> CompletedGames<S> {
    /// Load every stored game. Unreadable data is logged and treated as empty.
    pub fn load(store: S) -> Self {
        let games = match read_all(&store) {
            Ok(games) => games,
            Err(e) => {
                warn!(error = %e, "Could not load completed games; starting empty");
                Vec::new()
            }
        };
        debug!(count = games.len(), "Completed games loaded");
        Self { store, games }
    }

    pub fn all(&self) -> &[StoredGame] {
        &self.games
    }

    pub fn len(&self) -> usize {
        self.games.len()
    }

    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }

    pub fn overview(&self) -> Vec<GameOverview> {
        self.games.iter().map(StoredGame::overview).collect()
    }

    pub fn get_by_id(&self, id: Uuid) -> Result<&StoredGame, DomainError> {
        self.games
            .iter()
            .find(|g| g.id == id)
            .ok_or_else(|| {
                DomainError::not_found(NotFoundKind::Game, format!("Game {id} not found"))
            })
    }

    pub fn add(&mut self, game: StoredGame) -> PersistOutcome {
        info!(game_id = %game.id, "Storing completed game");
        self.games.push(game);
        self.persist()
    }

    /// Remove a game. Unknown ids are a no-op and nothing is written.
    pub fn delete_by_id(&mut self, id: Uuid) -> Option<PersistOutcome> {
        let before = self.games.len();
        self.games.retain(|g| g.id != id);
        if self.games.len() == before {
            debug!(game_id = %id, "Delete of unknown game ignored");
            return None;
        }
        info!(game_id = %id, "Completed game deleted");
        Some(self.persist())
    }

    pub fn into_store(self) -> S {
        self.store
    }

    fn persist(&mut self) -> PersistOutcome {
        let result = serde_json::to_value(Envelope {
            value: self.games.clone(),
        })
        .map_err(|e| DomainError::infra(InfraErrorKind::Persistence, format!("encode: {e}")))
        .and_then(|value| self.store.set(STORE_KEY, value));

        match result {
            Ok(()) => PersistOutcome::Saved,
            Err(e) => {
                warn!(error = %e, count = self.games.len(), "Saving completed games failed");
                PersistOutcome::Failed(e)
            }
        }
    }
}

fn read_all(store: &impl KeyValueStore) -> Result<Vec<StoredGame>, DomainError> {
    let Some(raw) = store.get(STORE_KEY)? else {
        return Ok(Vec::new());
    };
    decode(raw)
}

fn decode(raw: Value) -> Result<Vec<StoredGame>, DomainError> {
    serde_json::from_value::<Envelope>(raw)
        .map(|envelope| envelope.value)
        .map_err(|e| {
            DomainError::infra(InfraErrorKind::DataCorruption, format!("{STORE_KEY}: {e}"))
        })
}
