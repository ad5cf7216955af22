//! Finished-game records as they are kept in the store.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::domain::ledger::RoundData;
use crate::domain::rules::{is_supported_player_count, RuleSet, MAX_PLAYERS, MIN_PLAYERS};
use crate::errors::domain::{DomainError, ValidationKind};

/// An immutable completed game.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredGame {
    pub id: Uuid,
    #[serde(with = "time::serde::rfc3339")]
    pub start_date: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339::option", default)]
    pub end_date: Option<OffsetDateTime>,
    pub location: String,
    pub players: Vec<String>,
    pub rules: RuleSet,
    pub rounds: Vec<RoundData>,
    pub scores: Vec<i32>,
}

impl StoredGame {
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    pub fn overview(&self) -> GameOverview {
        GameOverview {
            id: self.id,
            player_count: self.players.len(),
            start_date: self.start_date,
            end_date: self.end_date,
            location: self.location.clone(),
        }
    }
}

/// Listing entry for the stored-games table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameOverview {
    pub id: Uuid,
    pub player_count: usize,
    #[serde(with = "time::serde::rfc3339")]
    pub start_date: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339::option")]
    pub end_date: Option<OffsetDateTime>,
    pub location: String,
}

pub fn validate_player_count(count: usize) -> Result<(), DomainError> {
    if is_supported_player_count(count) {
        Ok(())
    } else {
        Err(DomainError::validation(
            ValidationKind::InvalidPlayerCount,
            format!("{count} players; supported range is {MIN_PLAYERS}..={MAX_PLAYERS}"),
        ))
    }
}

/// Names must be non-blank and unique after trimming.
pub fn validate_player_names(names: &[String]) -> Result<(), DomainError> {
    validate_player_count(names.len())?;
    let mut seen = HashSet::with_capacity(names.len());
    for (idx, name) in names.iter().enumerate() {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(DomainError::validation(
                ValidationKind::InvalidPlayerName,
                format!("Player {} has no name", idx + 1),
            ));
        }
        if !seen.insert(trimmed) {
            return Err(DomainError::validation(
                ValidationKind::DuplicatePlayerName,
                format!("Player name '{trimmed}' is used more than once"),
            ));
        }
    }
    Ok(())
}
