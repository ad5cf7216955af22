//! Scripted games for `record`: a finished game written down as JSON and
//! replayed through a live session so every round is checked on the way in.

use std::path::Path;

use scorekeeper::{AppError, FixedLocation, GameSession, NoLocation, RuleId, StoredGame};
use serde::Deserialize;
use time::OffsetDateTime;
use tracing::debug;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameScript {
    pub players: Vec<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub rules: Vec<ScriptRule>,
    pub rounds: Vec<ScriptRound>,
}

#[derive(Debug, Deserialize)]
pub struct ScriptRule {
    pub id: RuleId,
    pub active: bool,
}

#[derive(Debug, Deserialize)]
pub struct ScriptRound {
    pub predictions: Vec<u8>,
    pub actuals: Vec<u8>,
}

impl GameScript {
    pub fn from_path(path: &Path) -> Result<Self, AppError> {
        let text = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }

    /// Play the script from a fresh session and return the sealed game.
    pub fn replay(&self, now: OffsetDateTime) -> Result<StoredGame, AppError> {
        let mut session = GameSession::new();
        session.set_players(self.players.clone())?;
        for rule in &self.rules {
            session.set_rule(rule.id, rule.active);
        }
        match &self.location {
            Some(location) => session.capture_location(&FixedLocation(location.clone())),
            None => session.capture_location(&NoLocation),
        }
        session.start_game(now)?;

        for (idx, round) in self.rounds.iter().enumerate() {
            if idx > 0 {
                session.advance_round()?;
            }
            enter(&mut session, round)?;
            debug!(round = idx + 1, scores = ?session.scores(), "Round replayed");
        }
        Ok(session.finish_game(now)?)
    }
}

fn enter(session: &mut GameSession, round: &ScriptRound) -> Result<(), AppError> {
    for (player, &value) in round.predictions.iter().enumerate() {
        session.set_prediction(player, value)?;
    }
    for (player, &value) in round.actuals.iter().enumerate() {
        session.set_actual(player, value)?;
    }
    Ok(())
}
