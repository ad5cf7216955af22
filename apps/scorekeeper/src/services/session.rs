//! The game currently being played at the table.
//!
//! A session owns the player list, rule set and round ledger for one game.
//! Entry happens on `current_round`; `playing_round` is the furthest round
//! reached, so stepping back to fix an earlier round does not lose progress.

use time::OffsetDateTime;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::domain::aggregation::cumulative_score_till_round;
use crate::domain::game::{validate_player_count, validate_player_names, StoredGame};
use crate::domain::ledger::{Ledger, PlayerId, RoundData};
use crate::domain::rules::{RuleId, RuleSet, DEFAULT_PLAYERS};
use crate::domain::scoring::{check_round, rescore_slot};
use crate::errors::domain::{DomainError, ValidationKind};
use crate::location::{LocationProvider, UNKNOWN_LOCATION};

#[derive(Debug, Clone)]
pub struct GameSession {
    id: Uuid,
    players: Vec<String>,
    rules: RuleSet,
    ledger: Ledger,
    current_round: usize,
    playing_round: usize,
    location: String,
    start_date: Option<OffsetDateTime>,
    active: bool,
}

impl GameSession {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            players: vec![String::new(); DEFAULT_PLAYERS],
            rules: RuleSet::default(),
            ledger: Ledger::new(DEFAULT_PLAYERS),
            current_round: 0,
            playing_round: 0,
            location: UNKNOWN_LOCATION.to_string(),
            start_date: None,
            active: false,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn players(&self) -> &[String] {
        &self.players
    }

    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn rounds(&self) -> &[RoundData] {
        self.ledger.rounds()
    }

    pub fn round_count(&self) -> usize {
        self.ledger.len()
    }

    pub fn current_round(&self) -> usize {
        self.current_round
    }

    pub fn playing_round(&self) -> usize {
        self.playing_round
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn start_date(&self) -> Option<OffsetDateTime> {
        self.start_date
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn is_last_round(&self) -> bool {
        self.current_round + 1 == self.ledger.len()
    }

    /// Replace the player list. Rebuilds every round, so only allowed
    /// before the game starts.
    pub fn set_players(&mut self, names: Vec<String>) -> Result<(), DomainError> {
        if self.active {
            return Err(DomainError::validation(
                ValidationKind::GameAlreadyStarted,
                "Players cannot change once the game has started",
            ));
        }
        validate_player_count(names.len())?;
        self.ledger.reallocate(names.len());
        self.players = names;
        self.current_round = 0;
        self.playing_round = 0;
        debug!(players = self.players.len(), "Players set");
        Ok(())
    }

    /// Rename one seat, e.g. filling in a placeholder before the game starts.
    pub fn set_player_name(
        &mut self,
        player: PlayerId,
        name: impl Into<String>,
    ) -> Result<(), DomainError> {
        if self.active {
            return Err(DomainError::validation(
                ValidationKind::GameAlreadyStarted,
                "Players cannot change once the game has started",
            ));
        }
        let count = self.players.len();
        let slot = self.players.get_mut(player).ok_or_else(|| {
            DomainError::validation(
                ValidationKind::InvalidPlayer,
                format!("Player {player} out of range (0..{count})"),
            )
        })?;
        *slot = name.into();
        Ok(())
    }

    pub fn set_location(&mut self, location: impl Into<String>) {
        self.location = location.into();
    }

    pub fn capture_location(&mut self, provider: &impl LocationProvider) {
        self.location = provider.current_location();
        debug!(location = %self.location, "Location captured");
    }

    /// Flip a rule and return its new state.
    pub fn toggle_rule(&mut self, id: RuleId) -> bool {
        let active = self.rules.toggle(id);
        debug!(rule = ?id, active, "Rule toggled");
        active
    }

    pub fn set_rule(&mut self, id: RuleId, active: bool) {
        self.rules.set_active(id, active);
    }

    pub fn start_game(&mut self, now: OffsetDateTime) -> Result<(), DomainError> {
        if self.active {
            return Err(DomainError::validation(
                ValidationKind::GameAlreadyStarted,
                "Game is already running",
            ));
        }
        validate_player_names(&self.players)?;
        self.start_date = Some(now);
        self.active = true;
        info!(
            game_id = %self.id,
            players = self.players.len(),
            rounds = self.ledger.len(),
            "Game started"
        );
        Ok(())
    }

    /// Record a prediction on the current round and return the slot's delta.
    pub fn set_prediction(
        &mut self,
        player: PlayerId,
        value: u8,
    ) -> Result<Option<i32>, DomainError> {
        self.ensure_active()?;
        self.ledger.set_prediction(self.current_round, player, value)?;
        rescore_slot(&mut self.ledger, self.current_round, player)
    }

    /// Record an actual on the current round and return the slot's delta.
    pub fn set_actual(
        &mut self,
        player: PlayerId,
        value: u8,
    ) -> Result<Option<i32>, DomainError> {
        self.ensure_active()?;
        self.ledger.set_actual(self.current_round, player, value)?;
        rescore_slot(&mut self.ledger, self.current_round, player)
    }

    pub fn clear_prediction(&mut self, player: PlayerId) -> Result<(), DomainError> {
        self.ensure_active()?;
        self.ledger.clear_prediction(self.current_round, player)
    }

    pub fn clear_actual(&mut self, player: PlayerId) -> Result<(), DomainError> {
        self.ensure_active()?;
        self.ledger.clear_actual(self.current_round, player)
    }

    pub fn current_round_data(&self) -> Result<&RoundData, DomainError> {
        self.ledger.round(self.current_round)
    }

    /// Move to the next round once the current one passes every check.
    ///
    /// On failure nothing changes and the check's error is returned.
    pub fn advance_round(&mut self) -> Result<usize, DomainError> {
        self.ensure_active()?;
        if self.is_last_round() {
            return Err(DomainError::validation(
                ValidationKind::NoNextRound,
                format!("Round {} is the last round", self.current_round + 1),
            ));
        }
        if let Err(e) = check_round(self.ledger.round(self.current_round)?, &self.rules) {
            warn!(round = self.current_round + 1, error = %e, "Round advance rejected");
            return Err(e);
        }
        if self.playing_round == self.current_round {
            self.playing_round += 1;
        }
        self.current_round += 1;
        info!(
            round = self.current_round + 1,
            playing_round = self.playing_round + 1,
            "Advanced to round"
        );
        Ok(self.current_round)
    }

    /// Step back one round for corrections. No checks apply.
    pub fn previous_round(&mut self) -> usize {
        self.current_round = self.current_round.saturating_sub(1);
        debug!(round = self.current_round + 1, "Stepped back");
        self.current_round
    }

    /// Running totals per player over every round entered so far.
    pub fn scores(&self) -> Vec<i32> {
        cumulative_score_till_round(self.ledger.rounds(), self.ledger.len(), self.players.len())
    }

    /// Seal the game and reset the session for the next one.
    ///
    /// The last round must be current and pass the same checks as an advance.
    pub fn finish_game(&mut self, now: OffsetDateTime) -> Result<StoredGame, DomainError> {
        self.ensure_active()?;
        if !self.is_last_round() {
            return Err(DomainError::validation(
                ValidationKind::NotLastRound,
                format!(
                    "Round {} of {} is not the last round",
                    self.current_round + 1,
                    self.ledger.len()
                ),
            ));
        }
        if let Err(e) = check_round(self.ledger.round(self.current_round)?, &self.rules) {
            warn!(round = self.current_round + 1, error = %e, "Finish rejected");
            return Err(e);
        }

        let scores = self.scores();
        let finished = std::mem::take(self);
        let game = StoredGame {
            id: finished.id,
            start_date: finished.start_date.unwrap_or(now),
            end_date: Some(now),
            location: finished.location,
            players: finished.players,
            rules: finished.rules,
            rounds: finished.ledger.into_rounds(),
            scores,
        };
        info!(game_id = %game.id, scores = ?game.scores, "Game finished");
        Ok(game)
    }

    fn ensure_active(&self) -> Result<(), DomainError> {
        if self.active {
            Ok(())
        } else {
            Err(DomainError::validation(
                ValidationKind::GameNotActive,
                "No game is running",
            ))
        }
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}
