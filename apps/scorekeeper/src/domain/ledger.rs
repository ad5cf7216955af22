//! Round ledger: per-round, per-player predictions, actuals and score deltas.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::rules::round_count;
use crate::errors::domain::{DomainError, ValidationKind};

pub type PlayerId = usize;

/// One deal. Slots are parallel to the seating; `None` means not entered yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundData {
    /// Zero-based round index; also its position in the ledger.
    pub id: usize,
    pub predictions: Vec<Option<u8>>,
    pub actuals: Vec<Option<u8>>,
    pub score_changes: Vec<Option<i32>>,
}

impl RoundData {
    pub fn empty(id: usize, player_count: usize) -> Self {
        Self {
            id,
            predictions: vec![None; player_count],
            actuals: vec![None; player_count],
            score_changes: vec![None; player_count],
        }
    }

    pub fn player_count(&self) -> usize {
        self.predictions.len()
    }

    /// Sum of the entered predictions; unset slots count as 0.
    pub fn prediction_sum(&self) -> usize {
        self.predictions.iter().flatten().map(|&p| p as usize).sum()
    }

    /// Sum of the entered actuals; unset slots count as 0.
    pub fn actual_sum(&self) -> usize {
        self.actuals.iter().flatten().map(|&a| a as usize).sum()
    }

    /// Both values for a player, if both were entered.
    pub fn pair(&self, player: PlayerId) -> Option<(u8, u8)> {
        match (self.predictions.get(player), self.actuals.get(player)) {
            (Some(Some(p)), Some(Some(a))) => Some((*p, *a)),
            _ => None,
        }
    }
}

/// The round sequence of one game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ledger {
    player_count: usize,
    rounds: Vec<RoundData>,
}

impl Ledger {
    pub fn new(player_count: usize) -> Self {
        Self {
            player_count,
            rounds: fresh_rounds(player_count),
        }
    }

    pub fn player_count(&self) -> usize {
        self.player_count
    }

    pub fn len(&self) -> usize {
        self.rounds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rounds.is_empty()
    }

    pub fn rounds(&self) -> &[RoundData] {
        &self.rounds
    }

    pub fn round(&self, round_idx: usize) -> Result<&RoundData, DomainError> {
        self.rounds.get(round_idx).ok_or_else(|| invalid_round(round_idx, self.len()))
    }

    pub fn into_rounds(self) -> Vec<RoundData> {
        self.rounds
    }

    pub fn set_prediction(
        &mut self,
        round_idx: usize,
        player: PlayerId,
        value: u8,
    ) -> Result<(), DomainError> {
        *self.slot(round_idx, player, |r| &mut r.predictions)? = Some(value);
        debug!(round = round_idx, player, value, "Prediction set");
        Ok(())
    }

    pub fn set_actual(
        &mut self,
        round_idx: usize,
        player: PlayerId,
        value: u8,
    ) -> Result<(), DomainError> {
        *self.slot(round_idx, player, |r| &mut r.actuals)? = Some(value);
        debug!(round = round_idx, player, value, "Actual set");
        Ok(())
    }

    pub fn set_score_change(
        &mut self,
        round_idx: usize,
        player: PlayerId,
        value: i32,
    ) -> Result<(), DomainError> {
        *self.slot(round_idx, player, |r| &mut r.score_changes)? = Some(value);
        Ok(())
    }

    /// Unset a prediction; the slot's score change goes with it.
    pub fn clear_prediction(
        &mut self,
        round_idx: usize,
        player: PlayerId,
    ) -> Result<(), DomainError> {
        *self.slot(round_idx, player, |r| &mut r.predictions)? = None;
        *self.slot(round_idx, player, |r| &mut r.score_changes)? = None;
        Ok(())
    }

    /// Unset an actual; the slot's score change goes with it.
    pub fn clear_actual(&mut self, round_idx: usize, player: PlayerId) -> Result<(), DomainError> {
        *self.slot(round_idx, player, |r| &mut r.actuals)? = None;
        *self.slot(round_idx, player, |r| &mut r.score_changes)? = None;
        Ok(())
    }

    pub(crate) fn clear_score_change(
        &mut self,
        round_idx: usize,
        player: PlayerId,
    ) -> Result<(), DomainError> {
        *self.slot(round_idx, player, |r| &mut r.score_changes)? = None;
        Ok(())
    }

    /// Destructive reset for a new seating: all entered data is dropped.
    pub fn reallocate(&mut self, player_count: usize) {
        debug!(
            from = self.player_count,
            to = player_count,
            "Reallocating rounds"
        );
        self.player_count = player_count;
        self.rounds = fresh_rounds(player_count);
    }

    fn slot<T>(
        &mut self,
        round_idx: usize,
        player: PlayerId,
        column: impl FnOnce(&mut RoundData) -> &mut Vec<T>,
    ) -> Result<&mut T, DomainError> {
        let len = self.rounds.len();
        let players = self.player_count;
        let round = self
            .rounds
            .get_mut(round_idx)
            .ok_or_else(|| invalid_round(round_idx, len))?;
        column(round).get_mut(player).ok_or_else(|| {
            DomainError::validation(
                ValidationKind::InvalidPlayer,
                format!("Player {player} out of range (0..{players})"),
            )
        })
    }
}

fn fresh_rounds(player_count: usize) -> Vec<RoundData> {
    (0..round_count(player_count))
        .map(|id| RoundData::empty(id, player_count))
        .collect()
}

fn invalid_round(round_idx: usize, len: usize) -> DomainError {
    DomainError::validation(
        ValidationKind::InvalidRound,
        format!("Round {round_idx} out of range (0..{len})"),
    )
}
