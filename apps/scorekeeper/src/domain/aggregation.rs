//! Read-only summaries over a game's rounds, for display and export.
//!
//! Every function here is pure: same input, same output, nothing mutated.

use serde::Serialize;

use crate::domain::game::StoredGame;
use crate::domain::ledger::RoundData;

/// Running totals after one round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CumulativeScoreRow {
    /// One-based round number.
    pub round: usize,
    /// Cumulative score per player, in seating order.
    pub totals: Vec<i32>,
}

/// Signed prediction-minus-actual total for one round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RoundDiff {
    /// One-based round number.
    pub round: usize,
    /// `None` when no player had both values.
    pub diff: Option<i32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PlayerAccuracy {
    /// Rounds where prediction equalled actual.
    pub hits: u32,
    /// Rounds with both values present.
    pub total: u32,
    /// `hits / total * 100`, two decimals; 0 without countable rounds.
    pub percent: f64,
}

/// Per-player sum of score changes over `rounds[..end_exclusive]`.
///
/// `end_exclusive` past the end is clamped. Unset changes count as 0.
pub fn cumulative_score_till_round(
    rounds: &[RoundData],
    end_exclusive: usize,
    player_count: usize,
) -> Vec<i32> {
    let end = end_exclusive.min(rounds.len());
    let mut totals = vec![0; player_count];
    for round in &rounds[..end] {
        add_changes(&mut totals, round);
    }
    totals
}

pub fn build_cumulative_scores(game: &StoredGame) -> Vec<CumulativeScoreRow> {
    let mut running = vec![0; game.player_count()];
    game.rounds
        .iter()
        .map(|round| {
            add_changes(&mut running, round);
            CumulativeScoreRow {
                round: round.id + 1,
                totals: running.clone(),
            }
        })
        .collect()
}

pub fn calculate_round_diffs(game: &StoredGame) -> Vec<RoundDiff> {
    game.rounds
        .iter()
        .map(|round| {
            let diff = (0..round.player_count())
                .filter_map(|player| round.pair(player))
                .map(|(p, a)| p as i32 - a as i32)
                .fold(None, |acc: Option<i32>, d| Some(acc.unwrap_or(0) + d));
            RoundDiff {
                round: round.id + 1,
                diff,
            }
        })
        .collect()
}

/// Largest absolute diff across rounds; 0 when no round has one.
///
/// Returned as a magnitude, suitable for a symmetric chart axis.
pub fn largest_diff(diffs: &[RoundDiff]) -> u32 {
    diffs
        .iter()
        .filter_map(|d| d.diff)
        .map(i32::unsigned_abs)
        .max()
        .unwrap_or(0)
}

pub fn calculate_player_accuracy(game: &StoredGame) -> Vec<PlayerAccuracy> {
    let player_count = game.player_count();
    let mut hits = vec![0u32; player_count];
    let mut totals = vec![0u32; player_count];

    for round in &game.rounds {
        for player in 0..player_count {
            if let Some((p, a)) = round.pair(player) {
                totals[player] += 1;
                if p == a {
                    hits[player] += 1;
                }
            }
        }
    }

    hits.into_iter()
        .zip(totals)
        .map(|(hits, total)| PlayerAccuracy {
            hits,
            total,
            percent: accuracy_percent(hits, total),
        })
        .collect()
}

/// Final score per player across the whole game.
pub fn final_scores(game: &StoredGame) -> Vec<i32> {
    cumulative_score_till_round(&game.rounds, game.rounds.len(), game.player_count())
}

/// Everything the results views need, computed in one pass per metric.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameSummary {
    pub players: Vec<String>,
    pub cumulative: Vec<CumulativeScoreRow>,
    pub round_diffs: Vec<RoundDiff>,
    pub largest_diff: u32,
    pub accuracy: Vec<PlayerAccuracy>,
    pub final_scores: Vec<i32>,
}

impl GameSummary {
    pub fn from_game(game: &StoredGame) -> Self {
        let round_diffs = calculate_round_diffs(game);
        Self {
            players: game.players.clone(),
            cumulative: build_cumulative_scores(game),
            largest_diff: largest_diff(&round_diffs),
            round_diffs,
            accuracy: calculate_player_accuracy(game),
            final_scores: final_scores(game),
        }
    }
}

fn add_changes(totals: &mut [i32], round: &RoundData) {
    for (total, change) in totals.iter_mut().zip(&round.score_changes) {
        *total += change.unwrap_or(0);
    }
}

fn accuracy_percent(hits: u32, total: u32) -> f64 {
    if total == 0 {
        return 0.0;
    }
    let rate = hits as f64 / total as f64 * 100.0;
    (rate * 100.0).round() / 100.0
}
