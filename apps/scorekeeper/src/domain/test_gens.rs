// Proptest generators and fixtures for domain types.

use proptest::prelude::*;
use time::macros::datetime;
use uuid::Uuid;

use crate::domain::aggregation::final_scores;
use crate::domain::game::StoredGame;
use crate::domain::ledger::RoundData;
use crate::domain::rules::{cards_for_round, round_count, RuleSet, MAX_PLAYERS, MIN_PLAYERS};
use crate::domain::scoring::score_delta;

pub fn player_count() -> impl Strategy<Value = usize> {
    MIN_PLAYERS..=MAX_PLAYERS
}

/// A slot value for a zero-based round: unset, or in `[0, cards]`.
pub fn slot(round_idx: usize) -> impl Strategy<Value = Option<u8>> {
    prop::option::weighted(0.85, 0u8..=cards_for_round(round_idx) as u8)
}

/// A round with arbitrary entries and score changes consistent with them.
pub fn scored_round(round_idx: usize, player_count: usize) -> impl Strategy<Value = RoundData> {
    (
        prop::collection::vec(slot(round_idx), player_count),
        prop::collection::vec(slot(round_idx), player_count),
    )
        .prop_map(move |(predictions, actuals)| scored_round_from(round_idx, predictions, actuals))
}

/// A finished game with between zero and `round_count` rounds.
pub fn stored_game() -> impl Strategy<Value = StoredGame> {
    player_count().prop_flat_map(|players| {
        (0..=round_count(players)).prop_flat_map(move |len| {
            (0..len)
                .map(|idx| scored_round(idx, players).boxed())
                .collect::<Vec<_>>()
                .prop_map(move |rounds| stored_game_from(players, rounds))
        })
    })
}

pub fn scored_round_from(
    round_idx: usize,
    predictions: Vec<Option<u8>>,
    actuals: Vec<Option<u8>>,
) -> RoundData {
    let score_changes = predictions
        .iter()
        .zip(&actuals)
        .map(|(p, a)| match (p, a) {
            (Some(p), Some(a)) => Some(score_delta(*p, *a)),
            _ => None,
        })
        .collect();
    RoundData {
        id: round_idx,
        predictions,
        actuals,
        score_changes,
    }
}

pub fn stored_game_from(player_count: usize, rounds: Vec<RoundData>) -> StoredGame {
    let mut game = StoredGame {
        id: Uuid::nil(),
        start_date: datetime!(2025-06-01 19:30 UTC),
        end_date: Some(datetime!(2025-06-01 21:45 UTC)),
        location: "kitchen table".to_string(),
        players: (0..player_count).map(|i| format!("P{i}")).collect(),
        rules: RuleSet::default(),
        rounds,
        scores: Vec::new(),
    };
    game.scores = final_scores(&game);
    game
}
