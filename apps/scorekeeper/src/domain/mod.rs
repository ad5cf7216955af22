//! Domain layer: pure scoring logic and types.

pub mod aggregation;
pub mod game;
pub mod ledger;
pub mod rules;
pub mod scoring;

#[cfg(test)]
pub(crate) mod test_gens;
#[cfg(test)]
pub(crate) mod test_prelude;
#[cfg(test)]
mod tests_aggregation;
#[cfg(test)]
mod tests_props_aggregation;
#[cfg(test)]
mod tests_round_checks;

// Re-exports for ergonomics
pub use aggregation::{
    build_cumulative_scores, calculate_player_accuracy, calculate_round_diffs,
    cumulative_score_till_round, final_scores, largest_diff, CumulativeScoreRow, GameSummary,
    PlayerAccuracy, RoundDiff,
};
pub use game::{GameOverview, StoredGame};
pub use ledger::{Ledger, PlayerId, RoundData};
pub use rules::{round_count, Rule, RuleId, RuleSet};
pub use scoring::{check_round, rescore_slot, score_delta};
