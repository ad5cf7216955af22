//! Property tests for the read-only summaries.

use proptest::prelude::*;

use crate::domain::aggregation::{
    build_cumulative_scores, calculate_player_accuracy, calculate_round_diffs,
    cumulative_score_till_round, largest_diff, RoundDiff,
};
use crate::domain::test_gens;
use crate::domain::test_prelude;

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    /// Property: the prefix total equals a direct sum of score changes, unset as 0.
    #[test]
    fn prop_cumulative_till_round_is_prefix_sum(game in test_gens::stored_game(), cut in 0usize..=31) {
        let n = cut.min(game.rounds.len());
        let totals = cumulative_score_till_round(&game.rounds, n, game.player_count());
        for (player, total) in totals.iter().enumerate() {
            let expected: i32 = game.rounds[..n]
                .iter()
                .map(|r| r.score_changes[player].unwrap_or(0))
                .sum();
            prop_assert_eq!(*total, expected);
        }
    }

    /// Property: each cumulative row equals the prefix total through that round.
    #[test]
    fn prop_cumulative_rows_match_prefix_totals(game in test_gens::stored_game()) {
        let rows = build_cumulative_scores(&game);
        prop_assert_eq!(rows.len(), game.rounds.len());
        for (idx, row) in rows.iter().enumerate() {
            prop_assert_eq!(row.round, idx + 1);
            prop_assert_eq!(
                &row.totals,
                &cumulative_score_till_round(&game.rounds, idx + 1, game.player_count())
            );
        }
    }

    /// Property: accuracy is a percentage, and 0 without countable rounds.
    #[test]
    fn prop_accuracy_bounds(game in test_gens::stored_game()) {
        for player in calculate_player_accuracy(&game) {
            prop_assert!((0.0..=100.0).contains(&player.percent));
            prop_assert!(player.hits <= player.total);
            if player.total == 0 {
                prop_assert_eq!(player.percent, 0.0);
            }
        }
    }

    /// Property: summaries are idempotent.
    #[test]
    fn prop_summaries_are_idempotent(game in test_gens::stored_game()) {
        prop_assert_eq!(calculate_round_diffs(&game), calculate_round_diffs(&game));
        prop_assert_eq!(build_cumulative_scores(&game), build_cumulative_scores(&game));
        prop_assert_eq!(calculate_player_accuracy(&game), calculate_player_accuracy(&game));
    }

    /// Property: the largest diff bounds every round's diff, and is 0 for all-absent input.
    #[test]
    fn prop_largest_diff_bounds_all(diffs in prop::collection::vec(prop::option::of(-30i32..=30), 0..30)) {
        let diffs: Vec<RoundDiff> = diffs
            .into_iter()
            .enumerate()
            .map(|(i, diff)| RoundDiff { round: i + 1, diff })
            .collect();
        let largest = largest_diff(&diffs);
        for d in diffs.iter().filter_map(|d| d.diff) {
            prop_assert!(d.unsigned_abs() <= largest);
        }
        if diffs.iter().all(|d| d.diff.is_none()) {
            prop_assert_eq!(largest, 0);
        }
    }
}
