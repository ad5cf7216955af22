use crate::domain::aggregation::{
    build_cumulative_scores, calculate_player_accuracy, calculate_round_diffs, largest_diff,
    GameSummary, RoundDiff,
};
use crate::domain::test_gens::{scored_round_from, stored_game_from};

#[test]
fn round_diff_sums_signed_differences() {
    // A predicted 2/took 1, B predicted 0/took 1
    let game = stored_game_from(
        2,
        vec![scored_round_from(1, vec![Some(2), Some(0)], vec![Some(1), Some(1)])],
    );
    assert_eq!(
        calculate_round_diffs(&game),
        vec![RoundDiff {
            round: 2,
            diff: Some(0)
        }]
    );
}

#[test]
fn round_diff_skips_players_missing_a_value() {
    let game = stored_game_from(
        3,
        vec![
            scored_round_from(0, vec![Some(1), None, Some(0)], vec![Some(0), Some(1), None]),
            scored_round_from(1, vec![None, None, None], vec![Some(1), Some(1), None]),
        ],
    );
    let diffs = calculate_round_diffs(&game);
    assert_eq!(diffs[0].diff, Some(1));
    assert_eq!(diffs[1].diff, None);
    assert_eq!(largest_diff(&diffs), 1);
}

#[test]
fn empty_game_has_no_rows_and_zero_accuracy() {
    let game = stored_game_from(4, Vec::new());
    assert!(build_cumulative_scores(&game).is_empty());
    let accuracy = calculate_player_accuracy(&game);
    assert_eq!(accuracy.len(), 4);
    for player in accuracy {
        assert_eq!(player.percent, 0.0);
        assert_eq!(player.total, 0);
    }
}

#[test]
fn cumulative_rows_carry_totals_forward() {
    let game = stored_game_from(
        2,
        vec![
            scored_round_from(0, vec![Some(1), Some(1)], vec![Some(1), Some(0)]),
            scored_round_from(1, vec![None, Some(0)], vec![Some(2), Some(0)]),
            scored_round_from(2, vec![Some(2), Some(1)], vec![Some(2), Some(1)]),
        ],
    );
    let rows = build_cumulative_scores(&game);
    let totals: Vec<Vec<i32>> = rows.iter().map(|r| r.totals.clone()).collect();
    // Round 1: +30, -10; round 2: unset, +20; round 3: +40, +30
    assert_eq!(totals, vec![vec![30, -10], vec![30, 10], vec![70, 40]]);
    assert_eq!(rows.iter().map(|r| r.round).collect::<Vec<_>>(), vec![1, 2, 3]);
    assert_eq!(game.scores, vec![70, 40]);
}

#[test]
fn accuracy_counts_only_complete_slots() {
    let game = stored_game_from(
        2,
        vec![
            scored_round_from(0, vec![Some(1), Some(0)], vec![Some(1), Some(1)]),
            scored_round_from(1, vec![Some(0), None], vec![Some(0), Some(2)]),
            scored_round_from(2, vec![Some(2), Some(1)], vec![Some(1), Some(1)]),
        ],
    );
    let accuracy = calculate_player_accuracy(&game);
    assert_eq!((accuracy[0].hits, accuracy[0].total), (2, 3));
    assert_eq!(accuracy[0].percent, 66.67);
    assert_eq!((accuracy[1].hits, accuracy[1].total), (1, 2));
    assert_eq!(accuracy[1].percent, 50.0);
}

#[test]
fn summary_bundles_all_views() {
    let game = stored_game_from(
        2,
        vec![scored_round_from(0, vec![Some(1), Some(1)], vec![Some(1), Some(0)])],
    );
    let summary = GameSummary::from_game(&game);
    assert_eq!(summary.players, vec!["P0".to_string(), "P1".to_string()]);
    assert_eq!(summary.final_scores, vec![30, -10]);
    assert_eq!(summary.largest_diff, 1);
    assert_eq!(summary.cumulative.len(), 1);
    assert_eq!(summary.accuracy[0].percent, 100.0);
}
