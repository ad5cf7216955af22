use crate::domain::ledger::RoundData;
use crate::domain::rules::{RuleId, RuleSet};
use crate::domain::scoring::check_round;
use crate::domain::test_gens::scored_round_from;
use crate::errors::domain::ValidationKind;

fn round(id: usize, predictions: &[Option<u8>], actuals: &[Option<u8>]) -> RoundData {
    scored_round_from(id, predictions.to_vec(), actuals.to_vec())
}

fn rules_without_match_rule() -> RuleSet {
    let mut rules = RuleSet::default();
    rules.set_active(RuleId::NoMatchingPrediction, false);
    rules
}

fn kind_of(round: &RoundData, rules: &RuleSet) -> Option<ValidationKind> {
    check_round(round, rules).err().and_then(|e| e.validation_kind())
}

#[test]
fn three_players_first_round_exact_predictions_pass() {
    // predictions [1,0,0] sum to the one card dealt, so only passes with the rule off
    let r = round(0, &[Some(1), Some(0), Some(0)], &[Some(1), Some(0), Some(0)]);
    assert_eq!(r.score_changes, vec![Some(30), Some(20), Some(20)]);
    assert!(check_round(&r, &rules_without_match_rule()).is_ok());
}

#[test]
fn prediction_sum_equal_to_cards_violates_active_rule() {
    let r = round(0, &[Some(0), Some(0), Some(1)], &[Some(1), Some(0), Some(0)]);
    assert_eq!(
        kind_of(&r, &RuleSet::default()),
        Some(ValidationKind::RuleViolation(RuleId::NoMatchingPrediction))
    );
}

#[test]
fn prediction_sum_off_by_one_passes_active_rule() {
    let r = round(0, &[Some(1), Some(1), Some(0)], &[Some(1), Some(0), Some(0)]);
    assert!(check_round(&r, &RuleSet::default()).is_ok());
}

#[test]
fn actuals_must_cover_every_card() {
    let r = round(2, &[Some(1), Some(1), Some(0)], &[Some(1), Some(1), Some(0)]);
    assert_eq!(
        kind_of(&r, &RuleSet::default()),
        Some(ValidationKind::ActualMismatch)
    );
}

#[test]
fn prediction_above_cards_dealt_is_out_of_range() {
    let r = round(0, &[Some(2), Some(0), Some(0)], &[Some(1), Some(0), Some(0)]);
    assert_eq!(
        kind_of(&r, &RuleSet::default()),
        Some(ValidationKind::PredictionOutOfRange)
    );
}

#[test]
fn checks_stop_at_the_first_failure_in_order() {
    // Missing prediction wins over missing actual
    let r = round(1, &[Some(1), None], &[None, Some(1)]);
    assert_eq!(
        kind_of(&r, &RuleSet::default()),
        Some(ValidationKind::PredictionMissing)
    );

    // Missing actual wins over out-of-range prediction
    let r = round(1, &[Some(5), Some(0)], &[Some(2), None]);
    assert_eq!(
        kind_of(&r, &RuleSet::default()),
        Some(ValidationKind::ActualMissing)
    );

    // Out-of-range wins over the rule and the actual total
    let r = round(1, &[Some(3), Some(0)], &[Some(0), Some(0)]);
    assert_eq!(
        kind_of(&r, &RuleSet::default()),
        Some(ValidationKind::PredictionOutOfRange)
    );

    // Rule wins over the actual total
    let r = round(1, &[Some(1), Some(1)], &[Some(0), Some(0)]);
    assert_eq!(
        kind_of(&r, &RuleSet::default()),
        Some(ValidationKind::RuleViolation(RuleId::NoMatchingPrediction))
    );
    assert_eq!(
        kind_of(&r, &rules_without_match_rule()),
        Some(ValidationKind::ActualMismatch)
    );
}

#[test]
fn zero_predictions_are_set_values_not_missing() {
    let r = round(0, &[Some(0), Some(0)], &[Some(1), Some(0)]);
    assert!(check_round(&r, &RuleSet::default()).is_ok());
}

#[test]
fn prediction_of_every_card_dealt_is_in_range() {
    let r = round(2, &[Some(3), Some(0), Some(1)], &[Some(3), Some(0), Some(0)]);
    assert!(check_round(&r, &RuleSet::default()).is_ok());
}
