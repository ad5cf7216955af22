use crate::domain::ledger::{Ledger, PlayerId, RoundData};
use crate::domain::rules::{cards_for_round, valid_value_range, RuleId, RuleSet};
use crate::errors::domain::{DomainError, ValidationKind};

pub const EXACT_BASE: i32 = 20;
pub const POINTS_PER_HIT: i32 = 10;
pub const PENALTY_PER_MISS: i32 = 10;

/// Score delta for one player's round.
///
/// Exact prediction: `20 + 10 * actual`. Otherwise `-10` per hit of distance.
pub fn score_delta(prediction: u8, actual: u8) -> i32 {
    if prediction == actual {
        EXACT_BASE + POINTS_PER_HIT * actual as i32
    } else {
        -PENALTY_PER_MISS * (prediction as i32 - actual as i32).abs()
    }
}

/// Recompute one slot after either of its values changed.
///
/// Writes the delta when both values are present and unsets it otherwise.
pub fn rescore_slot(
    ledger: &mut Ledger,
    round_idx: usize,
    player: PlayerId,
) -> Result<Option<i32>, DomainError> {
    let pair = ledger.round(round_idx)?.pair(player);
    match pair {
        Some((prediction, actual)) => {
            let delta = score_delta(prediction, actual);
            ledger.set_score_change(round_idx, player, delta)?;
            Ok(Some(delta))
        }
        None => {
            ledger.clear_score_change(round_idx, player)?;
            Ok(None)
        }
    }
}

/// Check whether the table may move past `round`.
///
/// Checks run in a fixed order and stop at the first failure:
/// missing predictions, missing actuals, predictions above the cards dealt,
/// the no-matching-prediction rule, then the actual total.
pub fn check_round(round: &RoundData, rules: &RuleSet) -> Result<(), DomainError> {
    let cards = cards_for_round(round.id);
    let round_no = round.id + 1;

    if round.predictions.iter().any(Option::is_none) {
        return Err(DomainError::validation(
            ValidationKind::PredictionMissing,
            format!("Round {round_no}: a prediction is missing"),
        ));
    }
    if round.actuals.iter().any(Option::is_none) {
        return Err(DomainError::validation(
            ValidationKind::ActualMissing,
            format!("Round {round_no}: an actual is missing"),
        ));
    }
    let range = valid_value_range(round.id);
    if let Some(p) = round
        .predictions
        .iter()
        .flatten()
        .find(|&&p| !range.contains(&(p as usize)))
    {
        return Err(DomainError::validation(
            ValidationKind::PredictionOutOfRange,
            format!("Round {round_no}: prediction {p} exceeds {cards} cards dealt"),
        ));
    }

    let predicted = round.prediction_sum();
    if rules.is_active(RuleId::NoMatchingPrediction) && predicted == cards {
        return Err(DomainError::validation(
            ValidationKind::RuleViolation(RuleId::NoMatchingPrediction),
            format!("Round {round_no}: predictions sum to the {cards} cards dealt"),
        ));
    }

    let taken = round.actual_sum();
    if taken != cards {
        return Err(DomainError::validation(
            ValidationKind::ActualMismatch,
            format!("Round {round_no}: actuals sum to {taken}, expected {cards}"),
        ));
    }

    Ok(())
}
