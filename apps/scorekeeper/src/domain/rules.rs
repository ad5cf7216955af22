use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

pub const DECK_SIZE: usize = 60;
pub const MIN_PLAYERS: usize = 2;
pub const MAX_PLAYERS: usize = 6;
pub const DEFAULT_PLAYERS: usize = 3;

/// Number of rounds for a table of `player_count`: the deck is spread over
/// the players, one extra card per round.
pub fn round_count(player_count: usize) -> usize {
    if player_count == 0 {
        return 0;
    }
    DECK_SIZE.div_ceil(player_count)
}

/// Cards dealt in a zero-based round.
#[inline]
pub fn cards_for_round(round_idx: usize) -> usize {
    round_idx + 1
}

/// Values a prediction or actual may take in a zero-based round.
pub fn valid_value_range(round_idx: usize) -> RangeInclusive<usize> {
    0..=cards_for_round(round_idx)
}

pub fn is_supported_player_count(player_count: usize) -> bool {
    (MIN_PLAYERS..=MAX_PLAYERS).contains(&player_count)
}

/// Typed key for house rules.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "camelCase")]
pub enum RuleId {
    /// The table's combined prediction may not equal the cards dealt.
    #[default]
    NoMatchingPrediction,
}

impl RuleId {
    pub const ALL: [RuleId; 1] = [RuleId::NoMatchingPrediction];

    pub fn default_rule(self) -> Rule {
        match self {
            RuleId::NoMatchingPrediction => Rule {
                id: self,
                name: "No matching prediction".to_string(),
                description: "Players are not allowed to set predictions equal to the number of hits per round.".to_string(),
                active: true,
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    /// Older records carry no id; the only rule there is then is meant.
    #[serde(default)]
    pub id: RuleId,
    pub name: String,
    pub description: String,
    pub active: bool,
}

/// Keyed rule table. Keeps insertion order for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    pub fn get(&self, id: RuleId) -> Option<&Rule> {
        self.rules.iter().find(|r| r.id == id)
    }

    /// Unknown rules count as inactive.
    pub fn is_active(&self, id: RuleId) -> bool {
        self.get(id).is_some_and(|r| r.active)
    }

    pub fn set_active(&mut self, id: RuleId, active: bool) {
        match self.rules.iter_mut().find(|r| r.id == id) {
            Some(rule) => rule.active = active,
            None => {
                let mut rule = id.default_rule();
                rule.active = active;
                self.rules.push(rule);
            }
        }
    }

    /// Flip a rule and return its new state.
    pub fn toggle(&mut self, id: RuleId) -> bool {
        let next = !self.is_active(id);
        self.set_active(id, next);
        next
    }

    pub fn iter(&self) -> impl Iterator<Item = &Rule> {
        self.rules.iter()
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        Self {
            rules: RuleId::ALL.iter().map(|id| id.default_rule()).collect(),
        }
    }
}
