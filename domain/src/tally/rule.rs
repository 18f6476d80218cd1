//! Decision rule for agenda items

use crate::meeting::ThresholdPolicy;
use serde::{Deserialize, Serialize};

/// Which rule decides whether an agenda item passes
///
/// - `FlatMajority`: more than 50% of the cast area, whatever policy the item carries
/// - `ItemPolicy`: the item's own [`ThresholdPolicy`]
///
/// Both rules measure "for" against the cast area, abstentions included.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DecisionRule {
    #[default]
    FlatMajority,
    ItemPolicy,
}

impl DecisionRule {
    /// Apply the rule to a "for" percentage
    pub fn is_met(&self, percent_for: f64, policy: &ThresholdPolicy) -> bool {
        match self {
            DecisionRule::FlatMajority => percent_for > 50.0,
            DecisionRule::ItemPolicy => policy.is_met(percent_for),
        }
    }
}

impl std::str::FromStr for DecisionRule {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "flat" | "flat_majority" | "majority" => Ok(DecisionRule::FlatMajority),
            "policy" | "item_policy" => Ok(DecisionRule::ItemPolicy),
            _ => Err(format!(
                "Unknown decision rule: {}. Valid: flat_majority, item_policy",
                s
            )),
        }
    }
}
