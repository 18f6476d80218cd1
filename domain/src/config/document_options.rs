//! Document composition options

use crate::labels::Locale;
use crate::tally::DecisionRule;
use serde::{Deserialize, Serialize};

/// When an agenda item gets an itemized voter table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum VoterListPolicy {
    /// Only items where at least one voter left a comment
    #[default]
    WithComments,
    /// Every item that has grouped votes
    Always,
    /// Never
    Never,
}

impl std::str::FromStr for VoterListPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "with_comments" | "comments" => Ok(VoterListPolicy::WithComments),
            "always" => Ok(VoterListPolicy::Always),
            "never" => Ok(VoterListPolicy::Never),
            _ => Err(format!(
                "Unknown voter list policy: {}. Valid: with_comments, always, never",
                s
            )),
        }
    }
}

/// Options that shape the composed document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct DocumentOptions {
    pub locale: Locale,
    pub decision_rule: DecisionRule,
    pub voter_lists: VoterListPolicy,
}

impl DocumentOptions {
    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    pub fn with_decision_rule(mut self, rule: DecisionRule) -> Self {
        self.decision_rule = rule;
        self
    }

    pub fn with_voter_lists(mut self, policy: VoterListPolicy) -> Self {
        self.voter_lists = policy;
        self
    }
}
