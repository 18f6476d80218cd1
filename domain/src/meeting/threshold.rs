//! Threshold policies for agenda item decisions
//!
//! A threshold policy names the minimum share of "for" votes an agenda item
//! needs to pass.

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// Minimum "for" share required for an agenda item to pass
///
/// # Example
///
/// ```
/// use protocol_domain::meeting::ThresholdPolicy;
///
/// let policy = ThresholdPolicy::SimpleMajority;
/// assert!(policy.is_met(50.5));
/// assert!(!policy.is_met(50.0));
///
/// let qualified = ThresholdPolicy::TwoThirds;
/// assert!(qualified.is_met(70.0));
/// assert!(!qualified.is_met(60.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ThresholdPolicy {
    /// More than half of the cast area
    #[default]
    SimpleMajority,

    /// At least two thirds of the cast area
    TwoThirds,

    /// At least three quarters of the cast area
    ThreeQuarters,

    /// At least this percentage of the cast area (0-100)
    Percentage(f64),
}

impl ThresholdPolicy {
    /// Minimum "for" share in percent
    pub fn min_for_percent(&self) -> f64 {
        match self {
            ThresholdPolicy::SimpleMajority => 50.0,
            ThresholdPolicy::TwoThirds => 200.0 / 3.0,
            ThresholdPolicy::ThreeQuarters => 75.0,
            ThresholdPolicy::Percentage(p) => p.clamp(0.0, 100.0),
        }
    }

    /// Check whether a "for" percentage satisfies this policy
    ///
    /// Simple majority is strict (`> 50`); the qualified policies are
    /// inclusive of their bound.
    pub fn is_met(&self, percent_for: f64) -> bool {
        match self {
            ThresholdPolicy::SimpleMajority => percent_for > 50.0,
            _ => percent_for >= self.min_for_percent(),
        }
    }

    /// Get a human-readable description of this policy
    pub fn description(&self) -> String {
        match self {
            ThresholdPolicy::SimpleMajority => "simple majority (more than 50%)".to_string(),
            ThresholdPolicy::TwoThirds => "two thirds (at least 66.67%)".to_string(),
            ThresholdPolicy::ThreeQuarters => "three quarters (at least 75%)".to_string(),
            ThresholdPolicy::Percentage(p) => format!("at least {}%", p),
        }
    }
}

impl std::fmt::Display for ThresholdPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.description())
    }
}

impl std::str::FromStr for ThresholdPolicy {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "majority" | "simple_majority" | "simple" => Ok(ThresholdPolicy::SimpleMajority),
            "two_thirds" | "2/3" => Ok(ThresholdPolicy::TwoThirds),
            "three_quarters" | "3/4" => Ok(ThresholdPolicy::ThreeQuarters),
            s if s.starts_with("percentage:") || s.ends_with('%') => {
                let num_str = s.trim_start_matches("percentage:").trim_end_matches('%');
                let p: f64 = num_str
                    .parse()
                    .map_err(|_| DomainError::InvalidThreshold(s.to_string()))?;
                if !(0.0..=100.0).contains(&p) {
                    return Err(DomainError::InvalidThreshold(s.to_string()));
                }
                Ok(ThresholdPolicy::Percentage(p))
            }
            other => Err(DomainError::InvalidThreshold(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_majority_is_strict() {
        let policy = ThresholdPolicy::SimpleMajority;
        assert!(!policy.is_met(50.0));
        assert!(policy.is_met(50.01));
        assert!(!policy.is_met(0.0));
    }

    #[test]
    fn test_two_thirds_boundary() {
        let policy = ThresholdPolicy::TwoThirds;
        assert!(policy.is_met(200.0 / 3.0));
        assert!(!policy.is_met(66.0));
    }

    #[test]
    fn test_percentage_is_clamped() {
        assert_eq!(ThresholdPolicy::Percentage(120.0).min_for_percent(), 100.0);
        assert_eq!(ThresholdPolicy::Percentage(-5.0).min_for_percent(), 0.0);
        assert!(ThresholdPolicy::Percentage(60.0).is_met(60.0));
    }

    #[test]
    fn test_parse_policy() {
        assert_eq!(
            "majority".parse::<ThresholdPolicy>().ok(),
            Some(ThresholdPolicy::SimpleMajority)
        );
        assert_eq!(
            "2/3".parse::<ThresholdPolicy>().ok(),
            Some(ThresholdPolicy::TwoThirds)
        );
        assert_eq!(
            "three_quarters".parse::<ThresholdPolicy>().ok(),
            Some(ThresholdPolicy::ThreeQuarters)
        );
        assert_eq!(
            "60%".parse::<ThresholdPolicy>().ok(),
            Some(ThresholdPolicy::Percentage(60.0))
        );
        assert_eq!(
            "percentage:55.5".parse::<ThresholdPolicy>().ok(),
            Some(ThresholdPolicy::Percentage(55.5))
        );
        assert!("150%".parse::<ThresholdPolicy>().is_err());
        assert!("unanimous".parse::<ThresholdPolicy>().is_err());
    }

    #[test]
    fn test_serde_forms() {
        let policy: ThresholdPolicy = serde_json::from_str("\"two_thirds\"").unwrap();
        assert_eq!(policy, ThresholdPolicy::TwoThirds);

        let policy: ThresholdPolicy = serde_json::from_str(r#"{"percentage": 60.0}"#).unwrap();
        assert_eq!(policy, ThresholdPolicy::Percentage(60.0));
    }

    #[test]
    fn test_default() {
        assert_eq!(ThresholdPolicy::default(), ThresholdPolicy::SimpleMajority);
    }
}
