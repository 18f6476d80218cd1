//! Meeting entities
//!
//! These records arrive already validated and aggregated from the meeting
//! workflow. They are read-only for the whole generation call.

use super::threshold::ThresholdPolicy;
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// How the meeting was held
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum MeetingFormat {
    /// Owners gathered in person
    #[default]
    InPerson,
    /// Written (absentee) voting
    Absentee,
    /// In-person discussion with absentee voting
    Mixed,
}

/// A homeowners' meeting whose votes are final
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Meeting {
    pub id: String,
    /// Protocol number printed on the document and in receipts
    pub number: String,
    /// Total owned area of the building in square metres
    pub total_area: f64,
    /// Area of the owners who took part
    pub voted_area: f64,
    /// Participation as stored by the workflow (informational)
    #[serde(default)]
    pub participation_percent: f64,
    /// Participation required for the meeting to be valid
    pub quorum_percent: f64,
    /// Quorum flag as stored by the workflow (informational)
    #[serde(default)]
    pub quorum_reached: bool,
    #[serde(default)]
    pub format: MeetingFormat,
    pub confirmed_at: DateTime<FixedOffset>,
    pub organizer_name: String,
    pub building_address: String,
}

/// An agenda item with pre-aggregated vote areas
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AgendaItem {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub threshold: ThresholdPolicy,
    #[serde(default)]
    pub votes_for_area: f64,
    #[serde(default)]
    pub votes_against_area: f64,
    #[serde(default)]
    pub votes_abstain_area: f64,
}

impl AgendaItem {
    /// Create an item with no votes and the default policy
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: None,
            threshold: ThresholdPolicy::default(),
            votes_for_area: 0.0,
            votes_against_area: 0.0,
            votes_abstain_area: 0.0,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_threshold(mut self, threshold: ThresholdPolicy) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn with_areas(mut self, for_area: f64, against_area: f64, abstain_area: f64) -> Self {
        self.votes_for_area = for_area;
        self.votes_against_area = against_area;
        self.votes_abstain_area = abstain_area;
        self
    }
}

/// A voter's choice on an agenda item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VoteChoice {
    For,
    Against,
    Abstain,
}

/// A single weighted vote
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VoteRecord {
    pub voter_id: String,
    pub voter_name: String,
    #[serde(default)]
    pub apartment_number: Option<String>,
    /// Owned area in square metres
    pub vote_weight: f64,
    pub choice: VoteChoice,
    pub voted_at: DateTime<FixedOffset>,
    #[serde(default)]
    pub comment: Option<String>,
}

impl VoteRecord {
    /// Comment text, if the voter left a non-blank one
    pub fn justification(&self) -> Option<&str> {
        self.comment
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty())
    }
}

/// Everything one protocol generation needs
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProtocolInput {
    pub meeting: Meeting,
    /// Agenda items in meeting order
    #[serde(default)]
    pub agenda_items: Vec<AgendaItem>,
    /// Full vote list; its order fixes the signature registry order
    #[serde(default)]
    pub votes: Vec<VoteRecord>,
    /// Vote records grouped by agenda item id
    #[serde(default)]
    pub votes_by_item: BTreeMap<String, Vec<VoteRecord>>,
}

impl ProtocolInput {
    /// Votes recorded for one agenda item (empty if none were grouped)
    pub fn votes_for_item(&self, item_id: &str) -> &[VoteRecord] {
        self.votes_by_item
            .get(item_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "meeting": {
            "id": "m-1",
            "number": "17",
            "total_area": 1000.0,
            "voted_area": 700.0,
            "quorum_percent": 50.0,
            "format": "absentee",
            "confirmed_at": "2026-03-05T18:30:00+05:00",
            "organizer_name": "Иванов И. И.",
            "building_address": "ул. Абая 10"
        },
        "agenda_items": [
            {"id": "a-1", "title": "Ремонт крыши", "threshold": {"percentage": 60.0},
             "votes_for_area": 600.0, "votes_against_area": 100.0}
        ],
        "votes": [
            {"voter_id": "v-1", "voter_name": "Петров", "vote_weight": 70.5,
             "choice": "for", "voted_at": "2026-03-04T10:00:00+05:00", "comment": "  "}
        ],
        "votes_by_item": {}
    }"#;

    #[test]
    fn test_deserialize_input() {
        let input: ProtocolInput = serde_json::from_str(SAMPLE).unwrap();
        assert_eq!(input.meeting.format, MeetingFormat::Absentee);
        assert_eq!(input.agenda_items[0].threshold, ThresholdPolicy::Percentage(60.0));
        assert_eq!(input.agenda_items[0].votes_abstain_area, 0.0);
        assert_eq!(input.votes[0].choice, VoteChoice::For);
        assert!(input.votes[0].apartment_number.is_none());
    }

    #[test]
    fn test_blank_comment_is_not_a_justification() {
        let input: ProtocolInput = serde_json::from_str(SAMPLE).unwrap();
        assert_eq!(input.votes[0].justification(), None);

        let mut vote = input.votes[0].clone();
        vote.comment = Some(" too expensive ".to_string());
        assert_eq!(vote.justification(), Some("too expensive"));
    }

    #[test]
    fn test_votes_for_missing_item_is_empty() {
        let input: ProtocolInput = serde_json::from_str(SAMPLE).unwrap();
        assert!(input.votes_for_item("a-1").is_empty());
    }

    #[test]
    fn test_agenda_item_builder() {
        let item = AgendaItem::new("a", "Budget")
            .with_description("Annual budget")
            .with_threshold(ThresholdPolicy::TwoThirds)
            .with_areas(1.0, 2.0, 3.0);
        assert_eq!(item.description.as_deref(), Some("Annual budget"));
        assert_eq!(item.votes_against_area, 2.0);
    }
}
