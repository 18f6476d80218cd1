//! Area-weighted vote tabulation
//!
//! Percentages for an agenda item are shares of the *cast* area
//! (for + against + abstain). The building's total area only feeds the
//! meeting-level participation figure.

use super::rule::DecisionRule;
use crate::meeting::{AgendaItem, Meeting};
use serde::{Deserialize, Serialize};

/// Tally of one agenda item
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TallyResult {
    pub votes_for: f64,
    pub votes_against: f64,
    pub votes_abstain: f64,
    pub percent_for: f64,
    pub percent_against: f64,
    pub percent_abstain: f64,
    pub threshold_met: bool,
}

impl TallyResult {
    /// Total cast area
    pub fn cast_area(&self) -> f64 {
        self.votes_for + self.votes_against + self.votes_abstain
    }
}

/// Meeting-level participation and quorum
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MeetingQuorum {
    pub total_area: f64,
    pub voted_area: f64,
    pub participation_percent: f64,
    pub required_percent: f64,
    pub quorum_reached: bool,
}

/// Negative and non-finite areas count as zero
fn area(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

fn share(part: f64, whole: f64) -> f64 {
    if whole > 0.0 { part / whole * 100.0 } else { 0.0 }
}

/// Tally an agenda item.
///
/// `total_area` is accepted for symmetry with the meeting figures but never
/// used as a percentage denominator.
pub fn compute_item_result(item: &AgendaItem, _total_area: f64, rule: DecisionRule) -> TallyResult {
    let votes_for = area(item.votes_for_area);
    let votes_against = area(item.votes_against_area);
    let votes_abstain = area(item.votes_abstain_area);
    let cast = votes_for + votes_against + votes_abstain;

    let percent_for = share(votes_for, cast);

    TallyResult {
        votes_for,
        votes_against,
        votes_abstain,
        percent_for,
        percent_against: share(votes_against, cast),
        percent_abstain: share(votes_abstain, cast),
        threshold_met: rule.is_met(percent_for, &item.threshold),
    }
}

/// Participation of the meeting and whether it reached quorum
pub fn compute_meeting_quorum(meeting: &Meeting) -> MeetingQuorum {
    let total_area = area(meeting.total_area);
    let voted_area = area(meeting.voted_area);
    let participation_percent = share(voted_area, total_area);

    MeetingQuorum {
        total_area,
        voted_area,
        participation_percent,
        required_percent: meeting.quorum_percent,
        quorum_reached: participation_percent >= meeting.quorum_percent,
    }
}

/// Result of the procedural first item (electing the chair and secretary),
/// which is recorded as unanimous with the whole participating area "for".
pub fn chair_election_result(meeting: &Meeting) -> TallyResult {
    TallyResult {
        votes_for: area(meeting.voted_area),
        votes_against: 0.0,
        votes_abstain: 0.0,
        percent_for: 100.0,
        percent_against: 0.0,
        percent_abstain: 0.0,
        threshold_met: true,
    }
}
