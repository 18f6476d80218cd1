//! TallyEngine: pure functions from weighted votes to percentages and quorum.

pub mod engine;
pub mod rule;

pub use engine::{
    MeetingQuorum, TallyResult, chair_election_result, compute_item_result,
    compute_meeting_quorum,
};
pub use rule::DecisionRule;
