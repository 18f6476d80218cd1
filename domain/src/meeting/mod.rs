//! Meeting input domain
//!
//! Read-only records describing a finalized homeowners' meeting: the meeting
//! itself, its agenda, and the weighted votes cast on it.

pub mod entities;
pub mod threshold;

pub use entities::{AgendaItem, Meeting, MeetingFormat, ProtocolInput, VoteChoice, VoteRecord};
pub use threshold::ThresholdPolicy;
