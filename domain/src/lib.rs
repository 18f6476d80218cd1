//! Domain layer for meeting-protocol
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Tally
//!
//! Each agenda item is decided by the areas voted for, against, and
//! abstaining. Percentages are taken over the cast area and compared against
//! the item's [`ThresholdPolicy`] under the configured [`DecisionRule`].
//!
//! ## Protocol document
//!
//! The [`DocumentComposer`] turns the meeting, the tallies, and a
//! [`RelationshipTable`] of rendered signature images into WordprocessingML
//! markup. The [`ProtocolPackage`] bundles that markup with its media and
//! checks that every image reference resolves.

pub mod config;
pub mod core;
pub mod document;
pub mod labels;
pub mod meeting;
pub mod package;
pub mod tally;

// Re-export commonly used types
pub use config::{
    CompanyProfile, DocumentOptions, MAX_QR_MARGIN, MAX_QR_WIDTH, QrOptions, SummaryFormat,
    VoterListPolicy, parse_hex_color,
};
pub use core::{
    error::DomainError,
    string::{format_area, format_percent, sanitize_file_segment},
};
pub use document::{
    ComposeContext, DocumentComposer, ItemMinutes, Markup, company_payload, escape_xml,
    voter_receipt_payload,
};
pub use labels::{Labels, Locale};
pub use meeting::{
    AgendaItem, Meeting, MeetingFormat, ProtocolInput, ThresholdPolicy, VoteChoice, VoteRecord,
};
pub use package::{
    DOCX_MIME_TYPE, MediaEntry, PackagePart, ProtocolDocument, ProtocolPackage, RelationshipEntry,
    RelationshipIdAllocator, RelationshipTable, protocol_file_name, voter_media_path,
};
pub use tally::{
    DecisionRule, MeetingQuorum, TallyResult, chair_election_result, compute_item_result,
    compute_meeting_quorum,
};
