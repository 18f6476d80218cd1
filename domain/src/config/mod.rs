//! Configuration value objects for the domain layer
//!
//! These are domain concepts related to configuration that are
//! used across multiple layers.

mod company;
mod document_options;
mod qr_options;
mod summary_format;

pub use company::CompanyProfile;
pub use document_options::{DocumentOptions, VoterListPolicy};
pub use qr_options::{MAX_QR_MARGIN, MAX_QR_WIDTH, QrOptions, parse_hex_color};
pub use summary_format::SummaryFormat;
