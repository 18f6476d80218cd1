//! Protocol document markup
//!
//! # Layout
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │  Cover      company QR + name, title,        │
//! │             date, venue, quorum summary      │
//! ├──────────────────────────────────────────────┤
//! │  Minutes    1. chair & secretary (100% for)  │
//! │             2..N agenda items: vote table,   │
//! │             optional voter list, decision    │
//! ├──────────────────────────────────────────────┤
//! │  Signatures chair / secretary lines          │
//! ├──────────────────────────────────────────────┤
//! │  Appendix   signature registry, one row per  │
//! │             voter, QR picture or ✓           │
//! └──────────────────────────────────────────────┘
//! ```
//!
//! All free text goes through [`xml::escape_xml`] via the builders in [`xml`].

pub mod composer;
mod cover;
pub mod drawing;
mod minutes;
pub mod payload;
mod registry;
pub mod xml;

pub use composer::{CONTENT_WIDTH, ComposeContext, DocumentComposer, ItemMinutes};
pub use drawing::embedded_relationship_ids;
pub use minutes::FIRST_ITEM_NUMBER;
pub use payload::{company_payload, voter_receipt_payload};
pub use registry::SIGNATURE_FALLBACK;
pub use xml::{Markup, escape_xml};
