//! Package model of the `.docx` container
//!
//! ```text
//! [Content_Types].xml            defaults rels/xml/png + document override
//! _rels/.rels                    -> word/document.xml
//! word/document.xml              markup, references images by r:embed
//! word/_rels/document.xml.rels   one entry per image, same ids as markup
//! word/media/logo.png            company QR
//! word/media/voter_<i>.png       voter QR, i = position in the vote list
//! ```
//!
//! Archiving itself is an infrastructure concern; this module only decides
//! what goes in and checks that the reference graph is closed.

pub mod model;
pub mod parts;
pub mod relationship;

pub use model::{
    DOCX_MIME_TYPE, MediaEntry, PackagePart, ProtocolDocument, ProtocolPackage,
    protocol_file_name,
};
pub use parts::{
    CONTENT_TYPES_PART, DOCUMENT_PART, DOCUMENT_RELATIONSHIPS_PART, ROOT_RELATIONSHIPS_PART,
};
pub use relationship::{
    LOGO_MEDIA_PATH, LOGO_RELATIONSHIP_ID, RelationshipEntry, RelationshipIdAllocator,
    RelationshipTable, voter_media_path,
};
