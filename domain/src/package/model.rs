//! In-memory package model and the downloadable result

use super::parts::{
    CONTENT_TYPES_PART, DOCUMENT_DIR, DOCUMENT_PART, DOCUMENT_RELATIONSHIPS_PART,
    ROOT_RELATIONSHIPS_PART, content_types_xml, document_relationships_xml,
    root_relationships_xml,
};
use super::relationship::RelationshipEntry;
use crate::core::error::DomainError;
use crate::core::string::sanitize_file_segment;
use crate::document::embedded_relationship_ids;
use std::collections::{BTreeMap, BTreeSet};

/// MIME type of a WordprocessingML document
pub const DOCX_MIME_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

/// Raw bytes of an embedded picture
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaEntry {
    /// Path relative to `word/`, equal to the relationship target
    pub path: String,
    pub bytes: Vec<u8>,
}

impl MediaEntry {
    pub fn new(path: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            path: path.into(),
            bytes,
        }
    }

    /// Full path inside the archive
    pub fn archive_path(&self) -> String {
        format!("{}{}", DOCUMENT_DIR, self.path)
    }
}

/// A named part ready to be written to the archive
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackagePart {
    pub name: String,
    pub bytes: Vec<u8>,
}

/// Everything that goes into the archive
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProtocolPackage {
    pub document_xml: String,
    pub relationships: Vec<RelationshipEntry>,
    pub media: Vec<MediaEntry>,
}

impl ProtocolPackage {
    pub fn new(
        document_xml: String,
        relationships: Vec<RelationshipEntry>,
        media: Vec<MediaEntry>,
    ) -> Self {
        Self {
            document_xml,
            relationships,
            media,
        }
    }

    /// Check the reference graph.
    ///
    /// Every id referenced in the markup has exactly one manifest entry,
    /// every manifest entry is referenced, and every manifest target has
    /// media bytes (and vice versa).
    pub fn validate(&self) -> Result<(), DomainError> {
        let mut declared: BTreeMap<&str, &RelationshipEntry> = BTreeMap::new();
        for entry in &self.relationships {
            if declared.insert(entry.id.as_str(), entry).is_some() {
                return Err(DomainError::DuplicateRelationship(entry.id.clone()));
            }
        }

        let referenced: BTreeSet<String> = embedded_relationship_ids(&self.document_xml)
            .into_iter()
            .collect();
        if let Some(missing) = referenced.iter().find(|id| !declared.contains_key(id.as_str())) {
            return Err(DomainError::UnresolvedRelationship(missing.clone()));
        }
        if let Some(orphan) = declared.keys().find(|id| !referenced.contains(**id)) {
            return Err(DomainError::OrphanRelationship((*orphan).to_string()));
        }

        let stored: BTreeSet<&str> = self.media.iter().map(|m| m.path.as_str()).collect();
        if let Some(entry) = declared.values().find(|e| !stored.contains(e.target.as_str())) {
            return Err(DomainError::MissingMedia(entry.target.clone()));
        }
        let targets: BTreeSet<&str> = declared.values().map(|e| e.target.as_str()).collect();
        if let Some(media) = self.media.iter().find(|m| !targets.contains(m.path.as_str())) {
            return Err(DomainError::OrphanRelationship(media.path.clone()));
        }
        Ok(())
    }

    /// Parts in archive order: manifests, markup, then media
    pub fn parts(&self) -> Vec<PackagePart> {
        let mut parts = vec![
            PackagePart {
                name: CONTENT_TYPES_PART.to_string(),
                bytes: content_types_xml().into_bytes(),
            },
            PackagePart {
                name: ROOT_RELATIONSHIPS_PART.to_string(),
                bytes: root_relationships_xml().into_bytes(),
            },
            PackagePart {
                name: DOCUMENT_PART.to_string(),
                bytes: self.document_xml.clone().into_bytes(),
            },
            PackagePart {
                name: DOCUMENT_RELATIONSHIPS_PART.to_string(),
                bytes: document_relationships_xml(&self.relationships).into_bytes(),
            },
        ];
        parts.extend(self.media.iter().map(|m| PackagePart {
            name: m.archive_path(),
            bytes: m.bytes.clone(),
        }));
        parts
    }
}

/// The finished protocol, ready to be saved or downloaded
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProtocolDocument {
    pub file_name: String,
    pub mime_type: &'static str,
    pub bytes: Vec<u8>,
}

impl ProtocolDocument {
    pub fn new(meeting_number: &str, building_address: &str, bytes: Vec<u8>) -> Self {
        Self {
            file_name: protocol_file_name(meeting_number, building_address),
            mime_type: DOCX_MIME_TYPE,
            bytes,
        }
    }
}

/// `Protocol_<number>_<sanitizedAddress>.docx`
pub fn protocol_file_name(meeting_number: &str, building_address: &str) -> String {
    format!(
        "Protocol_{}_{}.docx",
        sanitize_file_segment(meeting_number),
        sanitize_file_segment(building_address)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::package::relationship::{LOGO_MEDIA_PATH, RelationshipTable};

    fn markup(ids: &[&str]) -> String {
        ids.iter()
            .map(|id| format!("<a:blip r:embed=\"{}\"/>", id))
            .collect()
    }

    fn package(ids: &[&str], table: &RelationshipTable) -> ProtocolPackage {
        ProtocolPackage::new(
            markup(ids),
            table.entries().cloned().collect(),
            table
                .entries()
                .map(|e| MediaEntry::new(e.target.clone(), vec![1, 2, 3]))
                .collect(),
        )
    }

    #[test]
    fn test_valid_package() {
        let table = RelationshipTable::build(true, [0, 1]);
        assert_eq!(package(&["rId1", "rId2", "rId3"], &table).validate(), Ok(()));
    }

    #[test]
    fn test_unresolved_reference() {
        let table = RelationshipTable::build(true, [0]);
        assert_eq!(
            package(&["rId1", "rId2", "rId9"], &table).validate(),
            Err(DomainError::UnresolvedRelationship("rId9".to_string()))
        );
    }

    #[test]
    fn test_orphan_manifest_entry() {
        let table = RelationshipTable::build(true, [0]);
        assert_eq!(
            package(&["rId1"], &table).validate(),
            Err(DomainError::OrphanRelationship("rId2".to_string()))
        );
    }

    #[test]
    fn test_duplicate_manifest_id() {
        let table = RelationshipTable::build(true, []);
        let mut pkg = package(&["rId1"], &table);
        pkg.relationships.push(RelationshipEntry::image("rId1", "media/other.png"));
        assert_eq!(
            pkg.validate(),
            Err(DomainError::DuplicateRelationship("rId1".to_string()))
        );
    }

    #[test]
    fn test_missing_media_bytes() {
        let table = RelationshipTable::build(true, []);
        let mut pkg = package(&["rId1"], &table);
        pkg.media.clear();
        assert_eq!(
            pkg.validate(),
            Err(DomainError::MissingMedia(LOGO_MEDIA_PATH.to_string()))
        );
    }

    #[test]
    fn test_media_without_relationship() {
        let table = RelationshipTable::build(true, []);
        let mut pkg = package(&["rId1"], &table);
        pkg.media.push(MediaEntry::new("media/stray.png", vec![0]));
        assert_eq!(
            pkg.validate(),
            Err(DomainError::OrphanRelationship("media/stray.png".to_string()))
        );
    }

    #[test]
    fn test_parts_order_and_paths() {
        let table = RelationshipTable::build(true, [4]);
        let names: Vec<String> = package(&["rId1", "rId2"], &table)
            .parts()
            .into_iter()
            .map(|p| p.name)
            .collect();
        assert_eq!(
            names,
            vec![
                "[Content_Types].xml",
                "_rels/.rels",
                "word/document.xml",
                "word/_rels/document.xml.rels",
                "word/media/logo.png",
                "word/media/voter_4.png",
            ]
        );
    }

    #[test]
    fn test_file_name() {
        let doc = ProtocolDocument::new("17", "ул. Foo #5/A", vec![]);
        assert_eq!(doc.file_name, "Protocol_17_ул__Foo__5_A.docx");
        assert_eq!(doc.mime_type, DOCX_MIME_TYPE);

        let segment = doc
            .file_name
            .trim_start_matches("Protocol_17_")
            .trim_end_matches(".docx");
        assert!(segment.chars().all(|c| c.is_ascii_alphanumeric()
            || c == '_'
            || matches!(c, 'А'..='Я' | 'а'..='я' | 'Ё' | 'ё')));
    }
}
