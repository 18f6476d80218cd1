//! Fixed package parts: content types and relationship manifests

use super::relationship::{IMAGE_RELATIONSHIP_TYPE, RelationshipEntry};
use crate::document::escape_xml;

pub const CONTENT_TYPES_PART: &str = "[Content_Types].xml";
pub const ROOT_RELATIONSHIPS_PART: &str = "_rels/.rels";
pub const DOCUMENT_PART: &str = "word/document.xml";
pub const DOCUMENT_RELATIONSHIPS_PART: &str = "word/_rels/document.xml.rels";

/// Directory of the main part; relationship targets are relative to it
pub const DOCUMENT_DIR: &str = "word/";

pub const DOCUMENT_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml";
const RELATIONSHIPS_CONTENT_TYPE: &str = "application/vnd.openxmlformats-package.relationships+xml";
const OFFICE_DOCUMENT_RELATIONSHIP_TYPE: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument";

const XML_DECLARATION: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>";
const RELATIONSHIPS_NS: &str = "http://schemas.openxmlformats.org/package/2006/relationships";

/// `[Content_Types].xml`
pub fn content_types_xml() -> String {
    format!(
        "{XML_DECLARATION}<Types xmlns=\"http://schemas.openxmlformats.org/package/2006/content-types\">\
         <Default Extension=\"rels\" ContentType=\"{RELATIONSHIPS_CONTENT_TYPE}\"/>\
         <Default Extension=\"xml\" ContentType=\"application/xml\"/>\
         <Default Extension=\"png\" ContentType=\"image/png\"/>\
         <Override PartName=\"/{DOCUMENT_PART}\" ContentType=\"{DOCUMENT_CONTENT_TYPE}\"/>\
         </Types>"
    )
}

/// `_rels/.rels`
pub fn root_relationships_xml() -> String {
    format!(
        "{XML_DECLARATION}<Relationships xmlns=\"{RELATIONSHIPS_NS}\">\
         <Relationship Id=\"rId1\" Type=\"{OFFICE_DOCUMENT_RELATIONSHIP_TYPE}\" Target=\"{DOCUMENT_PART}\"/>\
         </Relationships>"
    )
}

/// `word/_rels/document.xml.rels`
pub fn document_relationships_xml<'a>(
    entries: impl IntoIterator<Item = &'a RelationshipEntry>,
) -> String {
    let mut xml = format!("{XML_DECLARATION}<Relationships xmlns=\"{RELATIONSHIPS_NS}\">");
    for entry in entries {
        xml.push_str(&format!(
            "<Relationship Id=\"{}\" Type=\"{}\" Target=\"{}\"/>",
            escape_xml(&entry.id),
            IMAGE_RELATIONSHIP_TYPE,
            escape_xml(&entry.target)
        ));
    }
    xml.push_str("</Relationships>");
    xml
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::package::relationship::RelationshipTable;

    #[test]
    fn test_content_types_declares_defaults_and_override() {
        let xml = content_types_xml();
        assert!(xml.contains("<Default Extension=\"rels\""));
        assert!(xml.contains("<Default Extension=\"xml\" ContentType=\"application/xml\"/>"));
        assert!(xml.contains("<Default Extension=\"png\" ContentType=\"image/png\"/>"));
        assert_eq!(xml.matches("<Override ").count(), 1);
        assert!(xml.contains(
            "PartName=\"/word/document.xml\" ContentType=\"application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml\""
        ));
    }

    #[test]
    fn test_root_relationship_points_at_document() {
        let xml = root_relationships_xml();
        assert!(xml.contains("Target=\"word/document.xml\""));
        assert!(xml.ends_with("/officeDocument\" Target=\"word/document.xml\"/></Relationships>"));
    }

    #[test]
    fn test_document_relationships_one_per_image() {
        let table = RelationshipTable::build(true, [0, 3]);
        let xml = document_relationships_xml(table.entries());
        assert_eq!(xml.matches("<Relationship ").count(), 3);
        assert!(xml.contains("Id=\"rId1\""));
        assert!(xml.contains("Target=\"media/logo.png\""));
        assert!(xml.contains("Id=\"rId3\" Type=\"http://schemas.openxmlformats.org/officeDocument/2006/relationships/image\" Target=\"media/voter_3.png\""));
    }

    #[test]
    fn test_document_relationships_empty() {
        let xml = document_relationships_xml(std::iter::empty());
        assert!(xml.ends_with("<Relationships xmlns=\"http://schemas.openxmlformats.org/package/2006/relationships\"></Relationships>"));
    }
}
