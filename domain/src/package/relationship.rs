//! Relationship ids for embedded images
//!
//! Every image in the document is referenced from the markup by a
//! relationship id and declared under the same id in
//! `word/_rels/document.xml.rels`. Ids come from one allocator per
//! generation call. Reserved ids are never handed out twice.

use std::collections::{BTreeMap, BTreeSet};

/// Relationship type of an embedded picture
pub const IMAGE_RELATIONSHIP_TYPE: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/image";

/// Content type of every embedded picture
pub const PNG_CONTENT_TYPE: &str = "image/png";

/// Fixed id of the company logo
pub const LOGO_RELATIONSHIP_ID: &str = "rId1";

/// Media path of the company logo, relative to `word/`
pub const LOGO_MEDIA_PATH: &str = "media/logo.png";

/// Media path of a voter's signature image, relative to `word/`.
///
/// `index` is the voter's position in the vote-record list.
pub fn voter_media_path(index: usize) -> String {
    format!("media/voter_{}.png", index)
}

/// One entry of the main part's relationship manifest
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelationshipEntry {
    pub id: String,
    /// Target path relative to `word/`
    pub target: String,
    pub content_type: &'static str,
}

impl RelationshipEntry {
    pub fn image(id: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            target: target.into(),
            content_type: PNG_CONTENT_TYPE,
        }
    }
}

/// Incrementing `rIdN` allocator with a reserved-id set
#[derive(Debug)]
pub struct RelationshipIdAllocator {
    next: u32,
    reserved: BTreeSet<String>,
}

impl RelationshipIdAllocator {
    /// Allocator with the logo id already reserved
    pub fn new() -> Self {
        let mut allocator = Self::empty();
        allocator.reserve(LOGO_RELATIONSHIP_ID);
        allocator
    }

    /// Allocator with nothing reserved
    pub fn empty() -> Self {
        Self {
            next: 1,
            reserved: BTreeSet::new(),
        }
    }

    /// Mark an id as taken. Returns `false` if it was already taken.
    pub fn reserve(&mut self, id: impl Into<String>) -> bool {
        self.reserved.insert(id.into())
    }

    /// Hand out the next free id
    pub fn allocate(&mut self) -> String {
        loop {
            let candidate = format!("rId{}", self.next);
            self.next += 1;
            if self.reserved.insert(candidate.clone()) {
                return candidate;
            }
        }
    }
}

impl Default for RelationshipIdAllocator {
    fn default() -> Self {
        Self::new()
    }
}

/// Relationship ids of one document: the logo and each signed voter
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RelationshipTable {
    logo: Option<RelationshipEntry>,
    voters: BTreeMap<usize, RelationshipEntry>,
}

impl RelationshipTable {
    /// Build the table once all renders have settled.
    ///
    /// `signed_voters` holds the vote-list positions whose image rendered.
    /// Ids are allocated in ascending position order no matter the order
    /// the positions are given in.
    pub fn build(logo_rendered: bool, signed_voters: impl IntoIterator<Item = usize>) -> Self {
        let mut allocator = RelationshipIdAllocator::new();

        let logo = logo_rendered
            .then(|| RelationshipEntry::image(LOGO_RELATIONSHIP_ID, LOGO_MEDIA_PATH));

        let positions: BTreeSet<usize> = signed_voters.into_iter().collect();
        let voters = positions
            .into_iter()
            .map(|index| {
                let entry = RelationshipEntry::image(allocator.allocate(), voter_media_path(index));
                (index, entry)
            })
            .collect();

        Self { logo, voters }
    }

    /// Id of the logo image, if it rendered
    pub fn logo_id(&self) -> Option<&str> {
        self.logo.as_ref().map(|e| e.id.as_str())
    }

    /// Id of a voter's image, if it rendered
    pub fn voter_id(&self, index: usize) -> Option<&str> {
        self.voters.get(&index).map(|e| e.id.as_str())
    }

    /// Entry of a voter's image, if it rendered
    pub fn voter_entry(&self, index: usize) -> Option<&RelationshipEntry> {
        self.voters.get(&index)
    }

    pub fn logo_entry(&self) -> Option<&RelationshipEntry> {
        self.logo.as_ref()
    }

    /// All entries: logo first, then voters by position
    pub fn entries(&self) -> impl Iterator<Item = &RelationshipEntry> {
        self.logo.iter().chain(self.voters.values())
    }

    pub fn len(&self) -> usize {
        usize::from(self.logo.is_some()) + self.voters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allocator_skips_reserved_logo_id() {
        let mut allocator = RelationshipIdAllocator::new();
        assert_eq!(allocator.allocate(), "rId2");
        assert_eq!(allocator.allocate(), "rId3");
    }

    #[test]
    fn test_allocator_skips_any_reserved_id() {
        let mut allocator = RelationshipIdAllocator::empty();
        allocator.reserve("rId2");
        allocator.reserve("rId3");
        assert_eq!(allocator.allocate(), "rId1");
        assert_eq!(allocator.allocate(), "rId4");
        assert!(!allocator.reserve("rId4"));
    }

    #[test]
    fn test_allocator_never_repeats() {
        let mut allocator = RelationshipIdAllocator::new();
        let ids: BTreeSet<String> = (0..500).map(|_| allocator.allocate()).collect();
        assert_eq!(ids.len(), 500);
        assert!(!ids.contains(LOGO_RELATIONSHIP_ID));
    }

    #[test]
    fn test_table_orders_by_position_not_arrival() {
        let table = RelationshipTable::build(true, [4, 0, 2]);
        assert_eq!(table.logo_id(), Some("rId1"));
        assert_eq!(table.voter_id(0), Some("rId2"));
        assert_eq!(table.voter_id(2), Some("rId3"));
        assert_eq!(table.voter_id(4), Some("rId4"));
        assert_eq!(table.voter_id(1), None);
        assert_eq!(
            table.voter_entry(4).map(|e| e.target.as_str()),
            Some("media/voter_4.png")
        );
    }

    #[test]
    fn test_table_without_logo_still_reserves_logo_id() {
        let table = RelationshipTable::build(false, [0]);
        assert_eq!(table.logo_id(), None);
        assert_eq!(table.voter_id(0), Some("rId2"));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_entries_logo_first() {
        let table = RelationshipTable::build(true, [1, 0]);
        let ids: Vec<&str> = table.entries().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["rId1", "rId2", "rId3"]);
    }

    #[test]
    fn test_empty_voters_only_logo() {
        let table = RelationshipTable::build(true, std::iter::empty());
        assert_eq!(table.len(), 1);
        assert!(!table.is_empty());
        assert!(RelationshipTable::default().is_empty());
    }
}
