//! DocumentComposer: builds `word/document.xml`
//!
//! The composer is split across files the same way the document is split:
//!
//! - [`cover`](super::cover): company block, title, meeting details, quorum
//! - [`minutes`](super::minutes): agenda and one section per item
//! - [`registry`](super::registry): signature lines and the signature registry appendix

use super::drawing::inline_image;
use super::xml::Markup;
use crate::config::{CompanyProfile, DocumentOptions};
use crate::labels::Labels;
use crate::meeting::{AgendaItem, Meeting, VoteRecord};
use crate::package::RelationshipTable;
use crate::tally::{MeetingQuorum, TallyResult};

const DOCUMENT_OPEN: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\
<w:document \
xmlns:w=\"http://schemas.openxmlformats.org/wordprocessingml/2006/main\" \
xmlns:r=\"http://schemas.openxmlformats.org/officeDocument/2006/relationships\" \
xmlns:wp=\"http://schemas.openxmlformats.org/drawingml/2006/wordprocessingDrawing\" \
xmlns:a=\"http://schemas.openxmlformats.org/drawingml/2006/main\" \
xmlns:pic=\"http://schemas.openxmlformats.org/drawingml/2006/picture\"><w:body>";

/// A4 portrait with a 2.5 cm binding margin
const SECTION_PROPERTIES: &str = "<w:sectPr><w:pgSz w:w=\"11906\" w:h=\"16838\"/>\
<w:pgMar w:top=\"1134\" w:right=\"850\" w:bottom=\"1134\" w:left=\"1418\" \
w:header=\"709\" w:footer=\"709\" w:gutter=\"0\"/></w:sectPr>";

const DOCUMENT_CLOSE: &str = "</w:body></w:document>";

/// Usable page width in twips
pub const CONTENT_WIDTH: u32 = 11906 - 850 - 1418;

/// One agenda item with its tally and grouped votes
#[derive(Debug, Clone, Copy)]
pub struct ItemMinutes<'a> {
    pub item: &'a AgendaItem,
    pub result: TallyResult,
    pub votes: &'a [VoteRecord],
}

/// Everything the composer reads
#[derive(Debug, Clone, Copy)]
pub struct ComposeContext<'a> {
    pub meeting: &'a Meeting,
    pub company: &'a CompanyProfile,
    pub quorum: &'a MeetingQuorum,
    pub items: &'a [ItemMinutes<'a>],
    /// Full vote list in input order
    pub votes: &'a [VoteRecord],
    pub relationships: &'a RelationshipTable,
    pub options: &'a DocumentOptions,
}

pub struct DocumentComposer<'a> {
    pub(super) ctx: ComposeContext<'a>,
    pub(super) labels: &'static Labels,
    next_drawing_id: u32,
}

impl<'a> DocumentComposer<'a> {
    pub fn new(ctx: ComposeContext<'a>) -> Self {
        Self {
            ctx,
            labels: ctx.options.locale.labels(),
            next_drawing_id: 1,
        }
    }

    /// Compose the complete main document part
    pub fn compose(mut self) -> String {
        let mut body = Markup::new();
        body.push(self.cover());
        body.push(self.minutes());
        body.push(self.signatures());
        body.push(self.registry());

        let mut xml = String::with_capacity(body.as_str().len() + 1024);
        xml.push_str(DOCUMENT_OPEN);
        xml.push_str(body.as_str());
        xml.push_str(SECTION_PROPERTIES);
        xml.push_str(DOCUMENT_CLOSE);
        xml
    }

    /// Inline picture with a fresh drawing id
    pub(super) fn image(&mut self, rel_id: &str, name: &str, extent: u64) -> Markup {
        let id = self.next_drawing_id;
        self.next_drawing_id += 1;
        inline_image(rel_id, id, name, extent)
    }
}
