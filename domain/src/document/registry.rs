//! Signature lines and the signature registry appendix
//!
//! The registry has one row per vote record, in input order. A voter whose
//! QR rendered gets the picture; everyone else gets a plain check mark.

use super::composer::DocumentComposer;
use super::drawing::SIGNATURE_EXTENT;
use super::xml::{
    Align, Cell, Markup, ParagraphStyle, RunStyle, Table, blank_line, page_break, paragraph,
    run, text_paragraph,
};
use crate::core::string::format_area;
use crate::labels::short_date;

/// Shown instead of a signature picture that failed to render
pub const SIGNATURE_FALLBACK: &str = "✓";

const REGISTRY_COLUMNS: [u32; 7] = [500, 2538, 800, 1200, 1300, 1300, 2000];

impl DocumentComposer<'_> {
    pub(super) fn signatures(&self) -> Markup {
        let labels = self.labels;
        let line = |caption: &str, name: &str| {
            paragraph(
                [
                    run(&format!("{} ", caption), RunStyle::BOLD),
                    run(&format!("______________ / {}", name), RunStyle::PLAIN),
                ],
                ParagraphStyle::default().spacing_after(240),
            )
        };

        [
            blank_line(),
            line(labels.chair_signature, &self.ctx.meeting.organizer_name),
            line(labels.secretary_signature, ""),
        ]
        .into_iter()
        .collect()
    }

    pub(super) fn registry(&mut self) -> Markup {
        let labels = self.labels;
        let meeting = self.ctx.meeting;
        let mut out = Markup::new();

        out.push(page_break());
        out.push(text_paragraph(
            labels.appendix_title,
            RunStyle::BOLD,
            ParagraphStyle::aligned(Align::Right),
        ));
        out.push(text_paragraph(
            &format!(
                "{} {}, {}",
                labels.receipt_protocol,
                meeting.number,
                labels.long_date(&meeting.confirmed_at)
            ),
            RunStyle::PLAIN.italic(),
            ParagraphStyle::aligned(Align::Right),
        ));
        out.push(text_paragraph(
            labels.appendix_subtitle,
            RunStyle::BOLD.size(26),
            ParagraphStyle::aligned(Align::Center).spacing_after(120),
        ));

        let mut table = Table::new(REGISTRY_COLUMNS.to_vec()).header(&[
            labels.column_number,
            labels.column_name,
            labels.column_apartment,
            labels.column_area,
            labels.column_date,
            labels.column_choice,
            labels.column_signature,
        ]);

        let votes = self.ctx.votes;
        let relationships = self.ctx.relationships;
        for (index, vote) in votes.iter().enumerate() {
            let signature = match relationships.voter_id(index) {
                Some(rel_id) => {
                    let image =
                        self.image(rel_id, &format!("voter_{}.png", index), SIGNATURE_EXTENT);
                    Cell::content(paragraph([image], ParagraphStyle::aligned(Align::Center)))
                }
                None => Cell::centered(SIGNATURE_FALLBACK),
            };
            table = table.row(vec![
                Cell::centered(&(index + 1).to_string()),
                Cell::text(&vote.voter_name),
                Cell::centered(vote.apartment_number.as_deref().unwrap_or("-")),
                Cell::centered(&format_area(vote.vote_weight)),
                Cell::centered(&short_date(&vote.voted_at)),
                Cell::centered(labels.choice(vote.choice)),
                signature,
            ]);
        }
        out.push(table.build());
        out
    }
}
