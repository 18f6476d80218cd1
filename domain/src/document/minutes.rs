//! Per-item minutes
//!
//! Item 1 is always the procedural election of the chair and secretary,
//! recorded as unanimous. Real agenda items are numbered from 2.

use super::composer::{CONTENT_WIDTH, DocumentComposer, ItemMinutes};
use super::xml::{
    Align, COLOR_FAIL, COLOR_PASS, Cell, Markup, ParagraphStyle, RunStyle, Table, paragraph, run,
    text_paragraph,
};
use crate::config::VoterListPolicy;
use crate::core::string::{format_area, format_percent};
use crate::meeting::VoteRecord;
use crate::tally::{TallyResult, chair_election_result};

/// Number of the first real agenda item
pub const FIRST_ITEM_NUMBER: usize = 2;

const VOTER_COLUMNS: [u32; 5] = [600, 4238, 1200, 1800, 1800];
const VOTER_COLUMNS_WITH_JUSTIFICATION: [u32; 6] = [500, 2838, 900, 1300, 1400, 2700];

impl DocumentComposer<'_> {
    pub(super) fn minutes(&self) -> Markup {
        let labels = self.labels;
        let mut out = Markup::new();

        out.push(text_paragraph(
            labels.agenda_heading,
            RunStyle::BOLD.size(26),
            ParagraphStyle::aligned(Align::Center).spacing_after(120),
        ));
        out.push(self.agenda_list());

        out.push(self.item_section(
            1,
            labels.chair_election_title,
            Some(labels.chair_election_description),
            &chair_election_result(self.ctx.meeting),
            &[],
        ));

        let items = self.ctx.items;
        for (offset, entry) in items.iter().enumerate() {
            let ItemMinutes {
                item,
                result,
                votes,
            } = entry;
            out.push(self.item_section(
                FIRST_ITEM_NUMBER + offset,
                &item.title,
                item.description.as_deref(),
                result,
                votes,
            ));
        }
        out
    }

    fn agenda_list(&self) -> Markup {
        let labels = self.labels;
        let first = text_paragraph(
            &format!("1. {}", labels.chair_election_title),
            RunStyle::PLAIN,
            ParagraphStyle::default(),
        );
        let rest = self.ctx.items.iter().enumerate().map(|(offset, m)| {
            text_paragraph(
                &format!("{}. {}", FIRST_ITEM_NUMBER + offset, m.item.title),
                RunStyle::PLAIN,
                ParagraphStyle::default(),
            )
        });
        std::iter::once(first).chain(rest).collect()
    }

    fn item_section(
        &self,
        number: usize,
        title: &str,
        description: Option<&str>,
        result: &TallyResult,
        votes: &[VoteRecord],
    ) -> Markup {
        let labels = self.labels;
        let mut out = Markup::new();

        out.push(paragraph(
            [
                run(&format!("{} {}. ", labels.item_prefix, number), RunStyle::BOLD),
                run(title, RunStyle::BOLD),
            ],
            ParagraphStyle::default().spacing_after(120).keep_next(),
        ));
        if let Some(description) = description.map(str::trim).filter(|d| !d.is_empty()) {
            out.push(text_paragraph(
                description,
                RunStyle::PLAIN,
                ParagraphStyle::aligned(Align::Justify).spacing_after(120),
            ));
        }

        out.push(self.vote_table(result));
        if self.should_list_voters(votes) {
            out.push(text_paragraph(
                labels.voters_heading,
                RunStyle::PLAIN.italic(),
                ParagraphStyle::default().keep_next(),
            ));
            out.push(self.voter_table(votes));
        }
        out.push(self.decision_line(result));
        out
    }

    fn vote_table(&self, result: &TallyResult) -> Markup {
        let labels = self.labels;
        let column = CONTENT_WIDTH / 3;
        let unit = labels.area_unit;
        let area = |v: f64| format!("{} {}", format_area(v), unit);

        Table::new(vec![column, column, CONTENT_WIDTH - 2 * column])
            .header(&[labels.choice_for, labels.choice_against, labels.choice_abstain])
            .row(vec![
                Cell::centered(&area(result.votes_for)),
                Cell::centered(&area(result.votes_against)),
                Cell::centered(&area(result.votes_abstain)),
            ])
            .row(vec![
                Cell::centered(&format_percent(result.percent_for)),
                Cell::centered(&format_percent(result.percent_against)),
                Cell::centered(&format_percent(result.percent_abstain)),
            ])
            .build()
    }

    fn should_list_voters(&self, votes: &[VoteRecord]) -> bool {
        if votes.is_empty() {
            return false;
        }
        match self.ctx.options.voter_lists {
            VoterListPolicy::WithComments => votes.iter().any(|v| v.justification().is_some()),
            VoterListPolicy::Always => true,
            VoterListPolicy::Never => false,
        }
    }

    fn voter_table(&self, votes: &[VoteRecord]) -> Markup {
        let labels = self.labels;
        let with_justification = votes.iter().any(|v| v.justification().is_some());

        let mut captions = vec![
            labels.column_number,
            labels.column_name,
            labels.column_apartment,
            labels.column_area,
            labels.column_choice,
        ];
        let widths = if with_justification {
            captions.push(labels.column_justification);
            VOTER_COLUMNS_WITH_JUSTIFICATION.to_vec()
        } else {
            VOTER_COLUMNS.to_vec()
        };

        let mut table = Table::new(widths).header(&captions);
        for (i, vote) in votes.iter().enumerate() {
            let mut cells = vec![
                Cell::centered(&(i + 1).to_string()),
                Cell::text(&vote.voter_name),
                Cell::centered(vote.apartment_number.as_deref().unwrap_or("-")),
                Cell::centered(&format_area(vote.vote_weight)),
                Cell::centered(labels.choice(vote.choice)),
            ];
            if with_justification {
                cells.push(Cell::text(vote.justification().unwrap_or_default()));
            }
            table = table.row(cells);
        }
        table.build()
    }

    fn decision_line(&self, result: &TallyResult) -> Markup {
        let labels = self.labels;
        let (verdict, color) = if result.threshold_met {
            (labels.decision_adopted, COLOR_PASS)
        } else {
            (labels.decision_rejected, COLOR_FAIL)
        };
        paragraph(
            [
                run(&format!("{}: ", labels.decision_prefix), RunStyle::BOLD),
                run(verdict, RunStyle::BOLD.color(color)),
            ],
            ParagraphStyle::default().spacing_after(240),
        )
    }
}
