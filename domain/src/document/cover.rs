//! Cover: company block, title, meeting details and quorum summary

use super::composer::DocumentComposer;
use super::drawing::LOGO_EXTENT;
use super::xml::{
    Align, COLOR_FAIL, COLOR_PASS, Markup, ParagraphStyle, RunStyle, blank_line,
    labeled_paragraph, paragraph, run, text_paragraph,
};
use crate::core::string::{format_area, format_percent};

impl DocumentComposer<'_> {
    pub(super) fn cover(&mut self) -> Markup {
        let mut out = Markup::new();
        out.push(self.company_block());
        out.push(self.title());
        out.push(self.meeting_details());
        out.push(self.quorum_summary());
        out
    }

    fn company_block(&mut self) -> Markup {
        let mut out = Markup::new();
        let company = self.ctx.company;
        let relationships = self.ctx.relationships;

        if let Some(rel_id) = relationships.logo_id() {
            let image = self.image(rel_id, "logo.png", LOGO_EXTENT);
            out.push(paragraph([image], ParagraphStyle::aligned(Align::Right)));
        }
        if company.is_configured() {
            out.push(text_paragraph(
                &company.name,
                RunStyle::BOLD,
                ParagraphStyle::aligned(Align::Right),
            ));
            if !company.address.trim().is_empty() {
                out.push(text_paragraph(
                    &company.address,
                    RunStyle::PLAIN.size(18),
                    ParagraphStyle::aligned(Align::Right),
                ));
            }
        }
        out
    }

    fn title(&self) -> Markup {
        let meeting = self.ctx.meeting;
        let labels = self.labels;
        let mut out = Markup::new();

        out.push(blank_line());
        out.push(text_paragraph(
            &format!("{} {}", labels.protocol_title, meeting.number),
            RunStyle::BOLD.size(32),
            ParagraphStyle::aligned(Align::Center),
        ));
        out.push(text_paragraph(
            labels.protocol_subtitle,
            RunStyle::BOLD,
            ParagraphStyle::aligned(Align::Center),
        ));
        out.push(text_paragraph(
            &meeting.building_address,
            RunStyle::PLAIN,
            ParagraphStyle::aligned(Align::Center).spacing_after(240),
        ));
        out
    }

    fn meeting_details(&self) -> Markup {
        let meeting = self.ctx.meeting;
        let labels = self.labels;

        [
            labeled_paragraph(labels.date, &labels.long_date(&meeting.confirmed_at)),
            labeled_paragraph(
                labels.venue,
                &format!(
                    "{}, {}",
                    meeting.building_address,
                    labels.format(meeting.format)
                ),
            ),
            labeled_paragraph(labels.organizer, &meeting.organizer_name),
        ]
        .into_iter()
        .collect()
    }

    fn quorum_summary(&self) -> Markup {
        let quorum = self.ctx.quorum;
        let labels = self.labels;
        let (verdict, color) = if quorum.quorum_reached {
            (labels.quorum_reached, COLOR_PASS)
        } else {
            (labels.quorum_not_reached, COLOR_FAIL)
        };

        [
            labeled_paragraph(
                labels.total_area,
                &format!("{} {}", format_area(quorum.total_area), labels.area_unit),
            ),
            labeled_paragraph(
                labels.voted_area,
                &format!("{} {}", format_area(quorum.voted_area), labels.area_unit),
            ),
            labeled_paragraph(
                labels.participation,
                &format_percent(quorum.participation_percent),
            ),
            labeled_paragraph(
                labels.required_quorum,
                &format_percent(quorum.required_percent),
            ),
            paragraph(
                [run(verdict, RunStyle::BOLD.color(color))],
                ParagraphStyle::default().spacing_after(240),
            ),
        ]
        .into_iter()
        .collect()
    }
}
