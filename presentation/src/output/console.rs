//! Console output formatter for generation results

use crate::output::formatter::OutputFormatter;
use colored::Colorize;
use protocol_application::{GenerateProtocolOutput, ItemOutcome};
use protocol_domain::{format_area, format_percent};
use std::path::Path;

/// Formats generation results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format the complete summary
    pub fn format(output: &GenerateProtocolOutput, saved_to: &Path) -> String {
        let mut text = String::new();

        text.push_str(&Self::header("Meeting Protocol"));
        text.push('\n');

        text.push_str(&format!(
            "{} {}\n",
            "File:".cyan().bold(),
            saved_to.display()
        ));
        text.push_str(&format!(
            "{} {} bytes\n\n",
            "Size:".cyan().bold(),
            output.document.bytes.len()
        ));

        // Quorum
        text.push_str(&Self::section_header("Quorum"));
        let quorum = &output.quorum;
        let verdict = if quorum.quorum_reached {
            "reached".green().bold()
        } else {
            "not reached".red().bold()
        };
        text.push_str(&format!(
            "{} of {} m² ({}, required {}) {}\n",
            format_area(quorum.voted_area),
            format_area(quorum.total_area),
            format_percent(quorum.participation_percent),
            format_percent(quorum.required_percent),
            verdict
        ));

        // Items
        text.push_str(&Self::section_header("Agenda"));
        if output.items.is_empty() {
            text.push_str(&format!("{}\n", "(no agenda items)".dimmed()));
        }
        for item in &output.items {
            text.push_str(&Self::item_line(item));
        }

        // Signatures
        text.push_str(&Self::section_header("Signatures"));
        let company = if output.company_signed {
            "signed".green()
        } else {
            "not configured".yellow()
        };
        text.push_str(&format!("Company: {}\n", company));
        text.push_str(&format!(
            "Voters:  {} signed, {}\n",
            output.signed_voters.to_string().green(),
            if output.fallback_voters == 0 {
                "no fallbacks".normal()
            } else {
                format!("{} with fallback mark", output.fallback_voters).yellow()
            }
        ));

        text.push_str(&Self::footer());
        text
    }

    /// Format as JSON
    pub fn format_json(output: &GenerateProtocolOutput, saved_to: &Path) -> String {
        let items: Vec<serde_json::Value> = output
            .items
            .iter()
            .map(|item| {
                serde_json::json!({
                    "number": item.number,
                    "title": item.title,
                    "result": item.result,
                })
            })
            .collect();

        let summary = serde_json::json!({
            "file": saved_to.display().to_string(),
            "file_name": output.document.file_name,
            "mime_type": output.document.mime_type,
            "bytes": output.document.bytes.len(),
            "quorum": output.quorum,
            "items": items,
            "company_signed": output.company_signed,
            "signed_voters": output.signed_voters,
            "fallback_voters": output.fallback_voters,
        });
        serde_json::to_string_pretty(&summary).unwrap_or_else(|_| "{}".to_string())
    }

    fn item_line(item: &ItemOutcome) -> String {
        let decision = if item.result.threshold_met {
            "ADOPTED".green().bold()
        } else {
            "REJECTED".red().bold()
        };
        format!(
            "  {:>2}. {} {}\n      for {} / against {} / abstain {}\n",
            item.number,
            item.title,
            decision,
            format_percent(item.result.percent_for),
            format_percent(item.result.percent_against),
            format_percent(item.result.percent_abstain)
        )
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).cyan())
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format(&self, output: &GenerateProtocolOutput, saved_to: &Path) -> String {
        Self::format(output, saved_to)
    }

    fn format_json(&self, output: &GenerateProtocolOutput, saved_to: &Path) -> String {
        Self::format_json(output, saved_to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use protocol_domain::{MeetingQuorum, ProtocolDocument, TallyResult};

    fn output() -> GenerateProtocolOutput {
        GenerateProtocolOutput {
            document: ProtocolDocument::new("9", "Abay 10", vec![0; 2048]),
            quorum: MeetingQuorum {
                total_area: 1000.0,
                voted_area: 700.0,
                participation_percent: 70.0,
                required_percent: 50.0,
                quorum_reached: true,
            },
            items: vec![ItemOutcome {
                number: 2,
                title: "Roof".to_string(),
                result: TallyResult {
                    votes_for: 600.0,
                    votes_against: 300.0,
                    votes_abstain: 100.0,
                    percent_for: 60.0,
                    percent_against: 30.0,
                    percent_abstain: 10.0,
                    threshold_met: true,
                },
            }],
            company_signed: true,
            signed_voters: 3,
            fallback_voters: 1,
        }
    }

    #[test]
    fn test_text_summary() {
        colored::control::set_override(false);
        let text = ConsoleFormatter::format(&output(), Path::new("out/Protocol_9_Abay_10.docx"));

        assert!(text.contains("File: out/Protocol_9_Abay_10.docx"));
        assert!(text.contains("700.00 of 1000.00 m² (70.00%, required 50.00%) reached"));
        assert!(text.contains("2. Roof ADOPTED"));
        assert!(text.contains("for 60.00% / against 30.00% / abstain 10.00%"));
        assert!(text.contains("1 with fallback mark"));
    }

    #[test]
    fn test_json_summary() {
        let json = ConsoleFormatter::format_json(&output(), Path::new("p.docx"));
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["file_name"], "Protocol_9_Abay_10.docx");
        assert_eq!(value["bytes"], 2048);
        assert_eq!(value["quorum"]["quorum_reached"], true);
        assert_eq!(value["items"][0]["number"], 2);
        assert_eq!(value["items"][0]["result"]["percent_for"], 60.0);
        assert_eq!(value["fallback_voters"], 1);
    }
}
