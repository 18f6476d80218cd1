//! Output formatter trait

use protocol_application::GenerateProtocolOutput;
use std::path::Path;

/// Trait for formatting a generation summary
pub trait OutputFormatter {
    /// Human-readable summary
    fn format(&self, output: &GenerateProtocolOutput, saved_to: &Path) -> String;

    /// Format as JSON
    fn format_json(&self, output: &GenerateProtocolOutput, saved_to: &Path) -> String;
}
