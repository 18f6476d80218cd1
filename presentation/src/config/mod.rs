//! Presentation-level configuration
//!
//! Configuration for the run summary and progress display.

use protocol_domain::SummaryFormat;
use serde::{Deserialize, Serialize};

/// Output configuration for the presentation layer
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Summary printed after generation
    pub summary: SummaryFormat,
    /// Enable colored terminal output
    pub color: bool,
    /// Show progress indicators
    pub show_progress: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            summary: SummaryFormat::default(),
            color: true,
            show_progress: true,
        }
    }
}
