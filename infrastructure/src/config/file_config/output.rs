//! Output configuration from TOML (`[output]` section)

use protocol_domain::SummaryFormat;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

// Re-export SummaryFormat from domain for convenience
pub use protocol_domain::SummaryFormat as FileSummaryFormat;

/// Raw output configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOutputConfig {
    /// Directory the protocol is saved to
    pub dir: PathBuf,
    /// Summary printed after generation (uses domain type)
    pub summary: SummaryFormat,
    /// Enable colored terminal output
    pub color: bool,
}

impl Default for FileOutputConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("."),
            summary: SummaryFormat::default(),
            color: true,
        }
    }
}
