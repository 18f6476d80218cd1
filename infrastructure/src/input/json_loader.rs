//! JSON loader for finalized meeting data

use protocol_domain::ProtocolInput;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Errors while reading meeting data
#[derive(Error, Debug)]
pub enum InputError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid meeting data: {0}")]
    Json(#[from] serde_json::Error),
}

/// Reads a [`ProtocolInput`] from JSON
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonInputLoader;

impl JsonInputLoader {
    pub fn new() -> Self {
        Self
    }

    pub fn load(&self, path: impl AsRef<Path>) -> Result<ProtocolInput, InputError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| InputError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let input = self.parse(&content)?;
        debug!(
            "Loaded meeting {} from {}: {} items, {} votes",
            input.meeting.number,
            path.display(),
            input.agenda_items.len(),
            input.votes.len()
        );
        Ok(input)
    }

    pub fn parse(&self, content: &str) -> Result<ProtocolInput, InputError> {
        Ok(serde_json::from_str(content)?)
    }
}
