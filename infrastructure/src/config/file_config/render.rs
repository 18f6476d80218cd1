//! Render configuration from TOML (`[render]` section)

use protocol_application::{DEFAULT_RENDER_CONCURRENCY, GenerationParams};
use serde::{Deserialize, Serialize};

/// Raw render configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileRenderConfig {
    /// QR renders in flight at once
    pub concurrency: usize,
}

impl Default for FileRenderConfig {
    fn default() -> Self {
        Self {
            concurrency: DEFAULT_RENDER_CONCURRENCY,
        }
    }
}

impl FileRenderConfig {
    pub fn to_params(&self) -> GenerationParams {
        GenerationParams::default().with_render_concurrency(self.concurrency)
    }
}
