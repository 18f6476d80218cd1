//! Generation parameters: use case resource control.
//!
//! [`GenerationParams`] groups the static parameters that bound the work
//! done by [`GenerateProtocolUseCase`](crate::use_cases::generate_protocol::GenerateProtocolUseCase).
//! These are application-layer concerns, not document policy.

use serde::{Deserialize, Serialize};

/// Default number of QR renders in flight
pub const DEFAULT_RENDER_CONCURRENCY: usize = 8;

/// Resource limits for one generation call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationParams {
    /// Maximum number of voter QR renders running at the same time.
    pub render_concurrency: usize,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            render_concurrency: DEFAULT_RENDER_CONCURRENCY,
        }
    }
}

impl GenerationParams {
    /// Zero is treated as one.
    pub fn with_render_concurrency(mut self, limit: usize) -> Self {
        self.render_concurrency = limit.max(1);
        self
    }
}
