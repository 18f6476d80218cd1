//! Application-level configuration.
//!
//! - [`GenerationParams`]: resource limits for protocol generation

pub mod generation_params;

pub use generation_params::{DEFAULT_RENDER_CONCURRENCY, GenerationParams};
