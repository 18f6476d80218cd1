//! Application layer for meeting-protocol
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::{DEFAULT_RENDER_CONCURRENCY, GenerationParams};
pub use ports::{
    package_writer::{PackageWriter, PackagingError},
    progress::{GenerationPhase, NoProgress, ProgressNotifier},
    qr_renderer::{QrRenderer, RenderError},
};
pub use use_cases::generate_protocol::{
    GenerateProtocolError, GenerateProtocolInput, GenerateProtocolOutput,
    GenerateProtocolUseCase, ItemOutcome, decode_media,
};
