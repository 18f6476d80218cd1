//! QR renderer port
//!
//! Renders a text payload into a PNG image, returned base64-encoded.

use protocol_domain::QrOptions;
use thiserror::Error;

/// Errors from a single QR render
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    #[error("Payload cannot be encoded as QR: {0}")]
    Encoding(String),

    #[error("Invalid QR options: {0}")]
    InvalidOptions(String),

    #[error("Image output failed: {0}")]
    Image(String),

    #[error("Renderer returned invalid base64: {0}")]
    InvalidOutput(String),

    #[error("Render task failed: {0}")]
    Task(String),
}

/// Renders QR images.
///
/// Implementations must be side-effect free: the same payload and options
/// always give the same image, and concurrent calls do not interact.
/// Calls are made from blocking threads.
pub trait QrRenderer: Send + Sync {
    /// Render `payload` and return the PNG bytes as standard base64
    fn render(&self, payload: &str, options: &QrOptions) -> Result<String, RenderError>;
}
