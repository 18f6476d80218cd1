//! Infrastructure layer for meeting-protocol
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod docx;
pub mod input;
pub mod output;
pub mod qr;

// Re-export commonly used types
pub use config::{
    ConfigLoader, ConfigValidationError, FileConfig, FileOutputConfig, FileQrConfig,
    FileRenderConfig, FileSummaryFormat,
};
pub use docx::DocxPackageWriter;
pub use input::{InputError, JsonInputLoader};
pub use output::{BlobSaver, SaveError};
pub use qr::QrCodeRenderer;
