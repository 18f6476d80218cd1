//! Package writer port
//!
//! Serializes a validated [`ProtocolPackage`] into container bytes.

use protocol_domain::{DomainError, ProtocolPackage};
use thiserror::Error;

/// Errors while producing the container
#[derive(Error, Debug)]
pub enum PackagingError {
    #[error("Invalid package: {0}")]
    Invalid(#[from] DomainError),

    #[error("Archive error: {0}")]
    Archive(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Writes a package to an in-memory archive
pub trait PackageWriter: Send + Sync {
    fn write(&self, package: &ProtocolPackage) -> Result<Vec<u8>, PackagingError>;
}
