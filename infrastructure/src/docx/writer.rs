//! Zip-backed [`PackageWriter`]
//!
//! Parts are written in the order [`ProtocolPackage::parts`] returns them.
//! XML parts are deflated; PNG media is stored as-is.

use protocol_application::{PackageWriter, PackagingError};
use protocol_domain::ProtocolPackage;
use std::io::{Cursor, Write};
use tracing::debug;
use zip::CompressionMethod;
use zip::write::FileOptions;

/// Writes a validated package into an in-memory zip archive
#[derive(Debug, Clone, Copy)]
pub struct DocxPackageWriter {
    compression: CompressionMethod,
}

impl Default for DocxPackageWriter {
    fn default() -> Self {
        Self {
            compression: CompressionMethod::Deflated,
        }
    }
}

impl DocxPackageWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Compression used for XML parts
    pub fn with_compression(mut self, compression: CompressionMethod) -> Self {
        self.compression = compression;
        self
    }

    fn method_for(&self, part_name: &str) -> CompressionMethod {
        if part_name.ends_with(".png") {
            CompressionMethod::Stored
        } else {
            self.compression
        }
    }
}

impl PackageWriter for DocxPackageWriter {
    fn write(&self, package: &ProtocolPackage) -> Result<Vec<u8>, PackagingError> {
        package.validate()?;

        let mut zip = zip::ZipWriter::new(Cursor::new(Vec::new()));
        for part in package.parts() {
            let options = FileOptions::default().compression_method(self.method_for(&part.name));
            zip.start_file::<_, ()>(part.name.as_str(), options)
                .map_err(|e| PackagingError::Archive(e.to_string()))?;
            zip.write_all(&part.bytes)?;
            debug!("Wrote part {} ({} bytes)", part.name, part.bytes.len());
        }

        let bytes = zip
            .finish()
            .map_err(|e| PackagingError::Archive(e.to_string()))?
            .into_inner();
        Ok(bytes)
    }
}
