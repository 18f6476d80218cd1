//! Saves a [`ProtocolDocument`] under its own file name
//!
//! Bytes go to a `.part` file first and are renamed into place, so a
//! reader never sees a half-written protocol. A failed save removes the
//! `.part` file again.

use protocol_domain::ProtocolDocument;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, warn};

/// Errors while saving a document
#[derive(Error, Debug)]
pub enum SaveError {
    #[error("Failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Writes documents into one directory
#[derive(Debug, Clone)]
pub struct BlobSaver {
    dir: PathBuf,
}

impl BlobSaver {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Write the document and return its final path
    pub fn save(&self, document: &ProtocolDocument) -> Result<PathBuf, SaveError> {
        std::fs::create_dir_all(&self.dir).map_err(io_error(&self.dir))?;

        let target = self.dir.join(&document.file_name);
        let partial = self.dir.join(format!("{}.part", document.file_name));
        let written = std::fs::write(&partial, &document.bytes)
            .map_err(io_error(&partial))
            .and_then(|()| std::fs::rename(&partial, &target).map_err(io_error(&target)));
        if let Err(e) = written {
            discard_partial(&partial);
            return Err(e);
        }

        info!(
            "Saved {} ({}, {} bytes)",
            target.display(),
            document.mime_type,
            document.bytes.len()
        );
        Ok(target)
    }
}

fn discard_partial(partial: &Path) {
    match std::fs::remove_file(partial) {
        Ok(()) => {}
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
        Err(e) => warn!("Could not remove {}: {}", partial.display(), e),
    }
}

fn io_error(path: &Path) -> impl FnOnce(std::io::Error) -> SaveError {
    let path = path.to_path_buf();
    move |source| SaveError::Io { path, source }
}
