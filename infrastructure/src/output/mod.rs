//! Output adapters for finished documents

mod blob_saver;

pub use blob_saver::{BlobSaver, SaveError};
