//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("Invalid threshold policy: {0}")]
    InvalidThreshold(String),

    #[error("Unknown locale: {0}")]
    InvalidLocale(String),

    #[error("Invalid color: {0} (expected #RRGGBB)")]
    InvalidColor(String),

    #[error("Relationship {0} is referenced in markup but missing from the manifest")]
    UnresolvedRelationship(String),

    #[error("Relationship {0} is in the manifest but never referenced in markup")]
    OrphanRelationship(String),

    #[error("Relationship id {0} is declared more than once")]
    DuplicateRelationship(String),

    #[error("Media part {0} has no stored bytes")]
    MissingMedia(String),
}

impl DomainError {
    /// Check if this error breaks the package reference graph
    pub fn is_packaging(&self) -> bool {
        matches!(
            self,
            DomainError::UnresolvedRelationship(_)
                | DomainError::OrphanRelationship(_)
                | DomainError::DuplicateRelationship(_)
                | DomainError::MissingMedia(_)
        )
    }
}
