//! Traits the core needs from storage, plus the errors crossing them.
//!
//! `yogarate-store` implements these; services only ever see the traits.
//!
//! # Rules
//!
//! - No file-system or serialization details in any signature
//! - Traits are synchronous: every call runs to completion before returning
//! - Absence is `Option`, never an error

pub mod key_value;
pub mod rating_store;

use thiserror::Error;

pub use key_value::KeyValueStore;
pub use rating_store::RatingStore;

#[cfg(test)]
pub use rating_store::MockRatingStore;

/// A write the medium refused.
///
/// Failed reads never produce this; they degrade to empty collections.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Storage backend error (filesystem, lock poisoning, etc.).
    #[error("Storage write failed: {0}")]
    Storage(String),

    /// A collection could not be encoded as JSON.
    #[error("Cannot encode collection: {0}")]
    Serialization(String),
}

/// Every failure a `RatingsService` call can report.
///
/// The CLI turns each variant into an exit code.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The store rejected a write.
    #[error(transparent)]
    Repository(#[from] RepositoryError),

    /// Path resolution failed.
    #[error(transparent)]
    Path(#[from] crate::paths::PathError),

    /// Input a rating form would refuse, e.g. a blank instructor name.
    #[error("{0}")]
    Validation(String),
}
