//! Error types for the catalog store and its queries.

use models::collection::Collection;
use std::io;
use thiserror::Error;

/// Result type for store and query operations.
pub type DbResult<T> = Result<T, DbError>;

/// Errors that can occur while reading, mutating or persisting a collection.
#[derive(Debug, Error)]
pub enum DbError {
    /// The targeted record does not exist.
    #[error("no record with id {id} in {collection}")]
    NotFound {
        /// Collection that was searched.
        collection: Collection,
        /// Id that was not found.
        id: i64,
    },

    /// An insert collided with an existing id.
    #[error("id {id} already exists in {collection}")]
    DuplicateId {
        /// Collection the insert targeted.
        collection: Collection,
        /// Colliding id.
        id: i64,
    },

    /// Reading or writing a persisted collection failed.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A persisted collection could not be encoded or decoded.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A query or patch argument was rejected before touching the store.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl DbError {
    pub fn not_found(collection: Collection, id: i64) -> Self {
        Self::NotFound { collection, id }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            DbError::not_found(Collection::Courses, 7).to_string(),
            "no record with id 7 in courses"
        );
        assert_eq!(
            DbError::DuplicateId {
                collection: Collection::Faculty,
                id: 1
            }
            .to_string(),
            "id 1 already exists in faculty"
        );
        assert!(DbError::not_found(Collection::Faculty, 1).is_not_found());
        assert!(!DbError::InvalidArgument("x".into()).is_not_found());
    }
}
