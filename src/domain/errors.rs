use thiserror::Error;

/// Failures raised by the persistence layer.
///
/// Store failures are always propagated to the caller; they are never
/// swallowed or downgraded to an empty result.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A stored row violates an invariant the domain expects (e.g. an
    /// email that no longer parses).
    #[error("stored data invalid: {0}")]
    Corrupt(String),
}

pub type StoreResult<T> = Result<T, StoreError>;
