use thiserror::Error;

use crate::poll::UnknownVoteOption;

/// Failures surfaced by [`crate::database::store::PollStore`].
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{entity} {key} not found")]
    NotFound { entity: &'static str, key: String },

    #[error("invalid vote option '{0}'")]
    InvalidOption(String),

    #[error("constraint violation: {0}")]
    ConstraintViolation(String),

    #[error("unknown vote kind {0} in storage")]
    InvalidVoteKind(i64),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl StoreError {
    pub fn not_found(entity: &'static str, key: impl ToString) -> Self {
        StoreError::NotFound {
            entity,
            key: key.to_string(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound { .. })
    }
}

impl From<UnknownVoteOption> for StoreError {
    fn from(err: UnknownVoteOption) -> Self {
        StoreError::InvalidOption(err.0)
    }
}

pub type StoreResult<T> = Result<T, StoreError>;
