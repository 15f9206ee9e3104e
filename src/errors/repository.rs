use mongodb::error::{ErrorKind, WriteFailure};
use thiserror::Error;

const DUPLICATE_KEY: i32 = 11000;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Database error: {0}")]
    Mongo(#[from] mongodb::error::Error),

    #[error("Invalid object id: {0}")]
    InvalidId(String),

    #[error("Duplicate key: {0}")]
    Conflict(String),
}

impl RepositoryError {
    /// Maps a unique-index violation to `Conflict`, everything else to `Mongo`.
    pub fn from_write(err: mongodb::error::Error, what: &str) -> Self {
        let duplicate = matches!(
            err.kind.as_ref(),
            ErrorKind::Write(WriteFailure::WriteError(write_error)) if write_error.code == DUPLICATE_KEY
        );

        if duplicate {
            RepositoryError::Conflict(what.to_string())
        } else {
            RepositoryError::Mongo(err)
        }
    }
}
