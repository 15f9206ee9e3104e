use crate::errors::RepositoryError;
use bcrypt::BcryptError;
use jsonwebtoken::errors::Error as JwtError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Repository error: {0}")]
    Repo(#[from] RepositoryError),

    #[error("Validation failed: {0:?}")]
    Validation(Vec<String>),

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Email already in use")]
    EmailInUse,

    #[error("Not found: {0}")]
    NotFound(String),

    /// The survey a vote refers to disappeared before its result could be
    /// aggregated.
    #[error("Survey not found: {0}")]
    SurveyNotFound(String),

    #[error("Bcrypt error: {0}")]
    Bcrypt(#[from] BcryptError),

    #[error("JWT error: {0}")]
    Jwt(#[from] JwtError),

    #[error("Email delivery failed: {0}")]
    Email(String),

    #[error("Internal server error: {0}")]
    InternalServerError(String),
}
