use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{error, info, warn};

use crate::errors::{RepositoryError, ServiceError};

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Authentication error: {0}")]
    AuthenticationError(String),

    #[error("Access denied")]
    AccessDenied,

    #[error("Invalid param: {0}")]
    InvalidParam(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Service unavailable: {0}")]
    Unavailable(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::AuthenticationError(_) => StatusCode::UNAUTHORIZED,
            AppError::AccessDenied | AppError::InvalidParam(_) => StatusCode::FORBIDDEN,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::Unavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            AppError::DatabaseError(_) | AppError::InternalError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        let (error_type, message) = match self {
            AppError::ValidationError(msg) => {
                warn!("Validation error: {}", msg);
                ("VALIDATION_ERROR", msg)
            }
            AppError::AuthenticationError(msg) => {
                warn!("Authentication error: {}", msg);
                ("AUTHENTICATION_ERROR", msg)
            }
            AppError::AccessDenied => {
                info!("Access denied");
                ("ACCESS_DENIED", "Access denied".to_string())
            }
            AppError::InvalidParam(param) => {
                warn!("Invalid param: {}", param);
                ("INVALID_PARAM", format!("Invalid param: {param}"))
            }
            AppError::NotFound(msg) => {
                info!("Not found: {}", msg);
                ("NOT_FOUND", msg)
            }
            AppError::Conflict(msg) => {
                warn!("Conflict: {}", msg);
                ("CONFLICT", msg)
            }
            AppError::Unavailable(msg) => {
                error!("Service unavailable: {}", msg);
                (
                    "SERVICE_UNAVAILABLE",
                    "The resource changed while the request was processed, please retry"
                        .to_string(),
                )
            }
            AppError::DatabaseError(msg) => {
                error!("Database error: {}", msg);
                ("DATABASE_ERROR", "Database operation failed".to_string())
            }
            AppError::InternalError(msg) => {
                error!("Internal error: {}", msg);
                ("INTERNAL_ERROR", "An internal error occurred".to_string())
            }
        };

        let error_response = ErrorResponse {
            error: error_type.to_string(),
            message,
            details: None,
        };

        (status, Json(error_response)).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;

impl From<ServiceError> for AppError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Repo(repo_err) => repo_err.into(),
            ServiceError::Validation(fields) => {
                AppError::ValidationError(format!("Invalid or missing params: {}", fields.join(", ")))
            }
            ServiceError::InvalidCredentials => {
                AppError::AuthenticationError("Invalid credentials".to_string())
            }
            ServiceError::EmailInUse => {
                AppError::Conflict("The received email is already in use".to_string())
            }
            ServiceError::NotFound(msg) => AppError::NotFound(msg),
            ServiceError::SurveyNotFound(id) => AppError::Unavailable(format!("survey {id} vanished")),
            other @ (ServiceError::Bcrypt(_)
            | ServiceError::Jwt(_)
            | ServiceError::Email(_)
            | ServiceError::InternalServerError(_)) => AppError::InternalError(other.to_string()),
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::ValidationError(rejection.body_text())
    }
}

impl From<RepositoryError> for AppError {
    fn from(err: RepositoryError) -> Self {
        AppError::DatabaseError(err.to_string())
    }
}
