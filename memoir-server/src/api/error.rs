//! REST API error types
//!
//! These errors are designed to produce consistent JSON responses
//! with appropriate HTTP status codes.

use memoir_api::ServiceError;
use memoir_auth::AuthError;
use memoir_db::DbError;

use std::panic::Location;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use serde::Serialize;
use thiserror::Error;

/// JSON error response body
#[derive(Debug, Serialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorBody,
}

/// Inner error body with code and message
#[derive(Debug, Serialize)]
pub struct ApiErrorBody {
    /// Machine-readable error code (e.g., "NOT_FOUND", "VALIDATION_ERROR")
    pub code: String,
    /// Human-readable error message
    pub message: String,
}

/// API errors with associated HTTP status codes
#[derive(Debug, Error)]
pub enum ApiError {
    /// Resource not found (404)
    #[error("Resource not found: {message} {location}")]
    NotFound {
        message: String,
        location: ErrorLocation,
    },

    /// Validation error (400)
    #[error("Validation failed: {message} {location}")]
    Validation {
        message: String,
        location: ErrorLocation,
    },

    /// Missing or invalid credentials (401)
    #[error("Unauthorized: {message} {location}")]
    Unauthorized {
        message: String,
        location: ErrorLocation,
    },

    /// Authenticated but not allowed (403)
    #[error("Forbidden: {message} {location}")]
    Forbidden {
        message: String,
        location: ErrorLocation,
    },

    /// Internal server error (500)
    #[error("Internal error: {message} {location}")]
    Internal {
        message: String,
        location: ErrorLocation,
    },
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Log the error with location for debugging
        log::error!("{}", self);

        let (status, body) = match self {
            ApiError::NotFound { message, .. } => (
                StatusCode::NOT_FOUND,
                ApiErrorBody {
                    code: "NOT_FOUND".into(),
                    message,
                },
            ),
            ApiError::Validation { message, .. } => (
                StatusCode::BAD_REQUEST,
                ApiErrorBody {
                    code: "VALIDATION_ERROR".into(),
                    message,
                },
            ),
            ApiError::Unauthorized { message, .. } => (
                StatusCode::UNAUTHORIZED,
                ApiErrorBody {
                    code: "UNAUTHORIZED".into(),
                    message,
                },
            ),
            ApiError::Forbidden { message, .. } => (
                StatusCode::FORBIDDEN,
                ApiErrorBody {
                    code: "FORBIDDEN".into(),
                    message,
                },
            ),
            ApiError::Internal { message, .. } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiErrorBody {
                    code: "INTERNAL_ERROR".into(),
                    message,
                },
            ),
        };

        (status, Json(ApiErrorResponse { error: body })).into_response()
    }
}

/// Convert service-layer errors to API errors
impl From<ServiceError> for ApiError {
    #[track_caller]
    fn from(e: ServiceError) -> Self {
        match e {
            ServiceError::NotFound { message, .. } => ApiError::NotFound {
                message,
                location: ErrorLocation::from(Location::caller()),
            },
            ServiceError::Validation { message, .. } => ApiError::Validation {
                message,
                location: ErrorLocation::from(Location::caller()),
            },
            ServiceError::InvalidCredentials { .. } => ApiError::Unauthorized {
                message: "invalid username or password".to_string(),
                location: ErrorLocation::from(Location::caller()),
            },
            ServiceError::PermissionDenied { message, .. } => ApiError::Forbidden {
                message,
                location: ErrorLocation::from(Location::caller()),
            },
            ServiceError::Db(e) => ApiError::from(e),
            ServiceError::Auth(e) => ApiError::from(e),
            ServiceError::Hash { .. } => ApiError::Internal {
                message: "Credential processing failed".to_string(),
                location: ErrorLocation::from(Location::caller()),
            },
        }
    }
}

/// Convert token errors to API errors
impl From<AuthError> for ApiError {
    #[track_caller]
    fn from(e: AuthError) -> Self {
        ApiError::Unauthorized {
            message: e.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

/// Convert database errors to API errors
impl From<DbError> for ApiError {
    #[track_caller]
    fn from(e: DbError) -> Self {
        // Don't expose internal database details to clients
        log::error!("Database error: {}", e);
        ApiError::Internal {
            message: "Database operation failed".to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
