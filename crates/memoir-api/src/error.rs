use memoir_auth::AuthError;
use memoir_core::CoreError;
use memoir_db::DbError;

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("Validation failed: {message} {location}")]
    Validation {
        message: String,
        location: ErrorLocation,
    },

    #[error("Not found: {message} {location}")]
    NotFound {
        message: String,
        location: ErrorLocation,
    },

    #[error("Permission denied: {message} {location}")]
    PermissionDenied {
        message: String,
        location: ErrorLocation,
    },

    #[error("Invalid username or password {location}")]
    InvalidCredentials { location: ErrorLocation },

    #[error("Password hashing failed: {source} {location}")]
    Hash {
        #[source]
        source: bcrypt::BcryptError,
        location: ErrorLocation,
    },

    #[error(transparent)]
    Db(#[from] DbError),

    #[error(transparent)]
    Auth(#[from] AuthError),
}

impl ServiceError {
    #[track_caller]
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn not_found<S: Into<String>>(message: S) -> Self {
        Self::NotFound {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn permission_denied<S: Into<String>>(message: S) -> Self {
        Self::PermissionDenied {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<CoreError> for ServiceError {
    #[track_caller]
    fn from(e: CoreError) -> Self {
        match e {
            CoreError::Validation { message, .. } => Self::Validation {
                message,
                location: ErrorLocation::from(Location::caller()),
            },
            CoreError::InvalidRole { value, .. } => Self::Validation {
                message: format!("invalid role `{}`", value),
                location: ErrorLocation::from(Location::caller()),
            },
        }
    }
}

impl From<bcrypt::BcryptError> for ServiceError {
    #[track_caller]
    fn from(source: bcrypt::BcryptError) -> Self {
        Self::Hash {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, ServiceError>;
