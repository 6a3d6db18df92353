//! Shared credential validation.
//!
//! Both the current account service and the legacy compatibility path
//! (`memoir-api::legacy`) enforce the same length bounds. The rule lives
//! here exactly once; the two paths stay independently versioned call
//! sites, not independent implementations.

use crate::{CoreError, Result as CoreResult};

use std::panic::Location;

use error_location::ErrorLocation;

/// Minimum accepted password length, in bytes.
pub const PASSWORD_MIN_LEN: usize = 3;
/// Maximum accepted password length, in bytes.
pub const PASSWORD_MAX_LEN: usize = 512;

/// Check the candidate password against the historical length bounds.
///
/// Surrounding whitespace counts toward the length: the credential is
/// taken exactly as supplied, never trimmed.
#[track_caller]
pub fn check_password_length(candidate: &str) -> CoreResult<()> {
    if candidate.len() < PASSWORD_MIN_LEN {
        return Err(CoreError::Validation {
            message: format!(
                "password is too short, minimum length is {}",
                PASSWORD_MIN_LEN
            ),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    if candidate.len() > PASSWORD_MAX_LEN {
        return Err(CoreError::Validation {
            message: format!(
                "password is too long, maximum length is {}",
                PASSWORD_MAX_LEN
            ),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    Ok(())
}
