//! Legacy-compatible update validation.
//!
//! Earlier releases validated password updates through a separate request
//! type that predates the field-masked service path. The maintenance
//! commands still run this check before calling the service, in addition to
//! the service's own acceptance logic. The length bounds themselves live in
//! `memoir_core::validation`; this is a second, independently-versioned
//! call site of that one rule, not a second implementation.

use crate::Result as ServiceResult;

use memoir_core::validation::check_password_length;

#[derive(Debug, Clone, Default)]
pub struct LegacyUpdateUserRequest {
    pub password: Option<String>,
}

impl LegacyUpdateUserRequest {
    /// Check the candidate password against the historical bounds.
    /// Whitespace counts toward the length, exactly as it always has.
    pub fn validate(&self) -> ServiceResult<()> {
        if let Some(ref password) = self.password {
            check_password_length(password)?;
        }

        Ok(())
    }
}
