use crate::FieldMask;

/// Request to register a new account.
#[derive(Debug, Clone)]
pub struct CreateUserRequest {
    pub username: String,
    pub password: String,
    pub email: String,
    pub nickname: String,
}

/// Request for a field-scoped partial update of one user.
///
/// `username` addresses the target; only attributes named in `update_mask`
/// are applied. A maintenance password reset carries a mask of exactly
/// `["password"]`.
#[derive(Debug, Clone)]
pub struct UpdateUserRequest {
    pub username: String,
    pub password: Option<String>,
    pub email: Option<String>,
    pub nickname: Option<String>,
    pub update_mask: FieldMask,
}

impl UpdateUserRequest {
    /// Build the request a password reset uses: mask of exactly `password`,
    /// nothing else touched.
    pub fn password_reset(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: Some(password.into()),
            email: None,
            nickname: None,
            update_mask: FieldMask::new(["password"]),
        }
    }
}
