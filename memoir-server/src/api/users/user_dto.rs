use memoir_core::{Role, User};

use chrono::{DateTime, Utc};
use serde::Serialize;

/// User representation for API responses. The password hash never leaves
/// the process.
#[derive(Debug, Serialize)]
pub struct UserDto {
    pub id: i32,
    pub username: String,
    pub role: Role,
    pub email: String,
    pub nickname: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<User> for UserDto {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            role: user.role,
            email: user.email,
            nickname: user.nickname,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}
