//! User account entity.

use crate::Role;

use chrono::{DateTime, Utc};

/// A registered account. `password_hash` is the bcrypt-derived form of the
/// credential; the plaintext never reaches this type. No serde derives here
/// on purpose: anything that leaves the process goes through a DTO that
/// omits the hash.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: i32,
    pub username: String,
    pub role: Role,
    pub email: String,
    pub nickname: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new user with default values. The id is assigned by the
    /// store on insert; 0 marks "not yet persisted".
    pub fn new(username: String, password_hash: String, role: Role) -> Self {
        let now = Utc::now();
        Self {
            id: 0,
            username,
            role,
            email: String::new(),
            nickname: String::new(),
            password_hash,
            created_at: now,
            updated_at: now,
        }
    }
}
