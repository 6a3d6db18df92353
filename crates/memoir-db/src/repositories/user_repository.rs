//! User repository over the `users` table.
//!
//! Reads go through [`FindUser`] filters; every unset field matches any
//! row, so one query shape serves lookup by id, username, or email. An
//! empty result set is a valid "not found", not an error. Writes are
//! partial: [`UpdateUserFields`] only touches the columns it names.

use crate::{DbError, Result as DbResult};

use memoir_core::{Role, User};

use std::panic::Location;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use error_location::ErrorLocation;
use sqlx::sqlite::SqliteRow;
use sqlx::{QueryBuilder, Row, Sqlite, SqlitePool};

const USER_COLUMNS: &str =
    "id, username, role, email, nickname, password_hash, created_at, updated_at";

/// Narrows a user query. Unset fields match any row.
#[derive(Debug, Clone, Default)]
pub struct FindUser {
    pub id: Option<i32>,
    pub username: Option<String>,
    pub email: Option<String>,
}

impl FindUser {
    pub fn by_id(id: i32) -> Self {
        Self {
            id: Some(id),
            ..Self::default()
        }
    }

    pub fn by_username(username: impl Into<String>) -> Self {
        Self {
            username: Some(username.into()),
            ..Self::default()
        }
    }

    pub fn by_email(email: impl Into<String>) -> Self {
        Self {
            email: Some(email.into()),
            ..Self::default()
        }
    }
}

/// Columns to overwrite on update. Unset fields keep their stored value.
#[derive(Debug, Clone, Default)]
pub struct UpdateUserFields {
    pub password_hash: Option<String>,
    pub email: Option<String>,
    pub nickname: Option<String>,
}

pub struct UserRepository {
    pool: SqlitePool,
}

impl UserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a new user and return the persisted row. The returned value
    /// carries the store-assigned id and second-precision timestamps, so it
    /// matches what any later read will see.
    pub async fn create(&self, user: &User) -> DbResult<User> {
        let created_at = user.created_at.timestamp();
        let updated_at = user.updated_at.timestamp();

        let sql = format!(
            r#"
                INSERT INTO users (
                    username, role, email, nickname, password_hash,
                    created_at, updated_at
                ) VALUES (?, ?, ?, ?, ?, ?, ?)
                RETURNING {}
            "#,
            USER_COLUMNS
        );

        let row = sqlx::query(&sql)
            .bind(user.username.as_str())
            .bind(user.role.as_str())
            .bind(user.email.as_str())
            .bind(user.nickname.as_str())
            .bind(user.password_hash.as_str())
            .bind(created_at)
            .bind(updated_at)
            .fetch_one(&self.pool)
            .await?;

        Self::map_user(&row)
    }

    /// List users matching the filter, ordered by id.
    /// An empty result is a valid "not found".
    pub async fn list(&self, find: &FindUser) -> DbResult<Vec<User>> {
        let mut builder: QueryBuilder<Sqlite> =
            QueryBuilder::new(format!("SELECT {} FROM users WHERE 1=1", USER_COLUMNS));

        if let Some(id) = find.id {
            builder.push(" AND id = ");
            builder.push_bind(id);
        }

        if let Some(ref username) = find.username {
            builder.push(" AND username = ");
            builder.push_bind(username.as_str());
        }

        if let Some(ref email) = find.email {
            builder.push(" AND email = ");
            builder.push_bind(email.as_str());
        }

        builder.push(" ORDER BY id");

        let rows = builder.build().fetch_all(&self.pool).await?;

        rows.iter().map(Self::map_user).collect()
    }

    /// First user matching the filter, if any.
    pub async fn find_one(&self, find: &FindUser) -> DbResult<Option<User>> {
        let users = self.list(find).await?;
        Ok(users.into_iter().next())
    }

    /// Overwrite the columns named in `fields` for the user with `id` and
    /// return the updated row, or None when no such user exists. Always
    /// stamps `updated_at`, so the set clause is never empty.
    pub async fn update(&self, id: i32, fields: &UpdateUserFields) -> DbResult<Option<User>> {
        let updated_at = Utc::now().timestamp();

        let mut builder: QueryBuilder<Sqlite> = QueryBuilder::new("UPDATE users SET ");
        let mut assignments = builder.separated(", ");

        if let Some(ref password_hash) = fields.password_hash {
            assignments.push("password_hash = ");
            assignments.push_bind_unseparated(password_hash.as_str());
        }

        if let Some(ref email) = fields.email {
            assignments.push("email = ");
            assignments.push_bind_unseparated(email.as_str());
        }

        if let Some(ref nickname) = fields.nickname {
            assignments.push("nickname = ");
            assignments.push_bind_unseparated(nickname.as_str());
        }

        assignments.push("updated_at = ");
        assignments.push_bind_unseparated(updated_at);

        builder.push(" WHERE id = ");
        builder.push_bind(id);
        builder.push(format!(" RETURNING {}", USER_COLUMNS));

        let row = builder.build().fetch_optional(&self.pool).await?;

        row.as_ref().map(Self::map_user).transpose()
    }

    pub async fn count(&self) -> DbResult<i64> {
        let row = sqlx::query("SELECT COUNT(*) AS count FROM users")
            .fetch_one(&self.pool)
            .await?;

        Ok(row.try_get("count")?)
    }

    fn map_user(row: &SqliteRow) -> DbResult<User> {
        let role: String = row.try_get("role")?;
        let created_at: i64 = row.try_get("created_at")?;
        let updated_at: i64 = row.try_get("updated_at")?;

        Ok(User {
            id: row.try_get("id")?,
            username: row.try_get("username")?,
            role: Role::from_str(&role).map_err(|e| DbError::Initialization {
                message: format!("Invalid role in users.role: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?,
            email: row.try_get("email")?,
            nickname: row.try_get("nickname")?,
            password_hash: row.try_get("password_hash")?,
            created_at: DateTime::from_timestamp(created_at, 0).ok_or_else(|| {
                DbError::Initialization {
                    message: "Invalid timestamp in users.created_at".to_string(),
                    location: ErrorLocation::from(Location::caller()),
                }
            })?,
            updated_at: DateTime::from_timestamp(updated_at, 0).ok_or_else(|| {
                DbError::Initialization {
                    message: "Invalid timestamp in users.updated_at".to_string(),
                    location: ErrorLocation::from(Location::caller()),
                }
            })?,
        })
    }
}
