//! Out-of-band password reset.
//!
//! Runs against the same database file as `serve`, which may or may not be
//! running concurrently. The flow is one sequential pass: validate input,
//! open and migrate storage, resolve the target to a canonical username,
//! run the legacy bounds check, then apply a single field-masked update
//! through the service layer. Every failure is terminal; nothing is
//! retried and the only mutating call comes last.
//!
//! Two writers on the same row race with last-write-wins. The derived
//! maintenance port keeps a listener collision from happening; it does
//! nothing for concurrent data mutation.

use memoir_api::{LegacyUpdateUserRequest, ServiceError, UpdateUserRequest, UserService};
use memoir_config::{Config, ConfigError};
use memoir_core::User;
use memoir_db::{Database, DbError, FindUser, UserRepository};

use log::info;
use thiserror::Error;

/// `--id` value meaning "unset".
pub const ID_UNSET: i32 = -1;

#[derive(clap::Args, Debug)]
pub struct ResetPasswordArgs {
    /// User id
    #[arg(long, default_value_t = ID_UNSET)]
    pub id: i32,

    /// Username
    #[arg(long, default_value = "")]
    pub username: String,

    /// Email address
    #[arg(long, default_value = "")]
    pub email: String,

    /// New password
    #[arg(long, default_value = "")]
    pub password: String,
}

#[derive(Error, Debug)]
pub enum ResetPasswordError {
    #[error("user id, username or email address is required")]
    MissingIdentifier,

    #[error("password can not be blank")]
    MissingPassword,

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Db(#[from] DbError),

    #[error("user with {selector} not found")]
    UserNotFound { selector: String },

    #[error("password failed legacy validation: {0}")]
    Legacy(#[source] ServiceError),

    #[error("failed to reset password: {0}")]
    Update(#[source] ServiceError),
}

impl ResetPasswordError {
    /// True for input errors that warrant a usage hint instead of a plain
    /// error report.
    pub fn is_usage_error(&self) -> bool {
        matches!(self, Self::MissingIdentifier | Self::MissingPassword)
    }
}

pub type Result<T> = std::result::Result<T, ResetPasswordError>;

/// Reset one user's password directly against persistent storage.
///
/// Target precedence is fixed: id, then username, then email. A username
/// target is taken as-is without an existence lookup; a missing user then
/// surfaces from the update call itself. Returns the updated user for the
/// caller to report.
pub async fn run(config: &Config, args: &ResetPasswordArgs) -> Result<User> {
    let username = args.username.trim();
    let email = args.email.trim();

    // Input validation happens before any storage access.
    if args.id == ID_UNSET && username.is_empty() && email.is_empty() {
        return Err(ResetPasswordError::MissingIdentifier);
    }

    if args.password.trim().is_empty() {
        return Err(ResetPasswordError::MissingPassword);
    }

    // Open then migrate, strictly in that order. Reads and writes against
    // an unmigrated schema are undefined.
    let database_path = config.database_path()?;
    let db = Database::connect(&database_path).await?;
    db.migrate().await?;

    // The maintenance context runs on a derived port so it can never claim
    // the listener of a concurrently running serve process.
    let maintenance_config = config.for_maintenance();
    let repo = UserRepository::new(db.pool());
    let service = UserService::new(maintenance_config, db.pool());

    let canonical_username = if args.id != ID_UNSET {
        info!("Resetting password for user with id {}", args.id);

        let users = repo.list(&FindUser::by_id(args.id)).await?;
        match users.into_iter().next() {
            Some(user) => user.username,
            None => {
                return Err(ResetPasswordError::UserNotFound {
                    selector: format!("id {}", args.id),
                });
            }
        }
    } else if !username.is_empty() {
        info!("Resetting password for username {}", username);

        // No existence lookup here: the update call below is the check.
        username.to_string()
    } else {
        info!("Resetting password for user with email address {}", email);

        let users = repo.list(&FindUser::by_email(email)).await?;
        match users.into_iter().next() {
            Some(user) => user.username,
            None => {
                return Err(ResetPasswordError::UserNotFound {
                    selector: format!("email address {}", email),
                });
            }
        }
    };

    // The legacy bounds check runs before the service's own acceptance
    // logic, in addition to it, never instead of it.
    let legacy = LegacyUpdateUserRequest {
        password: Some(args.password.clone()),
    };
    legacy.validate().map_err(ResetPasswordError::Legacy)?;

    let request = UpdateUserRequest::password_reset(&canonical_username, &args.password);

    service
        .update_user(&canonical_username, &request)
        .await
        .map_err(ResetPasswordError::Update)
}
