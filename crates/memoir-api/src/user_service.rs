//! Account service layer.
//!
//! Both surfaces of the product go through [`UserService`]: the HTTP
//! handlers in `memoir-server` and the out-of-band maintenance commands,
//! which instantiate it against the same database file without ever binding
//! a listener. The acting identity is an explicit parameter on every
//! authorized operation rather than ambient request state, so the
//! authorization dependency is visible in the signature.

use crate::{CreateUserRequest, Result as ServiceResult, ServiceError, UpdateUserRequest};

use memoir_auth::TokenSigner;
use memoir_config::Config;
use memoir_core::validation::check_password_length;
use memoir_core::{Role, User};
use memoir_db::{FindUser, UpdateUserFields, UserRepository};

use std::panic::Location;

use bcrypt::{DEFAULT_COST, hash, verify};
use error_location::ErrorLocation;
use sqlx::SqlitePool;

/// Attribute paths `update_user` accepts in a field mask.
const SUPPORTED_UPDATE_PATHS: &[&str] = &["password", "email", "nickname"];

const USERNAME_MAX_LEN: usize = 32;

pub struct UserService {
    config: Config,
    repo: UserRepository,
}

impl UserService {
    pub fn new(config: Config, pool: SqlitePool) -> Self {
        Self {
            config,
            repo: UserRepository::new(pool),
        }
    }

    /// Register a new account. The first account on an instance becomes the
    /// admin; everyone after that is a regular user.
    pub async fn create_user(&self, request: &CreateUserRequest) -> ServiceResult<User> {
        validate_username(&request.username)?;
        check_password_length(&request.password)?;

        if self
            .repo
            .find_one(&FindUser::by_username(request.username.as_str()))
            .await?
            .is_some()
        {
            return Err(ServiceError::validation(format!(
                "username `{}` is already taken",
                request.username
            )));
        }

        let role = if self.repo.count().await? == 0 {
            Role::Admin
        } else {
            Role::User
        };

        let password_hash = hash(&request.password, DEFAULT_COST)?;

        let mut user = User::new(request.username.clone(), password_hash, role);
        user.email = request.email.clone();
        user.nickname = request.nickname.clone();

        Ok(self.repo.create(&user).await?)
    }

    /// Verify credentials and issue an access token.
    pub async fn sign_in(&self, username: &str, password: &str) -> ServiceResult<(User, String)> {
        let Some(user) = self
            .repo
            .find_one(&FindUser::by_username(username))
            .await?
        else {
            return Err(ServiceError::InvalidCredentials {
                location: ErrorLocation::from(Location::caller()),
            });
        };

        if !verify(password, &user.password_hash)? {
            return Err(ServiceError::InvalidCredentials {
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let secret = self.config.auth.secret.as_deref().ok_or_else(|| {
            ServiceError::validation("auth.secret is not configured; sign-in is disabled")
        })?;

        let signer = TokenSigner::with_hs256(secret.as_bytes());
        let token = signer.issue(&user.username, user.role.as_str())?;

        Ok((user, token))
    }

    pub async fn get_user(&self, username: &str) -> ServiceResult<User> {
        self.repo
            .find_one(&FindUser::by_username(username))
            .await?
            .ok_or_else(|| ServiceError::not_found(format!("user {} not found", username)))
    }

    pub async fn list_users(&self) -> ServiceResult<Vec<User>> {
        Ok(self.repo.list(&FindUser::default()).await?)
    }

    /// Apply a field-scoped partial update to the user named in `request`.
    ///
    /// `acting_username` is who the operation runs as: it must resolve to an
    /// existing account and be either the target or an admin. Only the
    /// attributes named in the mask are touched.
    pub async fn update_user(
        &self,
        acting_username: &str,
        request: &UpdateUserRequest,
    ) -> ServiceResult<User> {
        let acting = self.get_user(acting_username).await?;

        if acting.username != request.username && !acting.role.is_admin() {
            return Err(ServiceError::permission_denied(format!(
                "user {} may not update user {}",
                acting.username, request.username
            )));
        }

        let target = if acting.username == request.username {
            acting
        } else {
            self.get_user(&request.username).await?
        };

        if request.update_mask.is_empty() {
            return Err(ServiceError::validation("update_mask cannot be empty"));
        }

        for path in request.update_mask.paths() {
            if !SUPPORTED_UPDATE_PATHS.contains(&path) {
                return Err(ServiceError::validation(format!(
                    "unsupported update_mask path `{}`",
                    path
                )));
            }
        }

        let mut fields = UpdateUserFields::default();

        if request.update_mask.contains("password") {
            let password = request
                .password
                .as_deref()
                .ok_or_else(|| ServiceError::validation("password is masked but not supplied"))?;
            check_password_length(password)?;
            fields.password_hash = Some(hash(password, DEFAULT_COST)?);
        }

        if request.update_mask.contains("email") {
            fields.email = Some(request.email.clone().unwrap_or_default());
        }

        if request.update_mask.contains("nickname") {
            fields.nickname = Some(request.nickname.clone().unwrap_or_default());
        }

        self.repo
            .update(target.id, &fields)
            .await?
            .ok_or_else(|| ServiceError::not_found(format!("user {} not found", request.username)))
    }
}

fn validate_username(username: &str) -> ServiceResult<()> {
    if username.is_empty() || username.len() > USERNAME_MAX_LEN {
        return Err(ServiceError::validation(format!(
            "username must be between 1 and {} characters",
            USERNAME_MAX_LEN
        )));
    }

    if !username
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || matches!(c, '.' | '_' | '-'))
    {
        return Err(ServiceError::validation(
            "username may only contain lowercase letters, digits, '.', '_' and '-'",
        ));
    }

    Ok(())
}
