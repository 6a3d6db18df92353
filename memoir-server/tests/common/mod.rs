#![allow(dead_code)]

//! Test infrastructure for memoir-server tests

use memoir_api::{CreateUserRequest, UserService};
use memoir_config::Config;
use memoir_core::User;
use memoir_db::Database;
use memoir_server::AppState;

use std::env;

use sqlx::SqlitePool;
use tempfile::TempDir;

pub const TEST_SECRET: &str = "test-secret-0123456789abcdef";

/// RAII guard for environment variables - automatically restores on drop
pub struct EnvGuard {
    key: &'static str,
    original: Option<String>,
}

impl EnvGuard {
    pub fn set(key: &'static str, value: &str) -> Self {
        unsafe {
            let original = env::var(key).ok();
            env::set_var(key, value);
            Self { key, original }
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        unsafe {
            match &self.original {
                Some(val) => env::set_var(self.key, val),
                None => env::remove_var(self.key),
            }
        }
    }
}

/// Point MEMOIR_CONFIG_DIR at a fresh temp directory.
pub fn setup_config_dir() -> (TempDir, EnvGuard) {
    let temp = TempDir::new().unwrap();
    let guard = EnvGuard::set("MEMOIR_CONFIG_DIR", temp.path().to_str().unwrap());
    (temp, guard)
}

/// Config with an auth secret set, so sign-in works in tests.
pub fn test_config() -> Config {
    let mut config = Config::default();
    config.auth.secret = Some(TEST_SECRET.to_string());
    config
}

/// Create a test pool with in-memory SQLite, migrations run
pub async fn create_test_pool() -> SqlitePool {
    let db = Database::connect_in_memory()
        .await
        .expect("Failed to create test database");

    db.migrate().await.expect("Failed to run migrations");

    db.pool()
}

/// Create AppState for router testing
pub async fn create_test_state() -> AppState {
    AppState {
        pool: create_test_pool().await,
        config: test_config(),
    }
}

/// Register a user through the service so the stored hash is real.
pub async fn register_user(state: &AppState, username: &str, password: &str) -> User {
    let service = UserService::new(state.config.clone(), state.pool.clone());

    service
        .create_user(&CreateUserRequest {
            username: username.to_string(),
            password: password.to_string(),
            email: format!("{}@example.com", username),
            nickname: username.to_string(),
        })
        .await
        .expect("Failed to register test user")
}

/// Sign in through the service and return a bearer token.
pub async fn sign_in(state: &AppState, username: &str, password: &str) -> String {
    let service = UserService::new(state.config.clone(), state.pool.clone());

    let (_, token) = service
        .sign_in(username, password)
        .await
        .expect("Failed to sign in test user");

    token
}
