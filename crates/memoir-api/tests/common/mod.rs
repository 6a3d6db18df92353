use memoir_api::{CreateUserRequest, UserService};
use memoir_config::Config;
use memoir_core::User;
use memoir_db::Database;

use sqlx::SqlitePool;

pub const TEST_SECRET: &str = "test-secret-0123456789abcdef";

/// Creates an in-memory SQLite pool with migrations run
pub async fn create_test_pool() -> SqlitePool {
    let db = Database::connect_in_memory()
        .await
        .expect("Failed to create test database");

    db.migrate().await.expect("Failed to run migrations");

    db.pool()
}

/// Config with an auth secret set, so sign-in works in tests.
pub fn test_config() -> Config {
    let mut config = Config::default();
    config.auth.secret = Some(TEST_SECRET.to_string());
    config
}

pub async fn create_test_service() -> (UserService, SqlitePool) {
    let pool = create_test_pool().await;
    let service = UserService::new(test_config(), pool.clone());
    (service, pool)
}

/// Register a user through the service so the stored hash is real.
pub async fn register_user(service: &UserService, username: &str, password: &str) -> User {
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
