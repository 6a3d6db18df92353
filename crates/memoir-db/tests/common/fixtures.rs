use memoir_core::{Role, User};
use memoir_db::UserRepository;

use sqlx::SqlitePool;

/// Inserts a user with a throwaway password hash and returns the persisted row.
pub async fn create_test_user(pool: &SqlitePool, username: &str) -> User {
    let repo = UserRepository::new(pool.clone());

    let mut user = User::new(
        username.to_string(),
        format!("hash-{}", username),
        Role::User,
    );
    user.email = format!("{}@example.com", username);
    user.nickname = username.to_string();

    repo.create(&user).await.expect("Failed to create test user")
}
