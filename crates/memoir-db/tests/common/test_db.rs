use memoir_db::Database;

use sqlx::SqlitePool;

/// Creates an in-memory SQLite pool with migrations run
pub async fn create_test_pool() -> SqlitePool {
    let db = Database::connect_in_memory()
        .await
        .expect("Failed to create test database");

    db.migrate().await.expect("Failed to run migrations");

    db.pool()
}
