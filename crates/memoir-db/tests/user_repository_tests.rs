mod common;

use common::{create_test_pool, create_test_user};

use memoir_core::{Role, User};
use memoir_db::{FindUser, UpdateUserFields, UserRepository};

use googletest::prelude::*;

#[tokio::test]
async fn given_valid_user_when_created_then_can_be_found_by_id() {
    // Given: A test database
    let pool = create_test_pool().await;
    let repo = UserRepository::new(pool.clone());

    // When: Creating a user
    let created = create_test_user(&pool, "alice").await;

    // Then: Finding by id returns the user
    let result = repo.find_one(&FindUser::by_id(created.id)).await.unwrap();

    assert_that!(result, some(anything()));
    let found = result.unwrap();
    assert_that!(found.id, eq(created.id));
    assert_that!(found.username.as_str(), eq("alice"));
    assert_that!(found.email.as_str(), eq("alice@example.com"));
    assert_that!(found.role, eq(Role::User));
}

#[tokio::test]
async fn given_created_user_when_read_back_then_timestamps_match() {
    // Given: A test database
    let pool = create_test_pool().await;
    let repo = UserRepository::new(pool.clone());

    // When: Creating a user
    let created = create_test_user(&pool, "alice").await;

    // Then: The persisted timestamps equal what create returned
    let found = repo
        .find_one(&FindUser::by_id(created.id))
        .await
        .unwrap()
        .unwrap();

    assert_that!(found.created_at, eq(created.created_at));
    assert_that!(found.updated_at, eq(created.updated_at));
}

#[tokio::test]
async fn given_empty_database_when_finding_nonexistent_id_then_returns_none() {
    // Given: An empty database
    let pool = create_test_pool().await;
    let repo = UserRepository::new(pool);

    // When: Finding a user that doesn't exist
    let result = repo.find_one(&FindUser::by_id(999)).await.unwrap();

    // Then: Returns None
    assert_that!(result, none());
}

#[tokio::test]
async fn given_empty_database_when_listing_then_returns_empty_vec() {
    // Given: An empty database
    let pool = create_test_pool().await;
    let repo = UserRepository::new(pool);

    // When: Listing with no filter
    let result = repo.list(&FindUser::default()).await.unwrap();

    // Then: Empty list, not an error
    assert_that!(result, is_empty());
}

#[tokio::test]
async fn given_existing_user_when_found_by_username_then_returns_user() {
    // Given
    let pool = create_test_pool().await;
    let repo = UserRepository::new(pool.clone());
    create_test_user(&pool, "bob").await;

    // When
    let result = repo.find_one(&FindUser::by_username("bob")).await.unwrap();

    // Then
    assert_that!(result, some(anything()));
    assert_that!(result.unwrap().username.as_str(), eq("bob"));
}

#[tokio::test]
async fn given_existing_user_when_found_by_email_then_returns_user() {
    // Given
    let pool = create_test_pool().await;
    let repo = UserRepository::new(pool.clone());
    create_test_user(&pool, "carol").await;

    // When
    let result = repo
        .find_one(&FindUser::by_email("carol@example.com"))
        .await
        .unwrap();

    // Then
    assert_that!(result, some(anything()));
    assert_that!(result.unwrap().username.as_str(), eq("carol"));
}

#[tokio::test]
async fn given_multiple_users_when_listing_then_ordered_by_id() {
    // Given
    let pool = create_test_pool().await;
    let repo = UserRepository::new(pool.clone());
    let first = create_test_user(&pool, "alice").await;
    let second = create_test_user(&pool, "bob").await;

    // When
    let users = repo.list(&FindUser::default()).await.unwrap();

    // Then
    assert_that!(users.len(), eq(2));
    assert_that!(users[0].id, eq(first.id));
    assert_that!(users[1].id, eq(second.id));
    assert_that!(first.id, lt(second.id));
}

#[tokio::test]
async fn given_duplicate_username_when_created_then_error() {
    // Given
    let pool = create_test_pool().await;
    let repo = UserRepository::new(pool.clone());
    create_test_user(&pool, "alice").await;

    // When: Creating a second user with the same username
    let duplicate = User::new("alice".to_string(), "other-hash".to_string(), Role::User);
    let result = repo.create(&duplicate).await;

    // Then
    assert_that!(result, err(anything()));
}

#[tokio::test]
async fn given_existing_user_when_password_hash_updated_then_other_columns_unchanged() {
    // Given
    let pool = create_test_pool().await;
    let repo = UserRepository::new(pool.clone());
    let user = create_test_user(&pool, "alice").await;

    // When: Updating only the password hash
    let fields = UpdateUserFields {
        password_hash: Some("new-hash".to_string()),
        ..UpdateUserFields::default()
    };
    let updated = repo.update(user.id, &fields).await.unwrap().unwrap();

    // Then: Only the hash and updated_at moved
    assert_that!(updated.password_hash.as_str(), eq("new-hash"));
    assert_that!(updated.username, eq(&user.username));
    assert_that!(updated.email, eq(&user.email));
    assert_that!(updated.nickname, eq(&user.nickname));
    assert_that!(updated.role, eq(user.role));
    assert_that!(updated.created_at, eq(user.created_at));
    assert_that!(updated.updated_at, ge(user.updated_at));
}

#[tokio::test]
async fn given_existing_user_when_multiple_fields_updated_then_all_applied() {
    // Given
    let pool = create_test_pool().await;
    let repo = UserRepository::new(pool.clone());
    let user = create_test_user(&pool, "alice").await;

    // When
    let fields = UpdateUserFields {
        password_hash: None,
        email: Some("new@example.com".to_string()),
        nickname: Some("Alice".to_string()),
    };
    let updated = repo.update(user.id, &fields).await.unwrap().unwrap();

    // Then
    assert_that!(updated.email.as_str(), eq("new@example.com"));
    assert_that!(updated.nickname.as_str(), eq("Alice"));
    assert_that!(updated.password_hash, eq(&user.password_hash));
}

#[tokio::test]
async fn given_nonexistent_id_when_updated_then_returns_none() {
    // Given
    let pool = create_test_pool().await;
    let repo = UserRepository::new(pool);

    // When
    let fields = UpdateUserFields {
        password_hash: Some("new-hash".to_string()),
        ..UpdateUserFields::default()
    };
    let result = repo.update(999, &fields).await.unwrap();

    // Then
    assert_that!(result, none());
}

#[tokio::test]
async fn given_update_when_persisted_then_visible_to_fresh_read() {
    // Given
    let pool = create_test_pool().await;
    let repo = UserRepository::new(pool.clone());
    let user = create_test_user(&pool, "alice").await;

    // When
    let fields = UpdateUserFields {
        password_hash: Some("new-hash".to_string()),
        ..UpdateUserFields::default()
    };
    repo.update(user.id, &fields).await.unwrap();

    // Then
    let found = repo
        .find_one(&FindUser::by_id(user.id))
        .await
        .unwrap()
        .unwrap();
    assert_that!(found.password_hash.as_str(), eq("new-hash"));
}

#[tokio::test]
async fn given_users_when_counted_then_matches_inserts() {
    // Given
    let pool = create_test_pool().await;
    let repo = UserRepository::new(pool.clone());

    // When / Then
    assert_that!(repo.count().await.unwrap(), eq(0));

    create_test_user(&pool, "alice").await;
    create_test_user(&pool, "bob").await;

    assert_that!(repo.count().await.unwrap(), eq(2));
}
