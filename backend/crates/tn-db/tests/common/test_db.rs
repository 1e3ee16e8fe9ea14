use tn_core::User;
use tn_db::{Database, UserRepository};

use sqlx::SqlitePool;

/// Creates an in-memory database with migrations run
pub async fn create_test_database() -> Database {
    Database::open_in_memory()
        .await
        .expect("Failed to create test database")
}

/// Inserts a user and returns it with its assigned id
pub async fn create_saved_user(pool: &SqlitePool, username: &str) -> User {
    let repo = UserRepository::new(pool.clone());
    let mut user = crate::common::create_test_user(username);
    repo.create(&mut user).await.expect("Failed to create user");
    user
}

/// Counts rows in `table`, optionally restricted to one user
pub async fn count_rows(pool: &SqlitePool, table: &str, user_id: Option<i32>) -> i64 {
    // Use sqlx::query_scalar (not query_scalar!) to avoid offline mode issues in tests
    match user_id {
        Some(id) => sqlx::query_scalar(&format!(
            "SELECT COUNT(*) FROM {} WHERE user_id = ?",
            table
        ))
        .bind(id)
        .fetch_one(pool)
        .await
        .expect("Failed to count rows"),
        None => sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {}", table))
            .fetch_one(pool)
            .await
            .expect("Failed to count rows"),
    }
}
