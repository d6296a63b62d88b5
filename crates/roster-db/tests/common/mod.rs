use roster_core::{User, UserRole};
use roster_db::UserRepository;

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

/// Creates an in-memory SQLite pool
pub async fn create_test_pool() -> SqlitePool {
    let options = SqliteConnectOptions::new()
        .filename(":memory:")
        .create_if_missing(true);

    SqlitePoolOptions::new()
        .max_connections(1) // In-memory needs single connection
        .connect_with(options)
        .await
        .expect("Failed to create test pool")
}

/// Creates an initialized repository over an in-memory pool
pub async fn create_test_store() -> UserRepository {
    let store = UserRepository::new(create_test_pool().await);
    store.init().await.expect("Failed to initialize store");
    store
}

pub fn test_user(id: &str, name: &str, role: UserRole) -> User {
    User {
        id: id.to_string(),
        name: name.to_string(),
        email: format!("{}@example.com", name.to_lowercase().replace(' ', ".")),
        role,
    }
}
