use roster_core::{User, UserRole};
use roster_db::UserRepository;

use std::sync::Arc;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

/// Creates an initialized in-memory store
pub async fn create_test_store() -> Arc<UserRepository> {
    let options = SqliteConnectOptions::new()
        .filename(":memory:")
        .create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1) // In-memory needs single connection
        .connect_with(options)
        .await
        .expect("Failed to create test pool");

    let store = UserRepository::new(pool);
    store.init().await.expect("Failed to initialize store");
    Arc::new(store)
}

pub fn test_user(id: &str, name: &str, role: UserRole) -> User {
    User {
        id: id.to_string(),
        name: name.to_string(),
        email: format!("{}@example.com", name.to_lowercase().replace(' ', ".")),
        role,
    }
}
