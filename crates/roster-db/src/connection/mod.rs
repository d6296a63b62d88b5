use crate::Result;

use std::path::Path;

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

/// Open (creating if missing) the SQLite database backing the directory.
///
/// In-memory databases (`:memory:`) are capped at a single connection, since
/// each connection would otherwise see its own empty database.
pub async fn open_pool(path: impl AsRef<Path>) -> Result<SqlitePool> {
    let path = path.as_ref();

    let options = SqliteConnectOptions::new()
        .filename(path)
        .create_if_missing(true);

    let max_connections = if path == Path::new(":memory:") { 1 } else { 5 };

    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await?;

    Ok(pool)
}
