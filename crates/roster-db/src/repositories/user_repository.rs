//! User repository - the system of record for the directory UI.
//!
//! A fresh repository starts uninitialized; `init()` creates the backing
//! table and transitions it to ready. Every other operation fails with
//! [`DbError::Uninitialized`] until then, and there is no way back.
//!
//! The remote feed only ever flows INTO this table (see roster-sync); rows
//! created locally are never written back and never deleted by a sync.

use crate::{DbError, Result as DbErrorResult};

use roster_core::{ErrorLocation, User, UserPatch, UserRole};

use std::panic::Location;
use std::str::FromStr;
use std::sync::atomic::{AtomicBool, Ordering};

use sqlx::SqlitePool;

const CREATE_USERS_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS users (
        id TEXT PRIMARY KEY,
        name TEXT NOT NULL,
        email TEXT NOT NULL,
        role TEXT NOT NULL
    )
"#;

#[derive(sqlx::FromRow)]
struct UserRow {
    id: String,
    name: String,
    email: String,
    role: String,
}

impl UserRow {
    #[track_caller]
    fn into_user(self) -> DbErrorResult<User> {
        let role = UserRole::from_str(&self.role).map_err(|e| DbError::Initialization {
            message: format!("Invalid role in users.role: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        Ok(User {
            id: self.id,
            name: self.name,
            email: self.email,
            role,
        })
    }
}

pub struct UserRepository {
    pool: SqlitePool,
    initialized: AtomicBool,
}

impl UserRepository {
    /// Wrap a pool. The repository is not usable until `init()` has run.
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            pool,
            initialized: AtomicBool::new(false),
        }
    }

    /// Create the backing table if absent and mark the store ready.
    pub async fn init(&self) -> DbErrorResult<()> {
        sqlx::query(CREATE_USERS_TABLE).execute(&self.pool).await?;

        self.initialized.store(true, Ordering::Release);
        Ok(())
    }

    #[track_caller]
    fn ensure_ready(&self) -> DbErrorResult<()> {
        if !self.initialized.load(Ordering::Acquire) {
            return Err(DbError::Uninitialized {
                location: ErrorLocation::from(Location::caller()),
            });
        }
        Ok(())
    }

    /// All records, ordered by name ascending (BINARY collation).
    pub async fn find_all(&self) -> DbErrorResult<Vec<User>> {
        self.ensure_ready()?;

        let rows = sqlx::query_as::<_, UserRow>(
            "SELECT id, name, email, role FROM users ORDER BY name ASC",
        )
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(UserRow::into_user).collect()
    }

    /// Records whose role equals the given string, compared literally.
    /// Any string is accepted on the read side; unknown values match nothing.
    pub async fn find_by_role(&self, role: &str) -> DbErrorResult<Vec<User>> {
        self.ensure_ready()?;

        let rows = sqlx::query_as::<_, UserRow>(
            "SELECT id, name, email, role FROM users WHERE role = ? ORDER BY name ASC",
        )
        .bind(role)
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(UserRow::into_user).collect()
    }

    pub async fn find_by_id(&self, id: &str) -> DbErrorResult<Option<User>> {
        self.ensure_ready()?;

        let row = sqlx::query_as::<_, UserRow>(
            "SELECT id, name, email, role FROM users WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(UserRow::into_user).transpose()
    }

    /// Insert a new record. An existing id surfaces as
    /// [`DbError::DuplicateKey`], never as a silent replace.
    pub async fn add(&self, user: &User) -> DbErrorResult<()> {
        self.ensure_ready()?;

        sqlx::query("INSERT INTO users (id, name, email, role) VALUES (?, ?, ?, ?)")
            .bind(&user.id)
            .bind(&user.name)
            .bind(&user.email)
            .bind(user.role.as_str())
            .execute(&self.pool)
            .await
            .map_err(|e| match &e {
                sqlx::Error::Database(db) if db.is_unique_violation() => DbError::DuplicateKey {
                    id: user.id.clone(),
                    location: ErrorLocation::from(Location::caller()),
                },
                _ => DbError::from(e),
            })?;

        Ok(())
    }

    /// Update only the fields populated in the patch.
    ///
    /// An empty patch succeeds without touching the database. An unknown id
    /// is a silent no-op: no row affected, no error.
    pub async fn update(&self, id: &str, patch: &UserPatch) -> DbErrorResult<()> {
        self.ensure_ready()?;

        if patch.is_empty() {
            return Ok(());
        }

        let mut sets = Vec::new();
        if patch.name.is_some() {
            sets.push("name = ?");
        }
        if patch.email.is_some() {
            sets.push("email = ?");
        }
        if patch.role.is_some() {
            sets.push("role = ?");
        }

        let sql = format!("UPDATE users SET {} WHERE id = ?", sets.join(", "));

        let mut query = sqlx::query(&sql);
        if let Some(ref name) = patch.name {
            query = query.bind(name);
        }
        if let Some(ref email) = patch.email {
            query = query.bind(email);
        }
        if let Some(role) = patch.role {
            query = query.bind(role.as_str());
        }

        query.bind(id).execute(&self.pool).await?;

        Ok(())
    }

    /// Remove the record if present; absent ids are not an error.
    pub async fn delete(&self, id: &str) -> DbErrorResult<()> {
        self.ensure_ready()?;

        sqlx::query("DELETE FROM users WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// Insert-or-replace each record as one atomic batch.
    ///
    /// Existing rows with matching ids are overwritten; rows absent from the
    /// input are left alone. An empty input is a valid no-op.
    pub async fn bulk_upsert(&self, users: &[User]) -> DbErrorResult<()> {
        self.ensure_ready()?;

        if users.is_empty() {
            return Ok(());
        }

        let mut tx = self.pool.begin().await?;

        for user in users {
            sqlx::query("INSERT OR REPLACE INTO users (id, name, email, role) VALUES (?, ?, ?, ?)")
                .bind(&user.id)
                .bind(&user.name)
                .bind(&user.email)
                .bind(user.role.as_str())
                .execute(&mut *tx)
                .await?;
        }

        tx.commit().await?;

        Ok(())
    }

    /// Remove all records.
    pub async fn clear(&self) -> DbErrorResult<()> {
        self.ensure_ready()?;

        sqlx::query("DELETE FROM users").execute(&self.pool).await?;

        Ok(())
    }

    /// Records whose name contains the substring, case-insensitively for
    /// ASCII (SQLite LIKE semantics). An empty substring matches everything.
    pub async fn search(&self, substring: &str) -> DbErrorResult<Vec<User>> {
        self.ensure_ready()?;

        let pattern = format!("%{}%", substring);

        let rows = sqlx::query_as::<_, UserRow>(
            "SELECT id, name, email, role FROM users WHERE name LIKE ? ORDER BY name ASC",
        )
        .bind(&pattern)
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(UserRow::into_user).collect()
    }
}
