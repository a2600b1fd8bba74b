use crate::models::Account;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Row, SqlitePool};
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;

/// Role given to every account created through signup
pub const DEFAULT_ROLE: &str = "student";

/// Errors that can occur when interacting with the account store
#[derive(Debug, Error)]
pub enum AccountError {
    #[error("SQLx error: {0}")]
    SqlxError(#[from] sqlx::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Migration error: {0}")]
    MigrateError(#[from] sqlx::migrate::MigrateError),

    #[error("Email already registered: {0}")]
    DuplicateEmail(String),

    #[error("Invalid email or password")]
    InvalidCredentials,
}

/// SQLite-backed store for student accounts
///
/// One flat `users` table; passwords are compared as stored.
pub struct AccountStore {
    pool: SqlitePool,
}

impl AccountStore {
    /// Open (creating if missing) the database at `database_url`
    pub async fn new(database_url: &str, max_connections: u32) -> Result<Self, AccountError> {
        let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);

        if let Some(dir) = options.get_filename().parent() {
            if !dir.as_os_str().is_empty() {
                std::fs::create_dir_all(dir)?;
            }
        }

        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .acquire_timeout(Duration::from_secs(5))
            .connect_with(options)
            .await?;

        Self::from_pool(pool).await
    }

    /// Private in-memory database, used by tests
    pub async fn in_memory() -> Result<Self, AccountError> {
        // A single connection that never expires keeps the database alive
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect("sqlite::memory:")
            .await?;

        Self::from_pool(pool).await
    }

    async fn from_pool(pool: SqlitePool) -> Result<Self, AccountError> {
        // Run migrations on startup
        sqlx::migrate!("./migrations").run(&pool).await?;

        Ok(Self { pool })
    }

    /// Register a new student account
    pub async fn create_account(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<Account, AccountError> {
        let query = r#"
            INSERT INTO users (name, email, password, role)
            VALUES (?1, ?2, ?3, ?4)
        "#;

        let result = sqlx::query(query)
            .bind(name)
            .bind(email)
            .bind(password)
            .bind(DEFAULT_ROLE)
            .execute(&self.pool)
            .await;

        let done = match result {
            Ok(done) => done,
            Err(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => {
                return Err(AccountError::DuplicateEmail(email.to_string()));
            }
            Err(e) => return Err(e.into()),
        };

        tracing::debug!("Created account {} for {}", done.last_insert_rowid(), email);

        Ok(Account {
            id: done.last_insert_rowid(),
            name: name.to_string(),
            email: email.to_string(),
            role: DEFAULT_ROLE.to_string(),
        })
    }

    /// Look up the account matching both email and password
    pub async fn authenticate(&self, email: &str, password: &str) -> Result<Account, AccountError> {
        let query = r#"
            SELECT id, name, email, role
            FROM users
            WHERE email = ?1 AND password = ?2
        "#;

        let row = sqlx::query(query)
            .bind(email)
            .bind(password)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(AccountError::InvalidCredentials)?;

        Ok(Account {
            id: row.get("id"),
            name: row.get("name"),
            email: row.get("email"),
            role: row.get("role"),
        })
    }

    /// Number of registered accounts
    pub async fn count(&self) -> Result<i64, AccountError> {
        let row = sqlx::query("SELECT COUNT(*) AS total FROM users")
            .fetch_one(&self.pool)
            .await?;

        Ok(row.get("total"))
    }

    /// Health check for the database connection
    pub async fn health_check(&self) -> Result<bool, AccountError> {
        sqlx::query("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .map(|_| true)
            .map_err(Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_create_and_authenticate() {
        let store = AccountStore::in_memory().await.unwrap();

        let created = store
            .create_account("Maria Clara", "maria@example.com", "ibarra")
            .await
            .unwrap();
        assert_eq!(created.role, "student");

        let found = store.authenticate("maria@example.com", "ibarra").await.unwrap();
        assert_eq!(found, created);
        assert_eq!(store.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_duplicate_email() {
        let store = AccountStore::in_memory().await.unwrap();
        store.create_account("A", "dup@example.com", "x").await.unwrap();

        let err = store.create_account("B", "dup@example.com", "y").await.unwrap_err();
        assert!(matches!(err, AccountError::DuplicateEmail(ref e) if e == "dup@example.com"));
        assert_eq!(store.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_wrong_password() {
        let store = AccountStore::in_memory().await.unwrap();
        store.create_account("A", "a@example.com", "right").await.unwrap();

        let err = store.authenticate("a@example.com", "wrong").await.unwrap_err();
        assert!(matches!(err, AccountError::InvalidCredentials));

        let err = store.authenticate("nobody@example.com", "right").await.unwrap_err();
        assert!(matches!(err, AccountError::InvalidCredentials));
    }

    #[tokio::test]
    async fn test_health_check() {
        let store = AccountStore::in_memory().await.unwrap();
        assert!(store.health_check().await.unwrap());
    }
}
