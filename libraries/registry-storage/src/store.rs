/// Connection-per-operation access to the user database
use crate::error::{Result, StorageError};
use crate::{users, MIGRATOR};
use registry_core::{InsertOutcome, User, Username};
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode};
use sqlx::{ConnectOptions, SqliteConnection};
use std::str::FromStr;
use std::time::Duration;

const DEFAULT_BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Storage accessor for the `users` table
///
/// Holds connection settings only. Every operation opens its own
/// connection and drops it before returning, so no connection is ever
/// shared between requests.
#[derive(Debug, Clone)]
pub struct UserStore {
    options: SqliteConnectOptions,
}

impl UserStore {
    /// Create a store for a `SQLite` connection string
    /// (e.g. `sqlite://users.db`)
    ///
    /// The database file is created on first connection if missing.
    pub fn new(database_url: &str) -> Result<Self> {
        let options = SqliteConnectOptions::from_str(database_url)
            .map_err(|e| StorageError::connection(format!("{database_url}: {e}")))?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .busy_timeout(DEFAULT_BUSY_TIMEOUT);

        Ok(Self { options })
    }

    /// How long a statement waits on `SQLite`'s file lock before failing
    #[must_use]
    pub fn with_busy_timeout(mut self, timeout: Duration) -> Self {
        self.options = self.options.busy_timeout(timeout);
        self
    }

    /// Open a connection for the caller's exclusive use
    ///
    /// The connection is closed when the returned value is dropped.
    pub async fn connection(&self) -> Result<SqliteConnection> {
        let conn = self.options.connect().await?;
        Ok(conn)
    }

    /// Create the `users` table if absent and seed it when empty
    ///
    /// Safe to call on every start. Returns the number of seed rows written.
    pub async fn ensure_schema(&self) -> Result<u64> {
        let mut conn = self.connection().await?;

        MIGRATOR.run(&mut conn).await?;
        let seeded = users::seed_if_empty(&mut conn, &users::SEED_USERNAMES).await?;

        if seeded > 0 {
            tracing::info!(seeded, "Seeded empty users table");
        }
        Ok(seeded)
    }

    /// Look up a user by exact username
    pub async fn find_by_username(&self, username: &str) -> Result<Option<User>> {
        let mut conn = self.connection().await?;
        users::find_by_username(&mut conn, username).await
    }

    /// Whether a user with this username exists
    pub async fn exists(&self, username: &str) -> Result<bool> {
        Ok(self.find_by_username(username).await?.is_some())
    }

    /// All users in storage order
    pub async fn list(&self) -> Result<Vec<User>> {
        let mut conn = self.connection().await?;
        users::get_all(&mut conn).await
    }

    /// Number of registered users
    pub async fn count(&self) -> Result<i64> {
        let mut conn = self.connection().await?;
        users::count(&mut conn).await
    }

    /// Insert a user, reporting a taken username as a conflict
    pub async fn insert(&self, username: &Username) -> Result<InsertOutcome> {
        let mut conn = self.connection().await?;
        let outcome = users::insert(&mut conn, username).await?;

        if outcome.is_inserted() {
            tracing::debug!(username = %username, "Inserted user");
        }
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_bad_url() {
        let err = UserStore::new("sqlite://users.db?mode=sideways").unwrap_err();
        assert!(matches!(err, StorageError::Connection(_)));
    }

    #[test]
    fn test_new_accepts_sqlite_url() {
        assert!(UserStore::new("sqlite://users.db").is_ok());
        assert!(UserStore::new("sqlite::memory:").is_ok());
    }
}
