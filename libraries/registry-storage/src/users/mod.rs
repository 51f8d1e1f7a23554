//! User queries
//!
//! Each function runs exactly one statement on a connection borrowed from
//! the caller. Seeding is the only multi-statement operation and runs in a
//! transaction.

use crate::error::Result;
use registry_core::{InsertOutcome, User, Username};
use sqlx::{Connection, SqliteConnection};

/// Usernames inserted into an empty table
pub const SEED_USERNAMES: [&str; 4] = ["toms", "alice", "bob", "charlie"];

/// Look up a user by exact username
pub async fn find_by_username(
    conn: &mut SqliteConnection,
    username: &str,
) -> Result<Option<User>> {
    let user = sqlx::query_as::<_, User>(
        "SELECT id, username, created_at FROM users WHERE username = ?",
    )
    .bind(username)
    .fetch_optional(conn)
    .await?;

    Ok(user)
}

/// Get all users
///
/// No `ORDER BY`: rows come back in whatever order `SQLite` scans them,
/// which for this table is rowid order.
pub async fn get_all(conn: &mut SqliteConnection) -> Result<Vec<User>> {
    let users = sqlx::query_as::<_, User>("SELECT id, username, created_at FROM users")
        .fetch_all(conn)
        .await?;

    Ok(users)
}

/// Count registered users
pub async fn count(conn: &mut SqliteConnection) -> Result<i64> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
        .fetch_one(conn)
        .await?;

    Ok(count)
}

/// Insert a user
///
/// A `UNIQUE` violation on `username` is reported as
/// [`InsertOutcome::Conflict`]; `SQLite` rejects the statement as a whole,
/// so no row is written.
pub async fn insert(conn: &mut SqliteConnection, username: &Username) -> Result<InsertOutcome> {
    let result = sqlx::query_as::<_, User>(
        "INSERT INTO users (username) VALUES (?) RETURNING id, username, created_at",
    )
    .bind(username.as_str())
    .fetch_one(conn)
    .await;

    match result {
        Ok(user) => Ok(InsertOutcome::Inserted(user)),
        Err(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => {
            Ok(InsertOutcome::Conflict)
        }
        Err(e) => Err(e.into()),
    }
}

/// Insert `usernames` if and only if the table is empty
///
/// Returns the number of rows written. The write lock is taken up front so
/// a concurrent seeder waits on the busy timeout, then sees the rows.
pub async fn seed_if_empty(conn: &mut SqliteConnection, usernames: &[&str]) -> Result<u64> {
    let mut tx = conn.begin_with("BEGIN IMMEDIATE").await?;

    let existing: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
        .fetch_one(&mut *tx)
        .await?;
    if existing > 0 {
        return Ok(0);
    }

    let mut seeded = 0;
    for username in usernames {
        let result = sqlx::query("INSERT INTO users (username) VALUES (?)")
            .bind(*username)
            .execute(&mut *tx)
            .await?;
        seeded += result.rows_affected();
    }

    tx.commit().await?;

    Ok(seeded)
}
