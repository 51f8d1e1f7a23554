//! User Registry Storage
//!
//! `SQLite` access for the single `users` table.
//!
//! There is no pool: [`UserStore`] opens a connection per operation and
//! releases it when the operation returns, on success and error alike.
//!
//! # Example
//!
//! ```rust,no_run
//! use registry_core::{InsertOutcome, Username};
//! use registry_storage::UserStore;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let store = UserStore::new("sqlite://users.db")?;
//! store.ensure_schema().await?;
//!
//! let username = Username::parse("dana")?;
//! match store.insert(&username).await? {
//!     InsertOutcome::Inserted(user) => println!("added #{}", user.id),
//!     InsertOutcome::Conflict => println!("already registered"),
//! }
//! # Ok(())
//! # }
//! ```

mod error;
mod store;

pub mod users;

pub use error::{Result, StorageError};
pub use store::UserStore;

use sqlx::migrate::Migrator;

// Embed migrations into binary
static MIGRATOR: Migrator = sqlx::migrate!("./migrations");
