//! Test helpers and fixtures for storage integration tests
//!
//! These helpers create test databases using REAL SQLite files (NOT in-memory):
//! every operation opens a fresh connection, and each `:memory:` connection
//! would see its own empty database.

use registry_storage::UserStore;
use tempfile::TempDir;

/// Test database wrapper that cleans up on drop
pub struct TestDb {
    pub store: UserStore,
    _temp_dir: TempDir,
}

impl TestDb {
    /// Create a store on an empty database file; the schema is NOT applied
    pub fn empty() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let db_path = temp_dir.path().join("test.db");
        let db_url = format!("sqlite://{}", db_path.display());

        let store = UserStore::new(&db_url).expect("Failed to configure store");

        Self {
            store,
            _temp_dir: temp_dir,
        }
    }

    /// Create a store with schema applied and seed rows present
    pub async fn seeded() -> Self {
        let db = Self::empty();
        db.store
            .ensure_schema()
            .await
            .expect("Failed to ensure schema");
        db
    }

    /// Get the store reference
    pub fn store(&self) -> &UserStore {
        &self.store
    }
}
