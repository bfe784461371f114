//! Service layer hosting the repository methods.
//!
//! `OpsService` wraps `OpsDb` (raw database access). All repo methods are
//! implemented as `impl OpsService` blocks under `repos/`, and the service
//! implements the `ops-core` store traits so an edit session can commit
//! through it.

use crate::OpsDb;
use crate::error::DatabaseError;

pub struct OpsService {
    db: OpsDb,
}

impl OpsService {
    /// Create a new service wrapping a local database.
    ///
    /// # Arguments
    ///
    /// * `db_path` - Path to the libSQL database file, or `":memory:"` for tests.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened.
    pub async fn new_local(db_path: &str) -> Result<Self, DatabaseError> {
        let db = OpsDb::open_local(db_path).await?;
        Ok(Self { db })
    }

    /// Create from an existing `OpsDb`.
    #[must_use]
    pub const fn from_db(db: OpsDb) -> Self {
        Self { db }
    }

    /// Access the underlying database handle.
    #[must_use]
    pub const fn db(&self) -> &OpsDb {
        &self.db
    }
}
