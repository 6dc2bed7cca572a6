//! Database connection management.

use std::path::Path;

use rusqlite::{Connection, OpenFlags};

use super::DbError;

/// Handle to the flights database.
///
/// Owns the single long-lived connection: opened once at construction,
/// closed when the handle is dropped. All queries are synchronous and run
/// one at a time against this connection.
pub struct FlightDb {
    conn: Connection,
}

impl FlightDb {
    /// Open the flights database read-only.
    ///
    /// The tool never writes to the dataset. Opening read-only also means a
    /// missing file is reported as an error instead of being created as an
    /// empty database.
    pub fn open(path: &Path) -> Result<Self, DbError> {
        let flags = OpenFlags::SQLITE_OPEN_READ_ONLY
            | OpenFlags::SQLITE_OPEN_URI
            | OpenFlags::SQLITE_OPEN_NO_MUTEX;
        let conn = Connection::open_with_flags(path, flags).map_err(|e| DbError::OpenFailed {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Ok(Self { conn })
    }

    /// Create an in-memory database instance.
    ///
    /// Used for tests to avoid disk I/O and temp file management.
    #[cfg(test)]
    pub fn open_in_memory() -> Self {
        let conn = Connection::open_in_memory().expect("Failed to create in-memory DB");
        Self { conn }
    }

    pub(crate) fn conn(&self) -> &Connection {
        &self.conn
    }
}
