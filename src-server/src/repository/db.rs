//! Database Connection and Setup
//!
//! Opens the SQLite database and creates the schema.

use rusqlite::Connection;
use std::path::Path;
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::domain::{DomainError, DomainResult};

/// The single connection shared by every request
pub type DbConnection = Arc<Mutex<Connection>>;

impl From<rusqlite::Error> for DomainError {
    fn from(e: rusqlite::Error) -> Self {
        DomainError::Internal(e.to_string())
    }
}

/// Open the database at `db_path` (`:memory:` for an in-memory database)
/// and run migrations
pub fn init_db(db_path: &Path) -> DomainResult<DbConnection> {
    let conn = Connection::open(db_path)?;
    run_migrations(&conn)?;
    Ok(Arc::new(Mutex::new(conn)))
}

/// Run database migrations
fn run_migrations(conn: &Connection) -> DomainResult<()> {
    // AUTOINCREMENT keeps deleted ids from being handed out again
    conn.execute(
        "CREATE TABLE IF NOT EXISTS tasks (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            title TEXT NOT NULL,
            description TEXT NOT NULL DEFAULT '',
            completed INTEGER NOT NULL DEFAULT 0
        )",
        (),
    )?;

    Ok(())
}
