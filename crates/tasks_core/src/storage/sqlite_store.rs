use crate::error::AppError;
use rusqlite::{Connection, Params, Row};
use std::path::Path;

const SCHEMA_SQL: &str = "CREATE TABLE IF NOT EXISTS tasks (
    id TEXT PRIMARY KEY,
    description TEXT NOT NULL,
    done BOOLEAN NOT NULL DEFAULT 0,
    created_at DATETIME NOT NULL DEFAULT CURRENT_TIMESTAMP
)";

/// Owns the SQLite connection for one process invocation. The schema is
/// created on open if missing; the connection closes when the store drops.
pub struct Store {
    conn: Connection,
}

impl Store {
    pub fn open(path: &Path) -> Result<Self, AppError> {
        let conn = Connection::open(path).map_err(storage_error)?;
        conn.execute(SCHEMA_SQL, []).map_err(storage_error)?;
        Ok(Self { conn })
    }

    /// Run a single write statement inside its own transaction. Any failure
    /// before commit rolls the transaction back when it drops. Returns the
    /// affected row count.
    pub fn execute_write<P: Params>(&mut self, sql: &str, params: P) -> Result<usize, AppError> {
        let tx = self.conn.transaction().map_err(storage_error)?;
        let affected = tx.execute(sql, params).map_err(storage_error)?;
        tx.commit().map_err(storage_error)?;
        Ok(affected)
    }

    pub fn query_rows<T, P, F>(&self, sql: &str, params: P, map: F) -> Result<Vec<T>, AppError>
    where
        P: Params,
        F: FnMut(&Row<'_>) -> rusqlite::Result<T>,
    {
        let mut stmt = self.conn.prepare(sql).map_err(storage_error)?;
        let rows = stmt.query_map(params, map).map_err(storage_error)?;
        rows.collect::<rusqlite::Result<Vec<T>>>()
            .map_err(storage_error)
    }
}

fn storage_error(err: rusqlite::Error) -> AppError {
    AppError::storage(err.to_string())
}
