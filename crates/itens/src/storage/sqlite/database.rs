//! SQLite storage handle.
//!
//! Owns the single connection to the database file and makes sure the itens
//! table exists before any repository call runs.

use std::path::Path;

use tokio_rusqlite::Connection;

use itens_core::storage::{RepositoryError, Result};

use super::{error::wrap_err, schema};

/// Owned handle to a single-file SQLite database.
///
/// Cloning is cheap: clones share the same background connection, so every
/// statement still runs one at a time.
#[derive(Clone)]
pub struct SqliteDatabase {
    conn: Connection,
}

impl SqliteDatabase {
    /// Opens the database file, creating it if it doesn't exist.
    ///
    /// Fails only when the file cannot be opened; schema creation failures
    /// are ignored.
    pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let conn = Connection::open(&path)
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        tracing::info!(path = %path.display(), "Connected to database");

        let database = Self { conn };
        database.ensure_schema().await;

        Ok(database)
    }

    /// Opens an in-memory database.
    ///
    /// Data is lost when the last clone of the handle is dropped.
    pub async fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        let database = Self { conn };
        database.ensure_schema().await;

        Ok(database)
    }

    /// Creates the itens table, treating any failure as "already exists".
    async fn ensure_schema(&self) {
        let result = self
            .conn
            .call(|conn| conn.execute_batch(schema::CREATE_ITENS_TABLE).map_err(wrap_err))
            .await;

        match result {
            Ok(()) => tracing::debug!("Table itens is ready"),
            Err(e) => tracing::debug!(error = %e, "Ignoring itens table creation failure"),
        }
    }

    /// Runs `function` on the connection's background thread.
    pub async fn call<F, R>(&self, function: F) -> tokio_rusqlite::Result<R>
    where
        F: FnOnce(&mut rusqlite::Connection) -> tokio_rusqlite::Result<R> + Send + 'static,
        R: Send + 'static,
    {
        self.conn.call(function).await
    }
}
