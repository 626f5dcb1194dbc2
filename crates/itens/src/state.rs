//! Application state shared by all request handlers.

use std::sync::Arc;

use itens_core::storage::{ItemRepository, Result};

use crate::{
    config::Config,
    storage::{SqliteDatabase, SqliteItemRepository},
};

/// Shared application state.
///
/// Cloned for each request; the repository behind it is shared.
#[derive(Clone)]
pub struct AppState {
    /// Item repository.
    pub item_repo: Arc<dyn ItemRepository>,
}

impl AppState {
    /// Creates a new AppState around the given repository.
    pub fn new(item_repo: Arc<dyn ItemRepository>) -> Self {
        Self { item_repo }
    }

    /// Opens the SQLite database named in the configuration.
    pub async fn from_config(config: &Config) -> Result<Self> {
        let database = SqliteDatabase::open(&config.sqlite_path).await?;

        Ok(Self::new(Arc::new(SqliteItemRepository::new(database))))
    }

    /// Creates an AppState backed by a fresh in-memory database.
    #[cfg(test)]
    pub async fn in_memory() -> Self {
        let database = SqliteDatabase::open_in_memory()
            .await
            .expect("Failed to open in-memory database");

        Self::new(Arc::new(SqliteItemRepository::new(database)))
    }
}
