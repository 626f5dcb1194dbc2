use async_trait::async_trait;

use crate::item::{Item, NewItem};

use super::Result;

/// Repository for item operations.
///
/// Every call resolves exactly once and is never retried.
#[async_trait]
pub trait ItemRepository: Send + Sync {
    /// Inserts a new item and returns the id assigned by the store.
    async fn create_item(&self, item: &NewItem) -> Result<i64>;

    /// Gets every item, in the store's native scan order.
    async fn list_items(&self) -> Result<Vec<Item>>;

    /// Gets an item by its ID.
    async fn get_item(&self, id: i64) -> Result<Option<Item>>;

    /// Overwrites `nome` and `descricao` of an existing item.
    ///
    /// Returns `RepositoryError::NotFound` when no row was affected.
    async fn update_item(&self, id: i64, item: &NewItem) -> Result<()>;

    /// Deletes an item by its ID.
    ///
    /// Returns `RepositoryError::NotFound` when no row was affected.
    async fn delete_item(&self, id: i64) -> Result<()>;

    /// Checks that the store answers queries.
    async fn ping(&self) -> Result<()>;
}
