//! SQLite repository implementation.
//!
//! Implements `ItemRepository` from `itens_core::storage` over an injected
//! [`SqliteDatabase`] handle.

use async_trait::async_trait;

use itens_core::item::{Item, NewItem};
use itens_core::storage::{ItemRepository, Result};

use super::conversions::row_to_item;
use super::database::SqliteDatabase;
use super::error::{map_tokio_rusqlite_error, map_tokio_rusqlite_error_with_id, wrap_err};
use super::schema;

const ENTITY: &str = "Item";

/// SQLite-based item repository.
pub struct SqliteItemRepository {
    db: SqliteDatabase,
}

impl SqliteItemRepository {
    /// Creates a repository over an already opened database.
    pub fn new(db: SqliteDatabase) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ItemRepository for SqliteItemRepository {
    async fn create_item(&self, item: &NewItem) -> Result<i64> {
        let nome = item.nome.clone();
        let descricao = item.descricao.clone();

        self.db
            .call(move |conn| {
                conn.execute(schema::INSERT_ITEM, rusqlite::params![nome, descricao])
                    .map_err(wrap_err)?;
                Ok(conn.last_insert_rowid())
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, ENTITY))
    }

    async fn list_items(&self) -> Result<Vec<Item>> {
        self.db
            .call(|conn| {
                let mut stmt = conn.prepare(schema::SELECT_ITEMS).map_err(wrap_err)?;
                let rows = stmt.query_map([], row_to_item).map_err(wrap_err)?;

                let mut items = Vec::new();
                for row_result in rows {
                    items.push(row_result.map_err(wrap_err)?);
                }
                Ok(items)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, ENTITY))
    }

    async fn get_item(&self, id: i64) -> Result<Option<Item>> {
        self.db
            .call(move |conn| {
                let mut stmt = conn.prepare(schema::SELECT_ITEM_BY_ID).map_err(wrap_err)?;
                match stmt.query_row([id], row_to_item) {
                    Ok(item) => Ok(Some(item)),
                    Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
                    Err(e) => Err(wrap_err(e)),
                }
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, ENTITY, id))
    }

    async fn update_item(&self, id: i64, item: &NewItem) -> Result<()> {
        let nome = item.nome.clone();
        let descricao = item.descricao.clone();

        self.db
            .call(move |conn| {
                let rows = conn
                    .execute(schema::UPDATE_ITEM, rusqlite::params![nome, descricao, id])
                    .map_err(wrap_err)?;
                if rows == 0 {
                    Err(wrap_err(rusqlite::Error::QueryReturnedNoRows))
                } else {
                    Ok(())
                }
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, ENTITY, id))
    }

    async fn delete_item(&self, id: i64) -> Result<()> {
        self.db
            .call(move |conn| {
                let rows = conn.execute(schema::DELETE_ITEM, [id]).map_err(wrap_err)?;
                if rows == 0 {
                    Err(wrap_err(rusqlite::Error::QueryReturnedNoRows))
                } else {
                    Ok(())
                }
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, ENTITY, id))
    }

    async fn ping(&self) -> Result<()> {
        self.db
            .call(|conn| {
                conn.query_row(schema::PING, [], |_| Ok(()))
                    .map_err(wrap_err)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, ENTITY))
    }
}
