//! Storage backend implementation.
//!
//! Provides the SQLite implementation of the `ItemRepository` trait defined in
//! `itens_core::storage`, together with the storage handle that owns the
//! connection.

pub mod sqlite;

pub use sqlite::{SqliteDatabase, SqliteItemRepository};
