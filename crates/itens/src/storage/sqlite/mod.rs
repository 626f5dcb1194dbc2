//! SQLite storage backend implementation.
//!
//! Uses `rusqlite` for the statements and `tokio-rusqlite` to run them on the
//! connection's background thread without blocking the runtime.

mod conversions;
mod database;
mod error;
mod repository;
mod schema;

pub use database::SqliteDatabase;
pub use repository::SqliteItemRepository;
