//! SQLite row conversion functions.

use itens_core::item::Item;
use rusqlite::Row;

/// Convert a SQLite row to an Item.
///
/// Expected columns: id, nome, descricao
pub fn row_to_item(row: &Row) -> rusqlite::Result<Item> {
    Ok(Item {
        id: row.get(0)?,
        nome: row.get(1)?,
        descricao: row.get(2)?,
    })
}
