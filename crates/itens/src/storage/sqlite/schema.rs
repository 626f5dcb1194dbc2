//! SQLite schema definition and SQL query constants.
//!
//! Pure data, no I/O.

/// SQL statement to create the itens table.
pub const CREATE_ITENS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS itens (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    nome TEXT,
    descricao TEXT
);
"#;

pub const INSERT_ITEM: &str = r#"
INSERT INTO itens (nome, descricao)
VALUES (?1, ?2)
"#;

// No ORDER BY: rows come back in the engine's native scan order.
pub const SELECT_ITEMS: &str = r#"
SELECT id, nome, descricao
FROM itens
"#;

pub const SELECT_ITEM_BY_ID: &str = r#"
SELECT id, nome, descricao
FROM itens
WHERE id = ?1
"#;

pub const UPDATE_ITEM: &str = r#"
UPDATE itens
SET nome = ?1, descricao = ?2
WHERE id = ?3
"#;

pub const DELETE_ITEM: &str = r#"
DELETE FROM itens
WHERE id = ?1
"#;

pub const PING: &str = "SELECT 1";
