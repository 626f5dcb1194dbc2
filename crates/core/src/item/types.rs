use serde::{Deserialize, Serialize};

use crate::serde::deserialize_lenient_text;

/// A persisted item.
///
/// `id` is assigned by the store on creation and never changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: i64,
    pub nome: Option<String>,
    pub descricao: Option<String>,
}

impl Item {
    /// Builds the persisted form of `new_item` under the given id.
    pub fn from_new(id: i64, new_item: NewItem) -> Self {
        Self {
            id,
            nome: new_item.nome,
            descricao: new_item.descricao,
        }
    }
}

/// The writable fields of an item, as received on create and update.
///
/// Any `id` present in a request body is ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewItem {
    #[serde(default, deserialize_with = "deserialize_lenient_text")]
    pub nome: Option<String>,
    #[serde(default, deserialize_with = "deserialize_lenient_text")]
    pub descricao: Option<String>,
}

impl NewItem {
    /// Creates a new item with both fields set.
    pub fn new(nome: impl Into<String>, descricao: impl Into<String>) -> Self {
        Self {
            nome: Some(nome.into()),
            descricao: Some(descricao.into()),
        }
    }
}
