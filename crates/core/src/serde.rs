//! Serde helpers for request bodies.
//!
//! The store keeps `nome` and `descricao` as TEXT columns and accepts whatever
//! a client sends, so these helpers never reject a value for its type.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Deserialize an optional text field from any JSON value.
///
/// - `null` becomes `None`
/// - strings are kept as-is (including empty strings)
/// - numbers become their decimal representation
/// - booleans become `"1"` or `"0"`, matching what SQLite stores for them
/// - arrays and objects become their compact JSON text
pub fn deserialize_lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value_to_text(value))
}

fn value_to_text(value: Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(if b { "1" } else { "0" }.to_string()),
        other @ (Value::Array(_) | Value::Object(_)) => Some(other.to_string()),
    }
}
