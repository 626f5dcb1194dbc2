//! SQLite error mapping.
//!
//! Maps `tokio_rusqlite::Error` and `rusqlite::Error` to `RepositoryError` from
//! `itens_core::storage`.

use itens_core::storage::RepositoryError;

/// Helper to wrap rusqlite errors for tokio_rusqlite closures.
pub fn wrap_err(e: rusqlite::Error) -> tokio_rusqlite::Error {
    tokio_rusqlite::Error::Rusqlite(e)
}

/// Maps a rusqlite error to a RepositoryError.
///
/// # Error Mapping
///
/// - `QueryReturnedNoRows` with a known ID → `RepositoryError::NotFound`
/// - `SQLITE_CANTOPEN` → `RepositoryError::ConnectionFailed`
/// - All other errors → `RepositoryError::QueryFailed`
fn map_rusqlite_error(
    err: &rusqlite::Error,
    entity_type: &'static str,
    id: Option<i64>,
) -> RepositoryError {
    match (err, id) {
        (rusqlite::Error::QueryReturnedNoRows, Some(id)) => {
            RepositoryError::NotFound { entity_type, id }
        }

        (rusqlite::Error::SqliteFailure(sqlite_err, _), _)
            if sqlite_err.code == rusqlite::ErrorCode::CannotOpen =>
        {
            RepositoryError::ConnectionFailed(format!("Cannot open database: {err}"))
        }

        _ => RepositoryError::QueryFailed(err.to_string()),
    }
}

fn map_error(
    err: tokio_rusqlite::Error,
    entity_type: &'static str,
    id: Option<i64>,
) -> RepositoryError {
    match &err {
        tokio_rusqlite::Error::Rusqlite(rusqlite_err) => {
            map_rusqlite_error(rusqlite_err, entity_type, id)
        }
        tokio_rusqlite::Error::ConnectionClosed | tokio_rusqlite::Error::Close(_) => {
            RepositoryError::ConnectionFailed("Connection closed unexpectedly".to_string())
        }
        _ => RepositoryError::QueryFailed(err.to_string()),
    }
}

/// Maps a tokio_rusqlite error to a RepositoryError.
///
/// Use this for statements that do not target a single row.
pub fn map_tokio_rusqlite_error(
    err: tokio_rusqlite::Error,
    entity_type: &'static str,
) -> RepositoryError {
    map_error(err, entity_type, None)
}

/// Maps a tokio_rusqlite error with a known ID to a RepositoryError.
///
/// `QueryReturnedNoRows` becomes `NotFound` carrying the ID.
pub fn map_tokio_rusqlite_error_with_id(
    err: tokio_rusqlite::Error,
    entity_type: &'static str,
    id: i64,
) -> RepositoryError {
    map_error(err, entity_type, Some(id))
}
