use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use itens_core::item::Item;
use itens_core::storage::{failure_status_code, ItemOperation, RepositoryError};

/// An item operation that produced nothing.
///
/// Whether the row was missing or the store failed, the client sees the same
/// response; the cause is only logged.
#[derive(Debug)]
pub struct ItemError {
    operation: ItemOperation,
    cause: Option<RepositoryError>,
}

impl ItemError {
    /// The operation found nothing to act on.
    pub fn absent(operation: ItemOperation) -> Self {
        Self {
            operation,
            cause: None,
        }
    }

    /// The repository returned an error.
    pub fn repository(operation: ItemOperation, error: RepositoryError) -> Self {
        Self {
            operation,
            cause: Some(error),
        }
    }

    pub fn status(&self) -> StatusCode {
        StatusCode::from_u16(failure_status_code(self.operation))
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }
}

impl IntoResponse for ItemError {
    fn into_response(self) -> Response {
        let status = self.status();

        match &self.cause {
            Some(error) if !error.is_not_found() => tracing::warn!(
                operation = self.operation.as_str(),
                status = %status,
                error = %error,
                "Store failure reported as absent result"
            ),
            _ => tracing::debug!(
                operation = self.operation.as_str(),
                status = %status,
                "Item not found"
            ),
        }

        match self.operation {
            ItemOperation::List => (status, Json(Vec::<Item>::new())).into_response(),
            _ => status.into_response(),
        }
    }
}
