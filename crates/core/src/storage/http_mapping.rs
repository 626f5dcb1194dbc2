//! Pure functions for mapping item operation outcomes to HTTP status codes.
//!
//! Store faults are deliberately reported with the same status as the
//! "nothing there" outcome of each operation, so clients observe only
//! 200/201/204/400/404 from the item routes.

/// The item operations exposed over HTTP.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemOperation {
    Create,
    List,
    Get,
    Update,
    Delete,
}

impl ItemOperation {
    /// Short name used in log fields.
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemOperation::Create => "create",
            ItemOperation::List => "list",
            ItemOperation::Get => "get",
            ItemOperation::Update => "update",
            ItemOperation::Delete => "delete",
        }
    }
}

/// Status code for a successful operation.
///
/// - `Create` -> 201 (Created)
/// - `List`, `Get` -> 200 (OK)
/// - `Update`, `Delete` -> 204 (No Content)
pub fn success_status_code(operation: ItemOperation) -> u16 {
    match operation {
        ItemOperation::Create => 201,
        ItemOperation::List | ItemOperation::Get => 200,
        ItemOperation::Update | ItemOperation::Delete => 204,
    }
}

/// Status code for an operation that produced nothing, whatever the cause.
///
/// - `Create` -> 400 (no identifier was produced)
/// - `List` -> 200 (answered with an empty collection)
/// - `Get`, `Update`, `Delete` -> 404 (Not Found)
///
/// # Examples
///
/// ```
/// use itens_core::storage::{failure_status_code, ItemOperation};
///
/// assert_eq!(failure_status_code(ItemOperation::Update), 404);
/// ```
pub fn failure_status_code(operation: ItemOperation) -> u16 {
    match operation {
        ItemOperation::Create => 400,
        ItemOperation::List => 200,
        ItemOperation::Get | ItemOperation::Update | ItemOperation::Delete => 404,
    }
}
