//! Item CRUD handlers.
//!
//! Each handler issues exactly one repository call and maps its outcome to a
//! status code through `itens_core::storage`.

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};

use itens_core::item::Item;
use itens_core::storage::{success_status_code, ItemOperation};

use crate::{handlers::ItemError, models::ItemPayload, state::AppState};

fn success(operation: ItemOperation) -> StatusCode {
    StatusCode::from_u16(success_status_code(operation)).unwrap_or(StatusCode::OK)
}

/// Location of an item resource, relative to the item routes.
pub fn item_location(id: i64) -> String {
    format!("/itens/{id}")
}

/// Parse an item ID from the path.
///
/// Integers and integral numbers such as `1.0` or `1e0` are accepted.
/// Anything else can never match a row, so callers treat `None` as not found.
pub fn parse_item_id(raw: &str) -> Option<i64> {
    let raw = raw.trim();
    if let Ok(id) = raw.parse::<i64>() {
        return Some(id);
    }

    let number = raw.parse::<f64>().ok()?;
    let in_range = number >= i64::MIN as f64 && number < i64::MAX as f64;
    (number.is_finite() && number.fract() == 0.0 && in_range).then_some(number as i64)
}

/// Create a new item (POST /itens).
pub async fn create_item(
    State(state): State<AppState>,
    ItemPayload(item): ItemPayload,
) -> Result<impl IntoResponse, ItemError> {
    tracing::debug!(payload = ?item, "Received create item request");

    let id = state
        .item_repo
        .create_item(&item)
        .await
        .map_err(|e| ItemError::repository(ItemOperation::Create, e))?;

    tracing::info!(item_id = id, "Created new item");

    Ok((
        success(ItemOperation::Create),
        [(header::LOCATION, item_location(id))],
    ))
}

/// List all items (GET /itens).
pub async fn list_items(State(state): State<AppState>) -> Result<Json<Vec<Item>>, ItemError> {
    let items = state
        .item_repo
        .list_items()
        .await
        .map_err(|e| ItemError::repository(ItemOperation::List, e))?;

    Ok(Json(items))
}

/// Get a single item by ID (GET /itens/{id}).
pub async fn get_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Item>, ItemError> {
    let id = parse_item_id(&id).ok_or(ItemError::absent(ItemOperation::Get))?;

    state
        .item_repo
        .get_item(id)
        .await
        .map_err(|e| ItemError::repository(ItemOperation::Get, e))?
        .map(Json)
        .ok_or(ItemError::absent(ItemOperation::Get))
}

/// Update an item by ID (PUT /itens/{id}).
pub async fn update_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ItemPayload(item): ItemPayload,
) -> Result<StatusCode, ItemError> {
    tracing::debug!(item_id = %id, payload = ?item, "Received update item request");

    let id = parse_item_id(&id).ok_or(ItemError::absent(ItemOperation::Update))?;

    state
        .item_repo
        .update_item(id, &item)
        .await
        .map_err(|e| ItemError::repository(ItemOperation::Update, e))?;

    tracing::info!(item_id = id, "Updated item");

    Ok(success(ItemOperation::Update))
}

/// Delete an item by ID (DELETE /itens/{id}).
pub async fn delete_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ItemError> {
    tracing::debug!(item_id = %id, "Received delete item request");

    let id = parse_item_id(&id).ok_or(ItemError::absent(ItemOperation::Delete))?;

    state
        .item_repo
        .delete_item(id)
        .await
        .map_err(|e| ItemError::repository(ItemOperation::Delete, e))?;

    tracing::info!(item_id = id, "Deleted item");

    Ok(success(ItemOperation::Delete))
}
