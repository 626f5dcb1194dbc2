use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Form,
};
use serde_json::Value;
use thiserror::Error;

use itens_core::item::NewItem;

/// Request body for creating or updating an item.
///
/// JSON is decoded when the content type is `application/json`, `+json`, or
/// missing; `application/x-www-form-urlencoded` is decoded as a form. Any
/// other content type, an empty body, and a top-level JSON array all yield an
/// item with no fields set. Field contents are not validated.
#[derive(Debug)]
pub struct ItemPayload(pub NewItem);

/// Rejection for bodies that cannot be decoded at all.
#[derive(Debug, Error)]
pub enum ItemPayloadRejection {
    #[error("Failed to read body: {0}")]
    Body(String),
    #[error("Failed to parse form: {0}")]
    Form(String),
    #[error("Failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Failed to parse JSON: expected an object or an array")]
    NotObject,
}

impl IntoResponse for ItemPayloadRejection {
    fn into_response(self) -> Response {
        let message = self.to_string();
        tracing::warn!(status = %StatusCode::BAD_REQUEST, message = %message, "Rejected item body");
        (StatusCode::BAD_REQUEST, message).into_response()
    }
}

/// How a request body is decoded, based on its content type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BodyKind {
    Json,
    Form,
    Ignored,
}

impl<S> FromRequest<S> for ItemPayload
where
    S: Send + Sync,
{
    type Rejection = ItemPayloadRejection;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match body_kind(&req) {
            BodyKind::Form => {
                let Form(pairs) = Form::<Vec<(String, String)>>::from_request(req, state)
                    .await
                    .map_err(|e| ItemPayloadRejection::Form(e.body_text()))?;
                Ok(Self(item_from_form_pairs(pairs)))
            }
            BodyKind::Json => {
                let bytes = Bytes::from_request(req, state)
                    .await
                    .map_err(|e| ItemPayloadRejection::Body(e.body_text()))?;
                parse_json_body(&bytes).map(Self)
            }
            BodyKind::Ignored => Ok(Self(NewItem::default())),
        }
    }
}

fn body_kind(req: &Request) -> BodyKind {
    let Some(value) = req.headers().get(header::CONTENT_TYPE) else {
        return BodyKind::Json;
    };

    let essence = value
        .to_str()
        .unwrap_or_default()
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    if essence == "application/x-www-form-urlencoded" {
        BodyKind::Form
    } else if essence == "application/json" || essence.ends_with("+json") {
        BodyKind::Json
    } else {
        BodyKind::Ignored
    }
}

/// Build an item from decoded form pairs; the last value of a repeated key wins.
fn item_from_form_pairs(pairs: Vec<(String, String)>) -> NewItem {
    let mut item = NewItem::default();
    for (key, value) in pairs {
        match key.as_str() {
            "nome" => item.nome = Some(value),
            "descricao" => item.descricao = Some(value),
            _ => {}
        }
    }
    item
}

/// Parse a JSON body.
///
/// An empty (or whitespace-only) body and a top-level array carry no fields;
/// any other non-object value is rejected.
fn parse_json_body(bytes: &[u8]) -> Result<NewItem, ItemPayloadRejection> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(NewItem::default());
    }

    match serde_json::from_slice::<Value>(bytes)? {
        object @ Value::Object(_) => Ok(serde_json::from_value(object)?),
        Value::Array(_) => Ok(NewItem::default()),
        _ => Err(ItemPayloadRejection::NotObject),
    }
}
