use axum::http::StatusCode;

/// GET / - Welcome message.
pub async fn index() -> &'static str {
    "Bem-vindo!"
}

/// Fallback for unknown paths and unsupported methods: 404 with no body.
pub async fn not_found() -> StatusCode {
    StatusCode::NOT_FOUND
}
