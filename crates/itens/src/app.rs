use axum::{
    http::{header, Method},
    routing::get,
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{
    config::Config,
    handlers::{
        health::{healthz, livez},
        itens::{create_item, delete_item, get_item, list_items, update_item},
        root::{index, not_found},
    },
    state::AppState,
};

/// Create the application router with all routes and middleware.
pub fn create_app(state: AppState, config: &Config) -> Router {
    // CORS configuration for API endpoints
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE])
        .expose_headers([header::LOCATION]);

    // Item routes
    let item_routes = Router::new()
        .route("/itens", get(list_items).post(create_item))
        .route(
            "/itens/{id}",
            get(get_item).put(update_item).delete(delete_item),
        )
        .method_not_allowed_fallback(not_found)
        .layer(cors);

    let item_routes = match config.route_prefix() {
        Some(prefix) => Router::new().nest(&prefix, item_routes),
        None => item_routes,
    };

    // Main application router
    Router::new()
        .route("/", get(index))
        .route("/livez", get(livez))
        .route("/healthz", get(healthz))
        .merge(item_routes)
        .method_not_allowed_fallback(not_found)
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
