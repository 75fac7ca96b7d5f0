//! API Routes
//!
//! Configures the Axum router for the item resource.

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::auth::{require_bearer, AuthState};
use super::handlers::{
    create_item, delete_item, health_handler, read_item, update_item, AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `POST /items/` - Create an item
/// - `GET /items/:id/` - Read an item (cached)
/// - `PUT /items/:id/` - Partially update an item
/// - `DELETE /items/:id/` - Delete an item
/// - `GET /health` - Health check, no credentials required
///
/// Read, update and delete share one path and are dispatched by method.
///
/// # Middleware
/// - Bearer auth on the item routes only
/// - CORS: Allows any origin
/// - Tracing: Logs all requests
pub fn create_router(state: AppState, auth: AuthState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let items = Router::new()
        .route("/items/", post(create_item))
        .route(
            "/items/:id/",
            get(read_item).put(update_item).delete(delete_item),
        )
        .route_layer(middleware::from_fn_with_state(auth, require_bearer));

    Router::new()
        .merge(items)
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
