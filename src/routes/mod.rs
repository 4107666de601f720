pub mod health;
pub mod openapi;
pub mod users;

use axum::{middleware::from_fn_with_state, routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::{
    middleware::{auth::authenticate, cors::read_only_cors},
    AppState,
};

/// Builds the full application router over `state`.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route("/api-docs/openapi.json", get(openapi::openapi_json))
        .route("/users/", users::list_route())
        .nest("/users", users::router())
        .layer(from_fn_with_state(state.clone(), authenticate))
        .with_state(state)
        .layer(read_only_cors())
        .layer(TraceLayer::new_for_http())
}
