use axum::http::{header, Method};
use tower_http::cors::{Any, CorsLayer};

/// Any origin may read; the API only serves `GET` with bearer tokens.
pub fn read_only_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([header::AUTHORIZATION, header::ACCEPT])
        .allow_origin(Any)
}
