use axum::{routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{create_profile, delete_profile, get_profile, not_found};

pub fn create_router() -> Router {
    // Configure CORS
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route(
            "/profile",
            get(get_profile).post(create_profile).delete(delete_profile),
        )
        // Unknown routes get a JSON error envelope instead of a bare 404
        .fallback(not_found)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
