use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};

use crate::order_handlers::create_payment_order;
use crate::AppState;

pub async fn health() -> &'static str {
    "ok"
}

/// The CORS layer is deliberately permissive: the endpoint is consumed by
/// browser storefronts on arbitrary origins, and it answers `OPTIONS`
/// preflights itself, before any handler (and any gateway call) runs.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/healthz", get(health))
        .route("/orders", post(create_payment_order))
        .with_state(state)
        .layer(cors)
}
