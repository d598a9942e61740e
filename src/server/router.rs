use axum::Router;
use axum::routing::get;
use tower_http::catch_panic::CatchPanicLayer;

use crate::features::calculator::handle_calculate;
use crate::features::health::handle_healthcheck;
use crate::server::{AppState, handle_panic};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(handle_healthcheck))
        .route("/:operation", get(handle_calculate))
        .route("/:operation/", get(handle_calculate))
        .layer(CatchPanicLayer::custom(handle_panic))
        .with_state(state)
}
