use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

use super::handlers;
use super::state::AppState;

/// Builds the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/forecast/{zipcode}", get(handlers::get_forecast))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
