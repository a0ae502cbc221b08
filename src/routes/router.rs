/**
 * Router Assembly
 *
 * Combines the health check, the API routes, the CORS layer, and the 404
 * fallback into the final Axum router.
 */

use axum::{
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};
use chrono::Utc;
use tower_http::cors::CorsLayer;

use crate::routes::api_routes::configure_api_routes;
use crate::server::state::AppState;

/// Create the Axum router with all routes configured.
pub fn create_router(state: AppState) -> Router {
    let router = Router::new().route("/", get(health));

    let router = configure_api_routes(router, &state);

    router
        .fallback(fallback)
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// GET / - liveness check.
async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "message": "Server is running",
        "data": null,
        "timestamp": Utc::now().to_rfc3339(),
    }))
}

/// 404 handler for unknown routes.
async fn fallback() -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::NOT_FOUND,
        Json(serde_json::json!({ "message": "Route not found" })),
    )
}
