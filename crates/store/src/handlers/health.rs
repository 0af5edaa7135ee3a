use axum::response::IntoResponse;
use axum::Json;
use serde_json::json;

/// GET /health
///
/// Liveness probe; reports the crate version.
pub async fn health() -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
