use axum::Json;
use serde_json::{json, Value};

/// GET /healthz
pub async fn health_handler() -> Json<Value> {
    Json(json!({ "ok": true }))
}

/// GET /
/// Lists the public routes.
pub async fn index_handler() -> Json<Value> {
    Json(json!({
        "ok": true,
        "routes": ["/healthz", "/generate"]
    }))
}
