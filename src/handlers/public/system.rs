use std::sync::Arc;

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::{json, Value};

use crate::database::Store;
use crate::error::ApiError;

/// GET / - service banner
pub async fn root() -> Json<Value> {
    let version = env!("CARGO_PKG_VERSION");

    Json(json!({
        "name": "Pokedex API",
        "version": version,
        "description": "Records which Pokemon users like and view",
        "endpoints": {
            "home": "/ (public)",
            "health": "/health (public)",
            "like": "/api/like, /api/like/:pokemonId (protected)",
            "view": "/api/view (protected)",
        }
    }))
}

/// GET /health - pings the store
pub async fn health(State(store): State<Arc<dyn Store>>) -> impl IntoResponse {
    let now = chrono::Utc::now();

    match store.ping().await {
        Ok(()) => (
            StatusCode::OK,
            Json(json!({
                "status": "ok",
                "timestamp": now,
                "database": "ok"
            })),
        ),
        Err(e) => {
            tracing::warn!("Health check failed: {}", e);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({
                    "status": "degraded",
                    "timestamp": now,
                    "error": e.to_string()
                })),
            )
        }
    }
}

/// Fallback for unmatched paths, keeps the `{ "error": ... }` body shape
pub async fn not_found() -> ApiError {
    ApiError::not_found("Not found")
}
