use axum::{extract::State, routing::get, Json, Router};
use tracing::warn;
use crate::models::{AppState, HealthResponse, RootResponse};

pub const GREETING: &str = "Napa Valley Premium Wines - Smart Wine Assistant API";

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api", get(root))
        .route("/api/", get(root))
        .route("/api/health", get(health_check))
        .with_state(state)
}

async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        message: GREETING.to_string(),
    })
}

async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let database = match state.store.health_check().await {
        Ok(()) => "connected",
        Err(e) => {
            warn!(error = %e, "Database health check failed");
            "unavailable"
        }
    };

    Json(HealthResponse {
        status: "ok".to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
        database: database.to_string(),
    })
}
