//! API Routes
//!
//! This module organizes all HTTP endpoints for the application:
//! - `/api` - Greeting
//! - `/api/health` - Health checks
//! - `/api/wine/ask` - Ask the wine agent a question
//! - `/api/wine/weather` - Current Napa Valley weather
//! - `/api/wine/search/{query}` - Placeholder web search
//! - `/api/conversations` - Recent conversation history

pub mod conversations;
pub mod health;
pub mod wine;

use axum::Router;
use tower_http::trace::TraceLayer;
use crate::models::AppState;
use tracing::info;

/// Create the main application router
pub fn create_router(state: AppState) -> Router {
    info!("Creating application router");

    Router::new()
        .merge(health::router(state.clone()))
        .merge(wine::router(state.clone()))
        .merge(conversations::router(state))
        .layer(TraceLayer::new_for_http())
}
