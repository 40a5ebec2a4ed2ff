// Napa Concierge - Smart wine assistant API for Napa Valley Premium Wines

pub mod config;
pub mod db;
pub mod models;
pub mod types;
pub mod knowledge;
pub mod agents;
pub mod llm;
pub mod tools;     // Weather and search lookups
pub mod routes;
pub mod middleware;
pub mod utils;

// Re-exports for convenience
pub use config::Config;
pub use models::AppState;

pub fn create_router(state: AppState) -> axum::Router {
    routes::create_router(state)
}
