use axum::{extract::State, routing::get, Json, Router};

use crate::db::RECENT_LIMIT;
use crate::models::{AppState, ConversationRecord};
use crate::types::AppResult;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/conversations", get(get_conversation_history))
        .with_state(state)
}

/// GET /api/conversations - Most recent conversations, newest first
async fn get_conversation_history(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<ConversationRecord>>> {
    let records = state.store.recent(RECENT_LIMIT).await?;
    Ok(Json(records))
}
