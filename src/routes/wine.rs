use axum::{
    extract::{rejection::JsonRejection, Path, State},
    routing::{get, post},
    Json, Router,
};
use tracing::info;
use uuid::Uuid;
use validator::Validate;

use crate::models::{AppState, AskRequest, AskResponse, ConversationRecord, SearchResponse, WeatherResponse};
use crate::types::AppResult;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/wine/ask", post(ask_question))
        .route("/api/wine/weather", get(get_weather))
        .route("/api/wine/search/{query}", get(search_web))
        .with_state(state)
}

/// POST /api/wine/ask - Ask the wine agent a question
pub async fn ask_question(
    State(state): State<AppState>,
    payload: Result<Json<AskRequest>, JsonRejection>,
) -> AppResult<Json<AskResponse>> {
    let Json(request) = payload?;
    request.validate()?;

    // Every question starts a fresh session
    let session_id = Uuid::new_v4();
    info!(session_id = %session_id, question_len = request.question.len(), "Received wine question");

    let reply = state.agent.process_query(&request.question, session_id).await;
    let record = ConversationRecord::new(session_id, request.question, reply.into_text());
    state.store.append(&record).await?;

    Ok(Json(AskResponse::from(record)))
}

/// GET /api/wine/weather - Current Napa Valley weather
async fn get_weather(State(state): State<AppState>) -> Json<WeatherResponse> {
    let report = state.agent.weather().await;
    Json(WeatherResponse {
        weather: report.to_string(),
    })
}

/// GET /api/wine/search/{query} - Placeholder web search
async fn search_web(
    State(state): State<AppState>,
    Path(query): Path<String>,
) -> Json<SearchResponse> {
    let results = state.agent.search(&query);
    Json(SearchResponse { query, results })
}
