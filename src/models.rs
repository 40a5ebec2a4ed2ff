use std::borrow::Cow;
use std::sync::Arc;

use chrono::{DateTime, SubsecRound, Utc};
use uuid::Uuid;
use validator::{Validate, ValidationError};

use crate::agents::WineAgent;
use crate::db::ConversationStore;

#[derive(Clone)]
pub struct AppState {
    pub agent: Arc<WineAgent>,
    pub store: Arc<dyn ConversationStore>,
}

impl AppState {
    pub fn new(agent: WineAgent, store: Arc<dyn ConversationStore>) -> Self {
        Self {
            agent: Arc::new(agent),
            store,
        }
    }
}

// Rows are read with runtime query_as, so no DATABASE_URL is needed to build

/// One answered question, stored once and never modified.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize, sqlx::FromRow)]
pub struct ConversationRecord {
    pub id: Uuid,
    pub session_id: Uuid,
    pub question: String,
    pub response: String,
    #[sqlx(rename = "created_at")]
    pub timestamp: DateTime<Utc>,
}

impl ConversationRecord {
    pub fn new(session_id: Uuid, question: impl Into<String>, response: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            session_id,
            question: question.into(),
            response: response.into(),
            // Postgres keeps microseconds; match it so the stored row reads back unchanged
            timestamp: Utc::now().trunc_subsecs(6),
        }
    }
}

// API Request/Response types

#[derive(Debug, serde::Deserialize, Validate)]
pub struct AskRequest {
    #[validate(custom(function = "validate_not_blank"))]
    pub question: String,
}

fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank")
            .with_message(Cow::Borrowed("Question cannot be empty")));
    }
    Ok(())
}

#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub struct AskResponse {
    pub id: Uuid,
    pub question: String,
    pub response: String,
    pub timestamp: DateTime<Utc>,
}

impl From<ConversationRecord> for AskResponse {
    fn from(record: ConversationRecord) -> Self {
        Self {
            id: record.id,
            question: record.question,
            response: record.response,
            timestamp: record.timestamp,
        }
    }
}

#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub struct RootResponse {
    pub message: String,
}

#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub struct WeatherResponse {
    pub weather: String,
}

#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub struct SearchResponse {
    pub query: String,
    pub results: String,
}

#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
    pub database: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_questions_fail_validation() {
        for question in ["", "   ", "\n\t"] {
            let request = AskRequest {
                question: question.to_string(),
            };
            assert!(request.validate().is_err(), "{question:?}");
        }
    }

    #[test]
    fn test_question_passes_validation() {
        let request = AskRequest {
            question: "What wines do you offer?".to_string(),
        };
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_validation_error_message() {
        let request = AskRequest {
            question: " ".to_string(),
        };
        let err: crate::types::AppError = request.validate().unwrap_err().into();
        assert_eq!(err.to_string(), "Invalid request: Question cannot be empty");
    }

    #[test]
    fn test_timestamp_has_microsecond_precision() {
        let record = ConversationRecord::new(Uuid::new_v4(), "q", "r");
        assert_eq!(record.timestamp.timestamp_subsec_nanos() % 1_000, 0);
    }

    #[test]
    fn test_records_get_fresh_ids() {
        let session = Uuid::new_v4();
        let a = ConversationRecord::new(session, "q", "r");
        let b = ConversationRecord::new(session, "q", "r");
        assert_ne!(a.id, b.id);
        assert_eq!(a.session_id, b.session_id);
    }
}
