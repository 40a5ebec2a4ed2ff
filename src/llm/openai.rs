// OpenAI-compatible chat completions adapter
// Works against OpenAI itself and OpenRouter, which speaks the same wire format.
// API Reference: https://platform.openai.com/docs/api-reference/chat/create

use crate::llm::provider::LLMAdapter;
use crate::types::{AppError, AppResult, LLMProvider, LLMRequest, LLMResponse, TokenUsage};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

const OPENAI_API_BASE: &str = "https://api.openai.com/v1";
const OPENROUTER_API_BASE: &str = "https://openrouter.ai/api/v1";

pub fn default_base_url(provider: LLMProvider) -> &'static str {
    match provider {
        LLMProvider::OpenAI => OPENAI_API_BASE,
        LLMProvider::OpenRouter => OPENROUTER_API_BASE,
    }
}

pub struct OpenAIAdapter {
    client: Client,
    api_key: String,
    base_url: String,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    user: Option<&'a str>,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
    #[serde(default)]
    usage: Option<ChatUsage>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatResponseMessage,
    #[serde(default)]
    finish_reason: Option<String>,
}

#[derive(Deserialize)]
struct ChatResponseMessage {
    #[serde(default)]
    content: Option<String>,
}

#[derive(Deserialize)]
struct ChatUsage {
    prompt_tokens: u32,
    completion_tokens: u32,
    total_tokens: u32,
}

#[derive(Deserialize)]
struct ErrorResponse {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: String,
    #[serde(rename = "type")]
    error_type: Option<String>,
}

impl OpenAIAdapter {
    pub fn new(api_key: &str) -> Self {
        Self::with_base_url(api_key, OPENAI_API_BASE)
    }

    pub fn with_base_url(api_key: &str, base_url: &str) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.to_string(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }
}

#[async_trait]
impl LLMAdapter for OpenAIAdapter {
    async fn create_chat_completion(&self, request: &LLMRequest) -> AppResult<LLMResponse> {
        let body = ChatRequest {
            model: &request.model,
            messages: request
                .messages
                .iter()
                .map(|m| ChatMessage {
                    role: &m.role,
                    content: &m.content,
                })
                .collect(),
            max_tokens: request.max_tokens,
            temperature: request.temperature,
            user: request.session_id.as_deref(),
        };

        let response = self
            .client
            .post(self.endpoint())
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| AppError::LLMApi(format!("request failed: {}", e)))?;

        let status = response.status();

        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();

            if let Ok(error_response) = serde_json::from_str::<ErrorResponse>(&error_text) {
                return Err(AppError::LLMApi(format!(
                    "provider error ({}): {} (type: {:?})",
                    status, error_response.error.message, error_response.error.error_type
                )));
            }

            return Err(AppError::LLMApi(format!("provider error ({}): {}", status, error_text)));
        }

        let chat_response: ChatResponse = response
            .json()
            .await
            .map_err(|e| AppError::LLMApi(format!("failed to parse response: {}", e)))?;

        let choice = chat_response
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| AppError::LLMApi("provider returned no choices".to_string()))?;

        let usage = chat_response
            .usage
            .map(|u| TokenUsage {
                prompt_tokens: u.prompt_tokens,
                completion_tokens: u.completion_tokens,
                total_tokens: u.total_tokens,
            })
            .unwrap_or_default();

        Ok(LLMResponse {
            content: choice.message.content.unwrap_or_default(),
            finish_reason: choice.finish_reason.unwrap_or_else(|| "stop".to_string()),
            usage,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::LLMMessage;
    use mockito::Matcher;
    use serde_json::json;

    fn request() -> LLMRequest {
        LLMRequest {
            model: "gpt-4o-mini".to_string(),
            messages: vec![
                LLMMessage::system("You are a sommelier."),
                LLMMessage::user("Which wine goes with salmon?"),
            ],
            max_tokens: None,
            temperature: Some(0.7),
            session_id: Some("session-123".to_string()),
        }
    }

    #[test]
    fn test_default_endpoints() {
        assert_eq!(default_base_url(LLMProvider::OpenAI), "https://api.openai.com/v1");
        assert_eq!(default_base_url(LLMProvider::OpenRouter), "https://openrouter.ai/api/v1");
        assert_eq!(
            OpenAIAdapter::new("k").endpoint(),
            "https://api.openai.com/v1/chat/completions"
        );
        assert_eq!(
            OpenAIAdapter::with_base_url("k", "http://localhost:1234/v1/").endpoint(),
            "http://localhost:1234/v1/chat/completions"
        );
    }

    #[tokio::test]
    async fn test_chat_completion() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/chat/completions")
            .match_header("authorization", "Bearer sk-test")
            .match_body(Matcher::PartialJson(json!({
                "model": "gpt-4o-mini",
                "user": "session-123",
                "messages": [
                    {"role": "system", "content": "You are a sommelier."},
                    {"role": "user", "content": "Which wine goes with salmon?"}
                ]
            })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                json!({
                    "choices": [{
                        "index": 0,
                        "message": {"role": "assistant", "content": "Our Pinot Noir Signature 2021."},
                        "finish_reason": "stop"
                    }],
                    "usage": {"prompt_tokens": 20, "completion_tokens": 8, "total_tokens": 28}
                })
                .to_string(),
            )
            .create_async()
            .await;

        let adapter = OpenAIAdapter::with_base_url("sk-test", &server.url());
        let response = adapter.create_chat_completion(&request()).await.unwrap();

        mock.assert_async().await;
        assert_eq!(response.content, "Our Pinot Noir Signature 2021.");
        assert_eq!(response.finish_reason, "stop");
        assert_eq!(response.usage.total_tokens, 28);
    }

    #[tokio::test]
    async fn test_provider_error_is_reported() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/chat/completions")
            .with_status(401)
            .with_header("content-type", "application/json")
            .with_body(r#"{"error":{"message":"Incorrect API key provided","type":"invalid_request_error"}}"#)
            .create_async()
            .await;

        let adapter = OpenAIAdapter::with_base_url("", &server.url());
        let err = adapter.create_chat_completion(&request()).await.unwrap_err();

        match err {
            AppError::LLMApi(message) => {
                assert!(message.contains("401"));
                assert!(message.contains("Incorrect API key provided"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_no_choices_is_error() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/chat/completions")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"choices":[]}"#)
            .create_async()
            .await;

        let adapter = OpenAIAdapter::with_base_url("sk-test", &server.url());
        let result = adapter.create_chat_completion(&request()).await;

        assert!(matches!(result, Err(AppError::LLMApi(_))));
    }
}
