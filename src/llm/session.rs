use crate::llm::provider::LLM;
use crate::types::{AppError, AppResult, LLMMessage, LLMRequest, LLMResponse};
use tracing::debug;

/// A chat bound to one session id and one system prompt.
pub struct ChatSession<'a> {
    llm: &'a LLM,
    session_id: String,
    system_message: String,
}

impl<'a> ChatSession<'a> {
    pub(crate) fn new(llm: &'a LLM, session_id: String, system_message: String) -> Self {
        Self {
            llm,
            session_id,
            system_message,
        }
    }

    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    /// Send a single user turn and wait for the reply.
    ///
    /// An empty reply is reported as an error so callers never hand an
    /// empty answer back to the user.
    pub async fn send(&self, text: &str) -> AppResult<LLMResponse> {
        let (max_tokens, temperature) = self.llm.request_defaults();
        let request = LLMRequest {
            model: self.llm.model().to_string(),
            messages: vec![
                LLMMessage::system(&self.system_message),
                LLMMessage::user(text),
            ],
            max_tokens,
            temperature,
            session_id: Some(self.session_id.clone()),
        };

        debug!(
            session_id = %self.session_id,
            provider = self.llm.provider_name(),
            prompt_len = text.len(),
            "Sending chat message"
        );

        let response = self.llm.create_chat_completion(&request).await?;
        if response.content.trim().is_empty() {
            return Err(AppError::LLMApi("provider returned an empty reply".to_string()));
        }

        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::provider::LLMAdapter;
    use crate::types::TokenUsage;
    use async_trait::async_trait;
    use std::sync::{Arc, Mutex};

    struct Canned {
        reply: String,
        seen: Arc<Mutex<Vec<LLMRequest>>>,
    }

    #[async_trait]
    impl LLMAdapter for Canned {
        async fn create_chat_completion(&self, request: &LLMRequest) -> AppResult<LLMResponse> {
            self.seen.lock().unwrap().push(request.clone());
            Ok(LLMResponse {
                content: self.reply.clone(),
                finish_reason: "stop".to_string(),
                usage: TokenUsage::default(),
            })
        }
    }

    fn llm(reply: &str) -> (LLM, Arc<Mutex<Vec<LLMRequest>>>) {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let adapter = Canned {
            reply: reply.to_string(),
            seen: seen.clone(),
        };
        (LLM::with_adapter(Box::new(adapter), "test", "test-model"), seen)
    }

    #[tokio::test]
    async fn test_send_builds_single_turn_request() {
        let (llm, seen) = llm("Hello from Napa");
        let session = llm.session("abc", "be nice");

        let response = session.send("hi").await.unwrap();
        assert_eq!(response.content, "Hello from Napa");

        let requests = seen.lock().unwrap();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].model, "test-model");
        assert_eq!(requests[0].session_id.as_deref(), Some("abc"));
        assert_eq!(
            requests[0].messages,
            vec![LLMMessage::system("be nice"), LLMMessage::user("hi")]
        );
    }

    #[tokio::test]
    async fn test_empty_reply_is_error() {
        let (llm, _) = llm("   ");
        let result = llm.session("abc", "sys").send("hi").await;
        assert!(matches!(result, Err(AppError::LLMApi(_))));
    }
}
