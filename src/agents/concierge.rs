//! Wine Agent
//!
//! Answers customer questions: routes the question, enriches it with
//! weather or search information, and asks the LLM within a per-question
//! chat session. Provider failures become an apology instead of an error.

use std::fmt;

use tracing::{error, info};
use uuid::Uuid;

use crate::agents::router::{augment, Augmentation, QueryRouter};
use crate::knowledge;
use crate::llm::LLM;
use crate::tools::{SearchTool, WeatherClient, WeatherReport};

/// What the agent produced for a question
#[derive(Debug, Clone, PartialEq)]
pub enum AgentReply {
    Answer(String),
    /// The LLM call failed; carries the error text
    Apology { error: String },
}

impl AgentReply {
    pub fn is_answer(&self) -> bool {
        matches!(self, AgentReply::Answer(_))
    }

    pub fn into_text(self) -> String {
        match self {
            AgentReply::Answer(text) => text,
            apology => apology.to_string(),
        }
    }
}

impl fmt::Display for AgentReply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AgentReply::Answer(text) => f.write_str(text),
            AgentReply::Apology { error } => write!(
                f,
                "I'm sorry, I encountered an error processing your question. Please try again. Error: {}",
                error
            ),
        }
    }
}

pub struct WineAgent {
    llm: LLM,
    weather: WeatherClient,
    search: SearchTool,
    router: QueryRouter,
    system_prompt: String,
}

impl WineAgent {
    pub fn new(llm: LLM, weather: WeatherClient, search: SearchTool) -> Self {
        Self {
            llm,
            weather,
            search,
            router: QueryRouter::default(),
            system_prompt: knowledge::system_prompt(),
        }
    }

    pub fn with_router(mut self, router: QueryRouter) -> Self {
        self.router = router;
        self
    }

    pub async fn weather(&self) -> WeatherReport {
        self.weather.current().await
    }

    pub fn search(&self, query: &str) -> String {
        self.search.search(query)
    }

    /// Text that will be sent to the LLM for `question`
    pub async fn build_prompt(&self, question: &str) -> String {
        match self.router.classify(question) {
            Some(Augmentation::Weather) => {
                let report = self.weather.current().await;
                augment(question, Augmentation::Weather, &report.to_string())
            }
            Some(Augmentation::Search) => {
                let results = self.search.search(question);
                augment(question, Augmentation::Search, &results)
            }
            None => question.to_string(),
        }
    }

    pub async fn process_query(&self, question: &str, session_id: Uuid) -> AgentReply {
        let prompt = self.build_prompt(question).await;
        let session = self.llm.session(session_id.to_string(), self.system_prompt.as_str());

        match session.send(&prompt).await {
            Ok(response) => {
                info!(
                    session_id = %session_id,
                    response_len = response.content.len(),
                    total_tokens = response.usage.total_tokens,
                    "Generated reply"
                );
                AgentReply::Answer(response.content)
            }
            Err(e) => {
                error!(session_id = %session_id, error = %e, "Error in conversational agent");
                AgentReply::Apology {
                    error: e.to_string(),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::LLMAdapter;
    use crate::types::{AppError, AppResult, LLMRequest, LLMResponse, TokenUsage};
    use async_trait::async_trait;

    struct Failing;

    #[async_trait]
    impl LLMAdapter for Failing {
        async fn create_chat_completion(&self, _request: &LLMRequest) -> AppResult<LLMResponse> {
            Err(AppError::LLMApi("quota exceeded".to_string()))
        }
    }

    struct Echo;

    #[async_trait]
    impl LLMAdapter for Echo {
        async fn create_chat_completion(&self, request: &LLMRequest) -> AppResult<LLMResponse> {
            let last = request.messages.last().map(|m| m.content.clone()).unwrap_or_default();
            Ok(LLMResponse {
                content: last,
                finish_reason: "stop".to_string(),
                usage: TokenUsage::default(),
            })
        }
    }

    fn agent(adapter: Box<dyn LLMAdapter>) -> WineAgent {
        WineAgent::new(
            LLM::with_adapter(adapter, "test", "test-model"),
            WeatherClient::demo(),
            SearchTool::new(),
        )
    }

    #[tokio::test]
    async fn test_plain_prompt_unchanged() {
        let agent = agent(Box::new(Echo));
        assert_eq!(agent.build_prompt("What wines do you offer?").await, "What wines do you offer?");
    }

    #[tokio::test]
    async fn test_weather_prompt() {
        let agent = agent(Box::new(Echo));
        let prompt = agent.build_prompt("What's the weather like today?").await;
        let expected = format!(
            "What's the weather like today?\n\nCurrent weather information: {}",
            WeatherReport::Demo
        );
        assert_eq!(prompt, expected);
    }

    #[tokio::test]
    async fn test_search_prompt_uses_question() {
        let agent = agent(Box::new(Echo));
        let prompt = agent.build_prompt("find tours").await;
        assert_eq!(
            prompt,
            format!("find tours\n\nWeb search information: {}", SearchTool::new().search("find tours"))
        );
    }

    #[tokio::test]
    async fn test_answer_passes_through() {
        let agent = agent(Box::new(Echo));
        let reply = agent.process_query("Hello", Uuid::new_v4()).await;
        assert_eq!(reply, AgentReply::Answer("Hello".to_string()));
        assert!(reply.is_answer());
    }

    #[tokio::test]
    async fn test_failure_becomes_apology() {
        let agent = agent(Box::new(Failing));
        let reply = agent.process_query("Hello", Uuid::new_v4()).await;

        assert!(!reply.is_answer());
        let text = reply.into_text();
        assert!(text.starts_with("I'm sorry, I encountered an error processing your question."));
        assert!(text.contains("quota exceeded"));
    }
}
