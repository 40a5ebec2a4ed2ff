use async_trait::async_trait;
use crate::config::LLMConfig;
use crate::llm::session::ChatSession;
use crate::types::{AppError, AppResult, LLMProvider, LLMRequest, LLMResponse};

#[async_trait]
pub trait LLMAdapter: Send + Sync {
    async fn create_chat_completion(&self, request: &LLMRequest) -> AppResult<LLMResponse>;
}

pub struct LLM {
    adapter: Box<dyn LLMAdapter>,
    provider_name: String,
    model: String,
    max_tokens: Option<u32>,
    temperature: Option<f32>,
}

impl LLM {
    pub fn new(config: &LLMConfig) -> AppResult<Self> {
        let provider = LLMProvider::from_name(&config.provider).ok_or_else(|| {
            AppError::Config(format!("Unsupported LLM provider: {}", config.provider))
        })?;

        let adapter: Box<dyn LLMAdapter> = match provider {
            LLMProvider::OpenAI | LLMProvider::OpenRouter => {
                let base_url = config
                    .base_url
                    .clone()
                    .unwrap_or_else(|| crate::llm::openai::default_base_url(provider).to_string());
                Box::new(crate::llm::openai::OpenAIAdapter::with_base_url(&config.api_key, &base_url))
            }
        };

        let mut llm = Self::with_adapter(adapter, provider.to_string(), &config.model);
        llm.max_tokens = config.max_tokens;
        llm.temperature = config.temperature;
        Ok(llm)
    }

    /// Wrap an existing adapter, e.g. a test double
    pub fn with_adapter(
        adapter: Box<dyn LLMAdapter>,
        provider_name: impl Into<String>,
        model: impl Into<String>,
    ) -> Self {
        Self {
            adapter,
            provider_name: provider_name.into(),
            model: model.into(),
            max_tokens: None,
            temperature: None,
        }
    }

    pub fn provider_name(&self) -> &str {
        &self.provider_name
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Open a chat session tagged with `session_id`
    pub fn session(&self, session_id: impl Into<String>, system_message: impl Into<String>) -> ChatSession<'_> {
        ChatSession::new(self, session_id.into(), system_message.into())
    }

    pub(crate) fn request_defaults(&self) -> (Option<u32>, Option<f32>) {
        (self.max_tokens, self.temperature)
    }

    pub async fn create_chat_completion(&self, request: &LLMRequest) -> AppResult<LLMResponse> {
        self.adapter.create_chat_completion(request).await
    }
}
