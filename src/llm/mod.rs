// LLM abstraction layer

pub mod provider;
pub mod openai;
pub mod session;

pub use provider::*;
pub use session::ChatSession;
pub use crate::types::{LLMMessage, LLMRequest, LLMResponse, TokenUsage};
