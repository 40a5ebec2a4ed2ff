//! Agents
//!
//! - `router`: keyword routing that picks the augmentation for a question
//! - `concierge`: the wine agent that augments, asks the LLM and replies

pub mod concierge;
pub mod router;

pub use concierge::{AgentReply, WineAgent};
pub use router::{Augmentation, QueryRouter, Route};
