//! Tools the agent can consult before asking the LLM.

pub mod search;
pub mod weather;

pub use search::SearchTool;
pub use weather::{WeatherClient, WeatherReport};
