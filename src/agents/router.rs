//! Query Router
//!
//! Decides which informational block, if any, is appended to a question
//! before it goes to the LLM. Routes are evaluated in order and the first
//! route with a matching keyword wins, so weather beats search when a
//! question mentions both.

/// Extra context a question can be enriched with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Augmentation {
    Weather,
    Search,
}

impl Augmentation {
    /// Label placed in front of the appended block
    pub fn label(self) -> &'static str {
        match self {
            Augmentation::Weather => "Current weather information",
            Augmentation::Search => "Web search information",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Route {
    pub augmentation: Augmentation,
    pub keywords: &'static [&'static str],
}

impl Route {
    /// Case-insensitive substring match against any keyword
    fn matches(&self, lowered_question: &str) -> bool {
        self.keywords.iter().any(|kw| lowered_question.contains(kw))
    }
}

pub const WEATHER_KEYWORDS: &[&str] = &["weather", "temperature", "climate", "forecast"];
pub const SEARCH_KEYWORDS: &[&str] = &["search", "find", "look up", "research"];

#[derive(Debug, Clone)]
pub struct QueryRouter {
    routes: Vec<Route>,
}

impl Default for QueryRouter {
    fn default() -> Self {
        Self::new(vec![
            Route {
                augmentation: Augmentation::Weather,
                keywords: WEATHER_KEYWORDS,
            },
            Route {
                augmentation: Augmentation::Search,
                keywords: SEARCH_KEYWORDS,
            },
        ])
    }
}

impl QueryRouter {
    pub fn new(routes: Vec<Route>) -> Self {
        Self { routes }
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    pub fn classify(&self, question: &str) -> Option<Augmentation> {
        let lowered = question.to_lowercase();
        self.routes
            .iter()
            .find(|route| route.matches(&lowered))
            .map(|route| route.augmentation)
    }
}

/// Append a labeled block after the question
pub fn augment(question: &str, augmentation: Augmentation, info: &str) -> String {
    format!("{}\n\n{}: {}", question, augmentation.label(), info)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weather_keywords() {
        let router = QueryRouter::default();
        for q in [
            "What's the weather like today?",
            "What is the TEMPERATURE in Napa?",
            "How does the climate affect your grapes?",
            "Any forecast for the harvest festival?",
        ] {
            assert_eq!(router.classify(q), Some(Augmentation::Weather), "{q}");
        }
    }

    #[test]
    fn test_search_keywords() {
        let router = QueryRouter::default();
        for q in [
            "Search for wine pairing ideas",
            "Can you find reviews of your Chardonnay?",
            "Please look up Napa hotels",
            "Research organic farming",
        ] {
            assert_eq!(router.classify(q), Some(Augmentation::Search), "{q}");
        }
    }

    #[test]
    fn test_weather_wins_tie_break() {
        let router = QueryRouter::default();
        assert_eq!(
            router.classify("Search the weather forecast for Saturday"),
            Some(Augmentation::Weather)
        );
    }

    #[test]
    fn test_plain_question() {
        let router = QueryRouter::default();
        assert_eq!(router.classify("What wines do you offer?"), None);
        assert_eq!(router.classify("Tell me about your tours"), None);
    }

    #[test]
    fn test_substring_match() {
        // Keywords match inside longer words
        let router = QueryRouter::default();
        assert_eq!(router.classify("Any findings on tannins?"), Some(Augmentation::Search));
    }

    #[test]
    fn test_route_order_is_configurable() {
        let router = QueryRouter::new(vec![
            Route {
                augmentation: Augmentation::Search,
                keywords: SEARCH_KEYWORDS,
            },
            Route {
                augmentation: Augmentation::Weather,
                keywords: WEATHER_KEYWORDS,
            },
        ]);
        assert_eq!(
            router.classify("search the weather"),
            Some(Augmentation::Search)
        );
    }

    #[test]
    fn test_augment_format() {
        assert_eq!(
            augment("Is it sunny?", Augmentation::Weather, "72°F"),
            "Is it sunny?\n\nCurrent weather information: 72°F"
        );
        assert_eq!(
            augment("find tours", Augmentation::Search, "results"),
            "find tours\n\nWeb search information: results"
        );
    }
}
