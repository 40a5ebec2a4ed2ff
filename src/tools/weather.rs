//! Weather Lookup
//!
//! Current conditions for Napa Valley from OpenWeatherMap. The lookup never
//! fails: every outcome is a [`WeatherReport`] that renders to a sentence.
//!
//! - No API key configured: fixed demo sentence, no network call
//! - Non-success status: "temporarily unavailable"
//! - Network or parse error: error sentence carrying the error text

use std::fmt;
use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::config::WeatherConfig;

const LOCATION: &str = "Napa,CA,US";

/// Placeholder values people leave in `.env` files.
const PLACEHOLDER_KEYS: &[&str] = &["demo_key", "YOUR_API_KEY_HERE"];

const DEMO_SENTENCE: &str = "Weather service is currently unavailable. Please set up OpenWeatherMap API key for real weather data. Demo: Napa Valley is currently 72°F with partly cloudy skies, perfect for vineyard visits!";

const UNAVAILABLE_SENTENCE: &str =
    "Weather service temporarily unavailable. Please try again later.";

/// Outcome of a weather lookup
#[derive(Debug, Clone, PartialEq)]
pub enum WeatherReport {
    Live {
        temperature_f: f64,
        description: String,
        humidity: f64,
    },
    /// No provider key configured
    Demo,
    /// Provider answered with a non-success status
    Unavailable { status: u16 },
    /// Request or decoding failed
    Failed { error: String },
}

impl WeatherReport {
    pub fn is_live(&self) -> bool {
        matches!(self, WeatherReport::Live { .. })
    }
}

impl fmt::Display for WeatherReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WeatherReport::Live {
                temperature_f,
                description,
                humidity,
            } => write!(
                f,
                "Current weather in Napa Valley: {}°F, {}, humidity {}%. Perfect conditions for wine tasting!",
                temperature_f, description, humidity
            ),
            WeatherReport::Demo => f.write_str(DEMO_SENTENCE),
            WeatherReport::Unavailable { .. } => f.write_str(UNAVAILABLE_SENTENCE),
            WeatherReport::Failed { error } => write!(f, "Weather service error: {}", error),
        }
    }
}

#[derive(Deserialize)]
struct OwmResponse {
    main: OwmMain,
    weather: Vec<OwmCondition>,
}

#[derive(Deserialize)]
struct OwmMain {
    temp: f64,
    humidity: f64,
}

#[derive(Deserialize)]
struct OwmCondition {
    description: String,
}

#[derive(Debug, thiserror::Error)]
enum WeatherError {
    #[error("{0}")]
    Request(#[from] reqwest::Error),

    #[error("response contained no weather conditions")]
    MissingConditions,
}

pub struct WeatherClient {
    client: Client,
    api_key: Option<String>,
    base_url: String,
    timeout: Duration,
}

impl WeatherClient {
    pub fn new(config: &WeatherConfig) -> Self {
        let api_key = config
            .api_key
            .clone()
            .filter(|key| !key.trim().is_empty() && !PLACEHOLDER_KEYS.contains(&key.as_str()));

        Self {
            client: Client::new(),
            api_key,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            timeout: Duration::from_secs(config.timeout_secs),
        }
    }

    /// Client that always answers with the demo sentence
    pub fn demo() -> Self {
        Self {
            client: Client::new(),
            api_key: None,
            base_url: crate::config::DEFAULT_WEATHER_BASE_URL.to_string(),
            timeout: Duration::from_secs(5),
        }
    }

    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    pub async fn current(&self) -> WeatherReport {
        let Some(api_key) = self.api_key.as_deref() else {
            debug!("No weather API key configured, returning demo report");
            return WeatherReport::Demo;
        };

        match self.fetch(api_key).await {
            Ok(report) => report,
            Err(e) => {
                warn!(error = %e, "Weather lookup failed");
                WeatherReport::Failed {
                    error: e.to_string(),
                }
            }
        }
    }

    async fn fetch(&self, api_key: &str) -> Result<WeatherReport, WeatherError> {
        let url = format!("{}/data/2.5/weather", self.base_url);

        let response = self
            .client
            .get(&url)
            .query(&[("q", LOCATION), ("appid", api_key), ("units", "imperial")])
            .timeout(self.timeout)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            warn!(status = %status, "Weather provider returned an error status");
            return Ok(WeatherReport::Unavailable {
                status: status.as_u16(),
            });
        }

        let data: OwmResponse = response.json().await?;
        let condition = data
            .weather
            .into_iter()
            .next()
            .ok_or(WeatherError::MissingConditions)?;

        Ok(WeatherReport::Live {
            temperature_f: data.main.temp,
            description: condition.description,
            humidity: data.main.humidity,
        })
    }
}
