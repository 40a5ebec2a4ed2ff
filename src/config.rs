use anyhow::{Context, Result};
use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub llm: LLMConfig,
    pub weather: WeatherConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub host: String,
    pub cors_allowed_origins: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    /// Overrides the database named in `url` when set.
    pub name: Option<String>,
    pub max_connections: u32,
    pub min_connections: u32,
}

#[derive(Debug, Clone)]
pub struct LLMConfig {
    pub api_key: String,
    pub provider: String,
    pub model: String,
    pub base_url: Option<String>,
    pub max_tokens: Option<u32>,
    pub temperature: Option<f32>,
}

#[derive(Debug, Clone)]
pub struct WeatherConfig {
    pub api_key: Option<String>,
    pub base_url: String,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub filter: String,
    pub directory: Option<String>,
}

pub const DEFAULT_LOG_FILTER: &str = "napa_concierge=debug,tower_http=debug,axum=debug";
pub const DEFAULT_WEATHER_BASE_URL: &str = "http://api.openweathermap.org";

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the configuration from any key/value source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        // Empty values count as unset
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Ok(Self {
            server: ServerConfig {
                port: var("PORT")
                    .unwrap_or_else(|| "8001".to_string())
                    .parse::<u16>()
                    .context("PORT must be a valid port number")?,
                host: var("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
                cors_allowed_origins: var("CORS_ORIGINS")
                    .unwrap_or_else(|| "*".to_string())
                    .split(',')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect(),
            },
            database: DatabaseConfig {
                url: var("DATABASE_URL").context("DATABASE_URL must be set")?,
                name: var("DB_NAME"),
                max_connections: var("DB_MAX_CONNECTIONS")
                    .unwrap_or_else(|| "10".to_string())
                    .parse::<u32>()
                    .context("DB_MAX_CONNECTIONS must be a number")?,
                min_connections: var("DB_MIN_CONNECTIONS")
                    .unwrap_or_else(|| "1".to_string())
                    .parse::<u32>()
                    .context("DB_MIN_CONNECTIONS must be a number")?,
            },
            llm: LLMConfig {
                api_key: var("LLM_API_KEY")
                    .or_else(|| var("EMERGENT_LLM_KEY"))
                    .or_else(|| var("OPENAI_API_KEY"))
                    .unwrap_or_default(),
                provider: var("LLM_PROVIDER").unwrap_or_else(|| "openai".to_string()),
                model: var("LLM_MODEL").unwrap_or_else(|| "gpt-4o-mini".to_string()),
                base_url: var("LLM_BASE_URL"),
                max_tokens: var("LLM_MAX_TOKENS")
                    .map(|v| v.parse::<u32>())
                    .transpose()
                    .context("LLM_MAX_TOKENS must be a number")?,
                temperature: var("LLM_TEMPERATURE")
                    .map(|v| v.parse::<f32>())
                    .transpose()
                    .context("LLM_TEMPERATURE must be a number")?,
            },
            weather: WeatherConfig {
                api_key: var("OPENWEATHER_API_KEY"),
                base_url: var("WEATHER_BASE_URL")
                    .unwrap_or_else(|| DEFAULT_WEATHER_BASE_URL.to_string()),
                timeout_secs: var("WEATHER_TIMEOUT_SECS")
                    .unwrap_or_else(|| "5".to_string())
                    .parse::<u64>()
                    .context("WEATHER_TIMEOUT_SECS must be a number")?,
            },
            logging: LoggingConfig {
                filter: var("RUST_LOG").unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),
                directory: var("LOG_DIR"),
            },
        })
    }
}
