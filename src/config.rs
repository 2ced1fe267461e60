use std::env;
use std::sync::OnceLock;
use thiserror::Error;

/// Errors encountered while loading configuration from environment variables.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Required environment variable was not provided.
    #[error("Missing environment variable: {0}")]
    MissingVariable(String),
    /// Environment variable contained a value that could not be parsed.
    #[error("Invalid value for environment variable: {0}")]
    InvalidValue(String),
}

/// Runtime configuration for the Legalens server.
#[derive(Debug)]
pub struct Config {
    /// API key for the Gemini generation service.
    pub gemini_api_key: String,
    /// Model identifier passed to the generation service.
    pub gemini_model: String,
    /// Optional override for the generation service base URL.
    pub gemini_base_url: Option<String>,
    /// Optional override for the per-chunk word budget.
    pub chunk_max_words: Option<usize>,
    /// Optional per-call timeout for generation requests, in seconds.
    pub generation_timeout_secs: Option<u64>,
    /// Recognized-language hint passed to the OCR engine.
    pub ocr_languages: String,
    /// Optional override for the HTTP server port.
    pub server_port: Option<u16>,
}

const DEFAULT_GEMINI_MODEL: &str = "gemini-1.5-flash";
const DEFAULT_OCR_LANGUAGES: &str = "tam+eng";

impl Config {
    /// Load configuration from environment variables, performing validation
    /// along the way.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            gemini_api_key: load_env("GEMINI_API_KEY")?,
            gemini_model: load_env_optional("GEMINI_MODEL")
                .unwrap_or_else(|| DEFAULT_GEMINI_MODEL.to_string()),
            gemini_base_url: load_env_optional("GEMINI_BASE_URL"),
            chunk_max_words: load_env_optional("CHUNK_MAX_WORDS")
                .map(|value| {
                    value
                        .parse::<usize>()
                        .ok()
                        .filter(|parsed| *parsed > 0)
                        .ok_or_else(|| ConfigError::InvalidValue("CHUNK_MAX_WORDS".to_string()))
                })
                .transpose()?,
            generation_timeout_secs: load_env_optional("GENERATION_TIMEOUT_SECS")
                .map(|value| {
                    value
                        .parse()
                        .map_err(|_| ConfigError::InvalidValue("GENERATION_TIMEOUT_SECS".into()))
                })
                .transpose()?,
            ocr_languages: load_env_optional("OCR_LANGUAGES")
                .unwrap_or_else(|| DEFAULT_OCR_LANGUAGES.to_string()),
            server_port: load_env_optional("SERVER_PORT")
                .map(|value| {
                    value
                        .parse()
                        .map_err(|_| ConfigError::InvalidValue("SERVER_PORT".into()))
                })
                .transpose()?,
        })
    }
}

fn load_env(key: &str) -> Result<String, ConfigError> {
    env::var(key).map_err(|_| ConfigError::MissingVariable(key.to_string()))
}

fn load_env_optional(key: &str) -> Option<String> {
    env::var(key).ok().filter(|value| !value.trim().is_empty())
}

/// Global configuration cache populated during process start.
pub static CONFIG: OnceLock<Config> = OnceLock::new();

/// Retrieve the loaded configuration, panicking if initialization has not
/// occurred.
pub fn get_config() -> &'static Config {
    CONFIG.get().expect("Config not initialized")
}

/// Load configuration from the environment and install it in the global cache.
pub fn init_config() {
    dotenvy::dotenv().ok();
    let config = Config::from_env().expect("Failed to load config from environment");
    tracing::debug!(
        model = %config.gemini_model,
        chunk_max_words = ?config.chunk_max_words,
        server_port = ?config.server_port,
        "Loaded configuration"
    );
    CONFIG.set(config).expect("Failed to set config");
}
