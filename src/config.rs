use secrecy::SecretString;
use std::env;

use crate::errors::{AppError, AppResult};

#[derive(Clone, Debug)]
pub struct Config {
    pub groq_api_key: SecretString,
    pub model_api_base: String,
    pub model_name: String,
    pub web_server_host: String,
    pub web_server_port: u16,
    pub max_generation_attempts: u32,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            groq_api_key: SecretString::from(env::var("GROQ_API_KEY").unwrap_or_default()),
            model_api_base: env::var("MODEL_API_BASE")
                .unwrap_or_else(|_| "https://api.groq.com/openai/v1".to_string()),
            model_name: env::var("MODEL_NAME")
                .unwrap_or_else(|_| "llama-3.1-70b-versatile".to_string()),
            web_server_host: env::var("WEB_SERVER_HOST")
                .unwrap_or_else(|_| "127.0.0.1".to_string()),
            web_server_port: env::var("WEB_SERVER_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            max_generation_attempts: env::var("MAX_GENERATION_ATTEMPTS")
                .ok()
                .and_then(|n| n.parse().ok())
                .unwrap_or(3),
        }
    }

    /// A missing API credential is fatal at startup; nothing downstream can
    /// work without it.
    pub fn validate(&self) -> AppResult<()> {
        use secrecy::ExposeSecret;

        if self.groq_api_key.expose_secret().is_empty() {
            return Err(AppError::BadRequest(
                "GROQ_API_KEY is not set. Export it or add it to .env".to_string(),
            ));
        }

        if self.max_generation_attempts == 0 {
            return Err(AppError::BadRequest(
                "MAX_GENERATION_ATTEMPTS must be at least 1".to_string(),
            ));
        }

        Ok(())
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            groq_api_key: SecretString::from("test_api_key".to_string()),
            model_api_base: "https://api.groq.com/openai/v1".to_string(),
            model_name: "llama-3.1-70b-versatile".to_string(),
            web_server_host: "127.0.0.1".to_string(),
            web_server_port: 8080,
            max_generation_attempts: 3,
        }
    }
}
