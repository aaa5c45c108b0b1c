use async_openai::{
    config::OpenAIConfig,
    types::{
        ChatCompletionRequestSystemMessageArgs, ChatCompletionRequestUserMessageArgs,
        CreateChatCompletionRequestArgs,
    },
    Client,
};
use async_trait::async_trait;
use secrecy::ExposeSecret;

use crate::{
    config::Config,
    errors::{AppError, AppResult},
};

/// The one operation this server needs from the hosted model: a synchronous
/// completion of a system + user prompt pair. Everything upstream of the
/// pipeline is mocked through this seam.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ModelClient: Send + Sync {
    async fn complete(&self, system_prompt: &str, user_prompt: &str) -> AppResult<String>;
}

/// Production client against Groq's OpenAI-compatible chat completions API.
pub struct GroqModelClient {
    client: Client<OpenAIConfig>,
    model_name: String,
}

impl GroqModelClient {
    pub fn new(config: &Config) -> Self {
        let api_config = OpenAIConfig::new()
            .with_api_base(&config.model_api_base)
            .with_api_key(config.groq_api_key.expose_secret());

        Self {
            client: Client::with_config(api_config),
            model_name: config.model_name.clone(),
        }
    }
}

#[async_trait]
impl ModelClient for GroqModelClient {
    async fn complete(&self, system_prompt: &str, user_prompt: &str) -> AppResult<String> {
        let request = CreateChatCompletionRequestArgs::default()
            .model(self.model_name.as_str())
            .messages([
                ChatCompletionRequestSystemMessageArgs::default()
                    .content(system_prompt)
                    .build()?
                    .into(),
                ChatCompletionRequestUserMessageArgs::default()
                    .content(user_prompt)
                    .build()?
                    .into(),
            ])
            .build()?;

        let response = self.client.chat().create(request).await?;

        response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| AppError::Transport("Model returned no completion".to_string()))
    }
}
