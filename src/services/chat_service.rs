use std::sync::Arc;

use crate::{
    constants::prompts::CHAT_SYSTEM_PROMPT, errors::AppResult,
    services::model_service::ModelClient,
};

/// One chat turn against the space-assistant persona. The transcript is kept
/// by the session; each turn sends only the latest message to the model.
pub struct ChatService {
    client: Arc<dyn ModelClient>,
}

impl ChatService {
    pub fn new(client: Arc<dyn ModelClient>) -> Self {
        Self { client }
    }

    pub async fn chat(&self, message: &str) -> AppResult<String> {
        self.client.complete(CHAT_SYSTEM_PROMPT, message).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::model_service::MockModelClient;

    #[actix_rt::test]
    async fn forwards_the_message_with_the_chat_persona() {
        let mut client = MockModelClient::new();
        client
            .expect_complete()
            .withf(|system, user| {
                system == CHAT_SYSTEM_PROMPT && user == "How far is the Moon?"
            })
            .times(1)
            .returning(|_, _| Ok("About 384,400 km away.".to_string()));

        let service = ChatService::new(Arc::new(client));
        let reply = service.chat("How far is the Moon?").await.unwrap();

        assert_eq!(reply, "About 384,400 km away.");
    }

    #[actix_rt::test]
    async fn transport_errors_propagate() {
        let mut client = MockModelClient::new();
        client.expect_complete().times(1).returning(|_, _| {
            Err(crate::errors::AppError::Transport("rate limited".to_string()))
        });

        let service = ChatService::new(Arc::new(client));
        assert!(service.chat("hello").await.is_err());
    }
}
