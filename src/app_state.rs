use std::sync::Arc;
use tokio::sync::RwLock;

use crate::{
    config::Config,
    models::domain::{ChatMessage, FactJourney, Leaderboard, QuizSession},
    services::{
        chat_service::ChatService,
        fact_service::FactService,
        model_service::{GroqModelClient, ModelClient},
        question_service::QuestionService,
    },
};

/// Everything one browser session accumulates. There is exactly one of
/// these per process run; "start new quiz" replaces the quiz field, the
/// rest lives until the process exits.
#[derive(Debug, Default)]
pub struct Session {
    pub quiz: Option<QuizSession>,
    pub chat: Vec<ChatMessage>,
    pub facts: FactJourney,
    pub leaderboard: Leaderboard,
}

#[derive(Clone)]
pub struct AppState {
    pub question_service: Arc<QuestionService>,
    pub chat_service: Arc<ChatService>,
    pub fact_service: Arc<FactService>,
    pub session: Arc<RwLock<Session>>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let client: Arc<dyn ModelClient> = Arc::new(GroqModelClient::new(&config));
        Self::with_client(config, client)
    }

    /// Wire the state around an arbitrary model client. Tests inject a
    /// scripted client here.
    pub fn with_client(config: Config, client: Arc<dyn ModelClient>) -> Self {
        Self {
            question_service: Arc::new(QuestionService::new(
                client.clone(),
                config.max_generation_attempts,
            )),
            chat_service: Arc::new(ChatService::new(client.clone())),
            fact_service: Arc::new(FactService::new(client)),
            session: Arc::new(RwLock::new(Session::default())),
            config: Arc::new(config),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_is_cloneable() {
        fn assert_clone<T: Clone>() {}
        assert_clone::<AppState>();
    }

    #[test]
    fn fresh_session_has_no_quiz() {
        let session = Session::default();
        assert!(session.quiz.is_none());
        assert!(session.chat.is_empty());
        assert!(session.leaderboard.entries().is_empty());
    }
}
