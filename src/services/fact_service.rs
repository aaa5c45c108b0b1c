use rand::seq::SliceRandom;
use std::sync::Arc;

use crate::{
    constants::prompts::{FACT_SYSTEM_PROMPT, FACT_USER_PROMPT, TRIVIA_FACTS},
    errors::AppResult,
    services::model_service::ModelClient,
};

/// "Did you know" facts: fresh ones from the model, canned trivia locally.
pub struct FactService {
    client: Arc<dyn ModelClient>,
}

impl FactService {
    pub fn new(client: Arc<dyn ModelClient>) -> Self {
        Self { client }
    }

    pub async fn fetch_fact(&self) -> AppResult<String> {
        self.client.complete(FACT_SYSTEM_PROMPT, FACT_USER_PROMPT).await
    }

    /// One of the canned trivia entries, uniformly at random. No model call.
    pub fn random_trivia(&self) -> &'static str {
        TRIVIA_FACTS
            .choose(&mut rand::thread_rng())
            .copied()
            .expect("trivia list is never empty")
    }
}
