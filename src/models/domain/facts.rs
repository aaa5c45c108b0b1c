use serde::{Deserialize, Serialize};

/// State of the "did you know" feature: the fact on display plus everything
/// shown earlier this session.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct FactJourney {
    pub current_fact: Option<String>,
    pub fact_history: Vec<String>,
}

impl FactJourney {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, fact: impl Into<String>) {
        let fact = fact.into();
        self.current_fact = Some(fact.clone());
        self.fact_history.push(fact);
    }

    /// History with the newest fact first, the order the shell displays it.
    pub fn history_newest_first(&self) -> Vec<&str> {
        self.fact_history.iter().rev().map(String::as_str).collect()
    }
}
