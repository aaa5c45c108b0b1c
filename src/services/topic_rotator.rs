use rand::seq::SliceRandom;
use std::collections::HashSet;

use crate::constants::prompts::TOPIC_CATALOG;

/// Picks quiz topics from a fixed catalog, avoiding repeats within a session
/// until the catalog is exhausted.
pub struct TopicRotator {
    catalog: Vec<String>,
}

impl Default for TopicRotator {
    fn default() -> Self {
        Self {
            catalog: TOPIC_CATALOG.iter().map(|t| t.to_string()).collect(),
        }
    }
}

impl TopicRotator {
    #[cfg(test)]
    pub fn with_catalog(catalog: &[&str]) -> Self {
        assert!(!catalog.is_empty());
        Self {
            catalog: catalog.iter().map(|t| t.to_string()).collect(),
        }
    }

    /// Pick an unused topic uniformly at random, recording it in `history`.
    /// When every topic has been used the history is cleared and the full
    /// catalog becomes available again, so this never fails.
    pub fn pick(&self, history: &mut HashSet<String>) -> String {
        let mut available: Vec<&String> = self
            .catalog
            .iter()
            .filter(|t| !history.contains(*t))
            .collect();

        if available.is_empty() {
            history.clear();
            available = self.catalog.iter().collect();
        }

        let topic = (*available
            .choose(&mut rand::thread_rng())
            .expect("catalog is never empty"))
        .clone();
        history.insert(topic.clone());
        topic
    }
}
