use serde::{Deserialize, Serialize};
use std::str::FromStr;
use uuid::Uuid;

use crate::errors::AppError;

/// Quiz difficulty, chosen once per session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Difficulty::Easy => write!(f, "Easy"),
            Difficulty::Medium => write!(f, "Medium"),
            Difficulty::Hard => write!(f, "Hard"),
        }
    }
}

impl FromStr for Difficulty {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            other => Err(AppError::BadRequest(format!(
                "Unknown difficulty '{}', expected Easy, Medium or Hard",
                other
            ))),
        }
    }
}

/// A validated multiple-choice question. Only the validator constructs these,
/// so anything holding a `QuizQuestion` can rely on it having exactly four
/// options and a correct answer that is one of them.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct QuizQuestion {
    pub id: Uuid,
    pub text: String,
    pub options: Vec<String>,
    pub correct_answer: String,
    pub explanation: String,
    pub resource_url: String,
}

impl QuizQuestion {
    pub const OPTION_COUNT: usize = 4;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn difficulty_parses_case_insensitively() {
        assert_eq!("easy".parse::<Difficulty>().unwrap(), Difficulty::Easy);
        assert_eq!("MEDIUM".parse::<Difficulty>().unwrap(), Difficulty::Medium);
        assert_eq!(" Hard ".parse::<Difficulty>().unwrap(), Difficulty::Hard);
    }

    #[test]
    fn difficulty_rejects_unknown_values() {
        assert!("impossible".parse::<Difficulty>().is_err());
    }

    #[test]
    fn difficulty_display_round_trips() {
        for d in [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard] {
            assert_eq!(d.to_string().parse::<Difficulty>().unwrap(), d);
        }
    }
}
