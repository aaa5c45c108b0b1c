#[cfg(test)]
pub mod fixtures {
    use serde_json::Value;
    use uuid::Uuid;

    use crate::models::domain::QuizQuestion;

    /// The canonical well-formed record, exactly as a cooperative model
    /// would return it.
    pub const VALID_RECORD_JSON: &str = r#"{"question":"Which planet is known as the Red Planet?","options":["Earth","Mars","Venus","Jupiter"],"correct_answer":"Mars","explanation":"Mars appears red due to iron oxide.","resource":"https://en.wikipedia.org/wiki/Mars"}"#;

    pub fn valid_record_value() -> Value {
        serde_json::from_str(VALID_RECORD_JSON).expect("fixture is valid JSON")
    }

    /// A validated question matching [`VALID_RECORD_JSON`].
    pub fn sample_question() -> QuizQuestion {
        QuizQuestion {
            id: Uuid::new_v4(),
            text: "Which planet is known as the Red Planet?".to_string(),
            options: vec![
                "Earth".to_string(),
                "Mars".to_string(),
                "Venus".to_string(),
                "Jupiter".to_string(),
            ],
            correct_answer: "Mars".to_string(),
            explanation: "Mars appears red due to iron oxide.".to_string(),
            resource_url: "https://en.wikipedia.org/wiki/Mars".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;

    #[test]
    fn fixture_record_parses_as_json() {
        let value = valid_record_value();
        assert_eq!(value["correct_answer"], "Mars");
        assert_eq!(value["options"].as_array().unwrap().len(), 4);
    }

    #[test]
    fn fixture_question_matches_the_record() {
        let question = sample_question();
        assert!(question.options.contains(&question.correct_answer));
    }
}
