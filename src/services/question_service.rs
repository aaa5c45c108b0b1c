use serde::Deserialize;
use serde_json::Value;
use std::collections::HashSet;
use std::sync::Arc;
use uuid::Uuid;

use crate::{
    constants::prompts::QUIZ_SYSTEM_PROMPT,
    errors::{AppError, AppResult},
    models::domain::{Difficulty, QuizQuestion},
    services::{
        lenient_json::parse_lenient, model_service::ModelClient,
        response_sanitizer::sanitize, topic_rotator::TopicRotator,
    },
};

const REQUIRED_KEYS: [&str; 5] = [
    "question",
    "options",
    "correct_answer",
    "explanation",
    "resource",
];

/// Build the generation prompt for one question. Pure text construction.
pub fn build_question_prompt(difficulty: Difficulty, topic: &str) -> String {
    format!(
        r#"Generate a {difficulty}-level multiple-choice question about {topic} in space science.
The question should have 4 options.
Format the response as a JSON object with the following structure:
{{
    "question": "The question text",
    "options": ["Option A", "Option B", "Option C", "Option D"],
    "correct_answer": "The correct option",
    "explanation": "A brief explanation of the correct answer",
    "resource": "A relevant URL for further reading (preferably Wikipedia or a reputable space science website)"
}}
Ensure the question is suitable for a general audience interested in space.
Provide ONLY the JSON object in your response, with no additional text."#
    )
}

/// Wire shape of a decoded question record.
#[derive(Debug, Deserialize)]
struct QuestionRecord {
    question: String,
    options: Vec<String>,
    correct_answer: String,
    explanation: String,
    resource: String,
}

/// Check a decoded record and promote it to a [`QuizQuestion`].
///
/// Beyond the presence of the five keys and the option count, the correct
/// answer must be one of the options: grading compares by string equality,
/// so a non-member correct answer would make the question unanswerable.
pub fn validate_record(record: &Value) -> AppResult<QuizQuestion> {
    let object = record
        .as_object()
        .ok_or_else(|| AppError::Validation("record is not an object".to_string()))?;

    for key in REQUIRED_KEYS {
        if !object.contains_key(key) {
            return Err(AppError::Validation(format!(
                "missing required key '{}'",
                key
            )));
        }
    }

    let record: QuestionRecord = serde_json::from_value(record.clone())
        .map_err(|err| AppError::Validation(format!("malformed record: {}", err)))?;

    if record.question.trim().is_empty() {
        return Err(AppError::Validation("question text is empty".to_string()));
    }

    if record.options.len() != QuizQuestion::OPTION_COUNT {
        return Err(AppError::Validation(format!(
            "expected {} options, got {}",
            QuizQuestion::OPTION_COUNT,
            record.options.len()
        )));
    }

    if !record.options.contains(&record.correct_answer) {
        return Err(AppError::Validation(
            "correct_answer is not one of the options".to_string(),
        ));
    }

    Ok(QuizQuestion {
        id: Uuid::new_v4(),
        text: record.question,
        options: record.options,
        correct_answer: record.correct_answer,
        explanation: record.explanation,
        resource_url: record.resource,
    })
}

/// Runs the acquisition pipeline: topic rotation, prompt construction, one
/// model call per attempt, sanitize, parse, validate, up to `max_attempts`
/// times. Attempt failures are logged and absorbed; only exhaustion crosses
/// this boundary.
pub struct QuestionService {
    client: Arc<dyn ModelClient>,
    rotator: TopicRotator,
    max_attempts: u32,
}

impl QuestionService {
    pub fn new(client: Arc<dyn ModelClient>, max_attempts: u32) -> Self {
        Self {
            client,
            rotator: TopicRotator::default(),
            max_attempts,
        }
    }

    pub async fn generate_question(
        &self,
        difficulty: Difficulty,
        topics_used: &mut HashSet<String>,
    ) -> AppResult<QuizQuestion> {
        for attempt in 1..=self.max_attempts {
            let topic = self.rotator.pick(topics_used);
            let prompt = build_question_prompt(difficulty, &topic);

            match self.attempt(&prompt).await {
                Ok(question) => {
                    log::info!(
                        "Generated a {} question about {} on attempt {}",
                        difficulty,
                        topic,
                        attempt
                    );
                    return Ok(question);
                }
                Err(err) => {
                    log::warn!(
                        "Question generation attempt {}/{} failed: {}",
                        attempt,
                        self.max_attempts,
                        err
                    );
                    if let AppError::Parse { raw, .. } = &err {
                        log::debug!("Unparseable model response: {}", raw);
                    }
                }
            }
        }

        Err(AppError::ExhaustedRetries {
            attempts: self.max_attempts,
        })
    }

    async fn attempt(&self, prompt: &str) -> AppResult<QuizQuestion> {
        let raw = self.client.complete(QUIZ_SYSTEM_PROMPT, prompt).await?;
        let cleaned = sanitize(&raw);
        let record = parse_lenient(&cleaned)?;
        validate_record(&record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::model_service::MockModelClient;
    use crate::test_utils::fixtures::{valid_record_value, VALID_RECORD_JSON};
    use serde_json::json;

    #[test]
    fn prompt_mentions_difficulty_topic_and_contract() {
        let prompt = build_question_prompt(Difficulty::Hard, "black holes");

        assert!(prompt.contains("Hard-level"));
        assert!(prompt.contains("black holes"));
        assert!(prompt.contains("4 options"));
        assert!(prompt.contains("ONLY the JSON object"));
        for key in REQUIRED_KEYS {
            assert!(prompt.contains(key), "prompt missing key {}", key);
        }
    }

    #[test]
    fn valid_record_becomes_a_question() {
        let question = validate_record(&valid_record_value()).unwrap();

        assert_eq!(question.correct_answer, "Mars");
        assert_eq!(question.options.len(), 4);
        assert_eq!(question.text, "Which planet is known as the Red Planet?");
        assert_eq!(
            question.resource_url,
            "https://en.wikipedia.org/wiki/Mars"
        );
    }

    #[test]
    fn each_missing_key_is_rejected() {
        for key in REQUIRED_KEYS {
            let mut record = valid_record_value();
            record.as_object_mut().unwrap().remove(key);

            let err = validate_record(&record).unwrap_err();
            assert!(
                matches!(err, AppError::Validation(_)),
                "missing '{}' not rejected",
                key
            );
        }
    }

    #[test]
    fn wrong_option_count_is_rejected() {
        for options in [json!(["a", "b", "c"]), json!(["a", "b", "c", "d", "e"])] {
            let mut record = valid_record_value();
            record["options"] = options;
            record["correct_answer"] = json!("a");

            assert!(validate_record(&record).is_err());
        }
    }

    #[test]
    fn non_member_correct_answer_is_rejected() {
        let mut record = valid_record_value();
        record["correct_answer"] = json!("Pluto");

        let err = validate_record(&record).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[actix_rt::test]
    async fn stops_retrying_on_first_success() {
        let mut client = MockModelClient::new();
        client
            .expect_complete()
            .times(1)
            .returning(|_, _| Ok(VALID_RECORD_JSON.to_string()));

        let service = QuestionService::new(Arc::new(client), 3);
        let mut topics = HashSet::new();

        let question = service
            .generate_question(Difficulty::Easy, &mut topics)
            .await
            .unwrap();

        assert_eq!(question.correct_answer, "Mars");
        assert_eq!(topics.len(), 1);
    }

    #[actix_rt::test]
    async fn exhausts_after_max_attempts() {
        let mut client = MockModelClient::new();
        client
            .expect_complete()
            .times(3)
            .returning(|_, _| Ok("I cannot answer that.".to_string()));

        let service = QuestionService::new(Arc::new(client), 3);
        let mut topics = HashSet::new();

        let err = service
            .generate_question(Difficulty::Easy, &mut topics)
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::ExhaustedRetries { attempts: 3 }));
    }

    #[actix_rt::test]
    async fn fenced_response_still_validates() {
        let mut client = MockModelClient::new();
        client.expect_complete().times(1).returning(|_, _| {
            Ok(format!("```json\n{}\n```", VALID_RECORD_JSON))
        });

        let service = QuestionService::new(Arc::new(client), 3);
        let mut topics = HashSet::new();

        let question = service
            .generate_question(Difficulty::Medium, &mut topics)
            .await
            .unwrap();
        assert_eq!(question.options.len(), 4);
    }
}
