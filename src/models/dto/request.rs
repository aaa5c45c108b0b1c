use serde::Deserialize;
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct StartQuizRequest {
    /// "Easy", "Medium" or "Hard", case-insensitive.
    #[validate(length(min = 1, max = 20))]
    pub difficulty: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct SubmitAnswerRequest {
    #[validate(length(min = 1, max = 500))]
    pub answer: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct ChatRequest {
    #[validate(length(min = 1, max = 2000))]
    pub message: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct RecordScoreRequest {
    #[validate(length(min = 1, max = 40))]
    pub name: String,
}
