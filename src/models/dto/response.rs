use serde::Serialize;

use crate::models::domain::{
    chat::ChatMessage, leaderboard::LeaderboardEntry, session::QuizSession, AnswerOutcome,
    QuizQuestion,
};

/// A question as the shell sees it: the correct answer and explanation are
/// withheld until the answer is graded.
#[derive(Debug, Serialize)]
pub struct QuestionDto {
    pub number: usize,
    pub total: usize,
    pub text: String,
    pub options: Vec<String>,
}

impl QuestionDto {
    pub fn from_session(question: &QuizQuestion, session: &QuizSession) -> Self {
        Self {
            number: session.answered_count() + 1,
            total: crate::models::domain::session::QUIZ_LENGTH,
            text: question.text.clone(),
            options: question.options.clone(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct WrongAnswerDto {
    pub question: String,
    pub correct_answer: String,
    pub explanation: String,
    pub resource_url: String,
}

impl From<&QuizQuestion> for WrongAnswerDto {
    fn from(question: &QuizQuestion) -> Self {
        Self {
            question: question.text.clone(),
            correct_answer: question.correct_answer.clone(),
            explanation: question.explanation.clone(),
            resource_url: question.resource_url.clone(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct QuizResultsDto {
    pub score: u32,
    pub answered: usize,
    pub total: usize,
    pub finished: bool,
    pub wrong_answers: Vec<WrongAnswerDto>,
}

impl From<&QuizSession> for QuizResultsDto {
    fn from(session: &QuizSession) -> Self {
        Self {
            score: session.score,
            answered: session.answered_count(),
            total: crate::models::domain::session::QUIZ_LENGTH,
            finished: session.is_finished(),
            wrong_answers: session.wrong_answers.iter().map(WrongAnswerDto::from).collect(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct StartQuizResponse {
    pub difficulty: String,
    pub total_questions: usize,
}

/// Either the next question, or the results when the pipeline could not
/// produce one and the quiz ended early.
#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum NextQuestionResponse {
    Question { question: QuestionDto },
    Finished { results: QuizResultsDto },
}

#[derive(Debug, Serialize)]
pub struct AnswerResponse {
    pub correct: bool,
    pub correct_answer: String,
    pub explanation: String,
    pub resource_url: String,
    pub score: u32,
    pub answered: usize,
    pub finished: bool,
}

impl AnswerResponse {
    pub fn new(outcome: AnswerOutcome, session: &QuizSession) -> Self {
        Self {
            correct: outcome.correct,
            correct_answer: outcome.correct_answer,
            explanation: outcome.explanation,
            resource_url: outcome.resource_url,
            score: session.score,
            answered: session.answered_count(),
            finished: session.is_finished(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub reply: String,
}

#[derive(Debug, Serialize)]
pub struct ChatHistoryResponse {
    pub messages: Vec<ChatMessage>,
}

#[derive(Debug, Serialize)]
pub struct FactResponse {
    pub fact: String,
}

#[derive(Debug, Serialize)]
pub struct FactsOverviewResponse {
    pub current_fact: Option<String>,
    pub history: Vec<String>,
    pub trivia: String,
}

#[derive(Debug, Serialize)]
pub struct LeaderboardResponse {
    pub entries: Vec<LeaderboardEntry>,
}
