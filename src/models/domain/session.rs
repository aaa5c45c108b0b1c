use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::errors::{AppError, AppResult};
use crate::models::domain::question::{Difficulty, QuizQuestion};

/// Number of questions in a full quiz.
pub const QUIZ_LENGTH: usize = 10;

/// One quiz run, from "start" to results.
///
/// This is an explicit value with transition functions rather than ambient
/// mutable state: handlers take the current session, apply one action and
/// store the returned session. `current_question` counts answered questions,
/// so `questions.len() == current_question` means the next question has not
/// been fetched yet and `questions.len() == current_question + 1` means one
/// is awaiting an answer.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct QuizSession {
    pub difficulty: Difficulty,
    pub questions: Vec<QuizQuestion>,
    pub current_question: usize,
    pub score: u32,
    pub wrong_answers: Vec<QuizQuestion>,
    pub topics_used: HashSet<String>,
    pub finished: bool,
    pub started_at: DateTime<Utc>,
}

/// What grading one answer produced; everything the shell needs to reveal.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct AnswerOutcome {
    pub correct: bool,
    pub correct_answer: String,
    pub explanation: String,
    pub resource_url: String,
}

impl QuizSession {
    pub fn start(difficulty: Difficulty) -> Self {
        Self {
            difficulty,
            questions: Vec::new(),
            current_question: 0,
            score: 0,
            wrong_answers: Vec::new(),
            topics_used: HashSet::new(),
            finished: false,
            started_at: Utc::now(),
        }
    }

    /// The question awaiting an answer, if one has been fetched.
    pub fn pending_question(&self) -> Option<&QuizQuestion> {
        if self.finished {
            return None;
        }
        self.questions.get(self.current_question)
    }

    /// True when the shell should ask the pipeline for the next question.
    pub fn needs_question(&self) -> bool {
        !self.finished
            && self.current_question < QUIZ_LENGTH
            && self.questions.len() <= self.current_question
    }

    /// Transition: accept the next fetched question. Does not consume the
    /// current state, so a rejected transition leaves it intact.
    pub fn push_question(&self, question: QuizQuestion) -> AppResult<Self> {
        if !self.needs_question() {
            return Err(AppError::BadRequest(
                "A question is already awaiting an answer".to_string(),
            ));
        }
        let mut next = self.clone();
        next.questions.push(question);
        Ok(next)
    }

    /// Transition: grade `answer` against the pending question by string
    /// equality, advance the index and finish the quiz if this was the last
    /// question.
    pub fn submit_answer(&self, answer: &str) -> AppResult<(Self, AnswerOutcome)> {
        let question = self
            .pending_question()
            .ok_or_else(|| AppError::BadRequest("No question is awaiting an answer".to_string()))?
            .clone();

        let mut next = self.clone();
        let correct = answer == question.correct_answer;
        if correct {
            next.score += 1;
        } else {
            next.wrong_answers.push(question.clone());
        }

        next.current_question += 1;
        if next.current_question >= QUIZ_LENGTH {
            next.finished = true;
        }

        let outcome = AnswerOutcome {
            correct,
            correct_answer: question.correct_answer,
            explanation: question.explanation,
            resource_url: question.resource_url,
        };

        Ok((next, outcome))
    }

    /// Transition: terminate the quiz before all questions were answered.
    /// Used when the question pipeline exhausts its retries; the score so
    /// far stands.
    pub fn finish_early(&self) -> Self {
        let mut next = self.clone();
        next.finished = true;
        next
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn answered_count(&self) -> usize {
        self.current_question
    }
}
