use actix_web::{get, post, web, HttpResponse};
use validator::Validate;

use crate::{
    app_state::AppState,
    errors::AppError,
    models::{
        domain::{session::QUIZ_LENGTH, Difficulty, QuizSession},
        dto::{
            request::{StartQuizRequest, SubmitAnswerRequest},
            response::{
                AnswerResponse, NextQuestionResponse, QuestionDto, QuizResultsDto,
                StartQuizResponse,
            },
        },
    },
};

#[post("/api/quiz/start")]
async fn start_quiz(
    state: web::Data<AppState>,
    request: web::Json<StartQuizRequest>,
) -> Result<HttpResponse, AppError> {
    request.validate()?;
    let difficulty: Difficulty = request.difficulty.parse()?;

    let mut session = state.session.write().await;
    session.quiz = Some(QuizSession::start(difficulty));

    Ok(HttpResponse::Created().json(StartQuizResponse {
        difficulty: difficulty.to_string(),
        total_questions: QUIZ_LENGTH,
    }))
}

/// Fetch the question to display. Generates a new one when none is pending;
/// when generation exhausts its retries the quiz ends early and the results
/// are returned instead.
#[post("/api/quiz/question")]
async fn next_question(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let mut guard = state.session.write().await;
    let quiz = guard
        .quiz
        .as_ref()
        .ok_or_else(|| AppError::NotFound("No quiz in progress".to_string()))?;

    if quiz.is_finished() {
        return Ok(HttpResponse::Ok().json(NextQuestionResponse::Finished {
            results: QuizResultsDto::from(quiz),
        }));
    }

    if let Some(question) = quiz.pending_question() {
        return Ok(HttpResponse::Ok().json(NextQuestionResponse::Question {
            question: QuestionDto::from_session(question, quiz),
        }));
    }

    let mut quiz = quiz.clone();
    let difficulty = quiz.difficulty;
    match state
        .question_service
        .generate_question(difficulty, &mut quiz.topics_used)
        .await
    {
        Ok(question) => {
            let dto = QuestionDto::from_session(&question, &quiz);
            let next = quiz.push_question(question)?;
            guard.quiz = Some(next);
            Ok(HttpResponse::Ok().json(NextQuestionResponse::Question { question: dto }))
        }
        Err(AppError::ExhaustedRetries { attempts }) => {
            log::error!(
                "No valid question after {} attempts; ending the quiz early",
                attempts
            );
            let next = quiz.finish_early();
            let results = QuizResultsDto::from(&next);
            guard.quiz = Some(next);
            Ok(HttpResponse::Ok().json(NextQuestionResponse::Finished { results }))
        }
        Err(other) => {
            guard.quiz = Some(quiz);
            Err(other)
        }
    }
}

#[post("/api/quiz/answer")]
async fn submit_answer(
    state: web::Data<AppState>,
    request: web::Json<SubmitAnswerRequest>,
) -> Result<HttpResponse, AppError> {
    request.validate()?;

    let mut guard = state.session.write().await;
    let (next, outcome) = {
        let quiz = guard
            .quiz
            .as_ref()
            .ok_or_else(|| AppError::NotFound("No quiz in progress".to_string()))?;
        quiz.submit_answer(&request.answer)?
    };

    let response = AnswerResponse::new(outcome, &next);
    guard.quiz = Some(next);

    Ok(HttpResponse::Ok().json(response))
}

#[get("/api/quiz/results")]
async fn quiz_results(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let session = state.session.read().await;
    let quiz = session
        .quiz
        .as_ref()
        .ok_or_else(|| AppError::NotFound("No quiz in progress".to_string()))?;

    Ok(HttpResponse::Ok().json(QuizResultsDto::from(quiz)))
}

#[post("/api/quiz/reset")]
async fn reset_quiz(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let mut session = state.session.write().await;
    session.quiz = None;

    Ok(HttpResponse::NoContent().finish())
}
