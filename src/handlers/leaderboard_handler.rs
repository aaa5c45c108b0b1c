use actix_web::{get, post, web, HttpResponse};
use validator::Validate;

use crate::{
    app_state::AppState,
    errors::AppError,
    models::dto::{request::RecordScoreRequest, response::LeaderboardResponse},
};

/// Record the current quiz score under the given name.
#[post("/api/leaderboard")]
async fn record_score(
    state: web::Data<AppState>,
    request: web::Json<RecordScoreRequest>,
) -> Result<HttpResponse, AppError> {
    request.validate()?;
    let name = request.name.trim();
    if name.is_empty() {
        return Err(AppError::BadRequest("Name must not be blank".to_string()));
    }

    let mut session = state.session.write().await;
    let score = session
        .quiz
        .as_ref()
        .ok_or_else(|| AppError::NotFound("No quiz in progress".to_string()))?
        .score;
    session.leaderboard.record(name, score);

    Ok(HttpResponse::Created().json(LeaderboardResponse {
        entries: session.leaderboard.entries().to_vec(),
    }))
}

#[get("/api/leaderboard")]
async fn leaderboard(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let session = state.session.read().await;

    Ok(HttpResponse::Ok().json(LeaderboardResponse {
        entries: session.leaderboard.entries().to_vec(),
    }))
}
