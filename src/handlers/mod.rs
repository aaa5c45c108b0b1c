use actix_web::{get, web, HttpResponse};

pub mod chat_handler;
pub mod fact_handler;
pub mod leaderboard_handler;
pub mod quiz_handler;

#[get("/api/health")]
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({ "status": "ok" }))
}

/// Register every route; one route per user-facing action.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(health_check)
        .service(quiz_handler::start_quiz)
        .service(quiz_handler::next_question)
        .service(quiz_handler::submit_answer)
        .service(quiz_handler::quiz_results)
        .service(quiz_handler::reset_quiz)
        .service(chat_handler::chat)
        .service(chat_handler::chat_history)
        .service(fact_handler::new_fact)
        .service(fact_handler::facts_overview)
        .service(leaderboard_handler::record_score)
        .service(leaderboard_handler::leaderboard);
}
