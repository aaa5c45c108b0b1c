use actix_web::{get, post, web, HttpResponse};

use crate::{
    app_state::AppState,
    errors::AppError,
    models::dto::response::{FactResponse, FactsOverviewResponse},
};

#[post("/api/facts")]
async fn new_fact(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let fact = state.fact_service.fetch_fact().await?;

    let mut session = state.session.write().await;
    session.facts.record(fact.clone());

    Ok(HttpResponse::Ok().json(FactResponse { fact }))
}

#[get("/api/facts")]
async fn facts_overview(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let session = state.session.read().await;

    Ok(HttpResponse::Ok().json(FactsOverviewResponse {
        current_fact: session.facts.current_fact.clone(),
        history: session
            .facts
            .history_newest_first()
            .into_iter()
            .map(str::to_string)
            .collect(),
        trivia: state.fact_service.random_trivia().to_string(),
    }))
}
