use actix_web::{get, post, web, HttpResponse};
use validator::Validate;

use crate::{
    app_state::AppState,
    errors::AppError,
    models::{
        domain::ChatMessage,
        dto::{
            request::ChatRequest,
            response::{ChatHistoryResponse, ChatResponse},
        },
    },
};

#[post("/api/chat")]
async fn chat(
    state: web::Data<AppState>,
    request: web::Json<ChatRequest>,
) -> Result<HttpResponse, AppError> {
    request.validate()?;

    let reply = state.chat_service.chat(&request.message).await?;

    let mut session = state.session.write().await;
    session.chat.push(ChatMessage::user(request.message.clone()));
    session.chat.push(ChatMessage::assistant(reply.clone()));

    Ok(HttpResponse::Ok().json(ChatResponse { reply }))
}

#[get("/api/chat/history")]
async fn chat_history(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let session = state.session.read().await;

    Ok(HttpResponse::Ok().json(ChatHistoryResponse {
        messages: session.chat.clone(),
    }))
}
