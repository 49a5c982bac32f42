use axum::extract::State;
use ecocanteen_core::domain::chat::ports::ChatService;

use crate::application::http::{
    chat::validators::{ChatRequest, ChatResponse},
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[utoipa::path(
    post,
    path = "/chat",
    tag = "chat",
    summary = "Ask the canteen assistant",
    description = "Answers from the hosted model when configured, otherwise from the keyword intent classifier",
    request_body = ChatRequest,
    responses(
        (status = 200, body = ChatResponse)
    )
)]
pub async fn post_chat(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<ChatRequest>,
) -> Result<Response<ChatResponse>, ApiError> {
    let reply = state.service.respond(payload.query).await;

    Ok(Response::OK(ChatResponse::from(reply)))
}
