use super::handlers::{
    chat_socket::chat_socket,
    post_chat::{__path_post_chat, post_chat},
};
use crate::application::http::server::app_state::AppState;
use axum::{
    Router,
    routing::{get, post},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(post_chat))]
pub struct ChatApiDoc;

pub fn chat_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/api/chat", state.args.server.root_path),
            post(post_chat),
        )
        .route(
            &format!("{}/api/chat/ws", state.args.server.root_path),
            get(chat_socket),
        )
}
