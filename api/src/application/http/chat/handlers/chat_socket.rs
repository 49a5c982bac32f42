use axum::{
    extract::{
        State, WebSocketUpgrade,
        ws::{Message, WebSocket},
    },
    response::IntoResponse,
};
use ecocanteen_core::domain::{chat::ports::ChatService, common::generate_uuid_v7};
use serde::Serialize;
use tracing::{Instrument, debug, info, info_span, warn};
use validator::Validate;

use crate::application::http::{
    chat::validators::{ChatRequest, ChatResponse},
    server::app_state::AppState,
};

/// Outbound frame: either a reply or an error, never both.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum ChatFrame {
    Reply(ChatResponse),
    Error { error: String },
}

pub async fn chat_socket(
    ws: WebSocketUpgrade,
    State(state): State<AppState>,
) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_socket(socket, state))
}

async fn handle_socket(mut socket: WebSocket, state: AppState) {
    let connection_id = generate_uuid_v7();

    async move {
        info!("chat connection opened");

        while let Some(message) = socket.recv().await {
            let message = match message {
                Ok(message) => message,
                Err(e) => {
                    warn!("chat connection error: {}", e);
                    break;
                }
            };

            let reply = match message {
                Message::Text(text) => reply_to_frame(&state.service, text.as_str()).await,
                Message::Close(_) => break,
                _ => continue,
            };

            if let Err(e) = socket.send(Message::Text(reply.into())).await {
                warn!("failed to send chat reply: {}", e);
                break;
            }
        }

        info!("chat connection closed");
    }
    .instrument(info_span!("chat_socket", %connection_id))
    .await
}

/// Answers one inbound text frame with exactly one outbound JSON frame.
pub async fn reply_to_frame<S>(service: &S, frame: &str) -> String
where
    S: ChatService,
{
    let outbound = match serde_json::from_str::<ChatRequest>(frame) {
        Ok(request) => match request.validate() {
            Ok(()) => ChatFrame::Reply(ChatResponse::from(service.respond(request.query).await)),
            Err(e) => ChatFrame::Error {
                error: e.to_string(),
            },
        },
        Err(e) => {
            debug!("rejected chat frame: {}", e);
            ChatFrame::Error {
                error: format!("invalid chat payload: {}", e),
            }
        }
    };

    serde_json::to_string(&outbound)
        .unwrap_or_else(|_| r#"{"error":"failed to encode reply"}"#.to_string())
}
