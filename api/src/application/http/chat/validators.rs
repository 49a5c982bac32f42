use ecocanteen_core::domain::chat::value_objects::{ChatReply, ReplySource};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
pub struct ChatRequest {
    #[validate(length(max = 5000, message = "query must be at most 5000 characters"))]
    pub query: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ChatResponse {
    pub response: String,
    pub source: ReplySource,
}

impl From<ChatReply> for ChatResponse {
    fn from(reply: ChatReply) -> Self {
        Self {
            response: reply.response,
            source: reply.source,
        }
    }
}
