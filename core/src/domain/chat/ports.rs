use std::future::Future;

use crate::domain::{common::entities::app_errors::CoreError, chat::value_objects::ChatReply};

/// LLM Client trait for calling a hosted text-generation model
#[cfg_attr(test, mockall::automock)]
pub trait LLMClient: Send + Sync {
    fn generate_text(&self, prompt: String)
    -> impl Future<Output = Result<String, CoreError>> + Send;
}

/// Service trait for the canteen assistant. Always produces a reply.
#[cfg_attr(test, mockall::automock)]
pub trait ChatService: Send + Sync {
    fn respond(&self, query: String) -> impl Future<Output = ChatReply> + Send;
}
