pub mod chat_socket;
pub mod post_chat;
