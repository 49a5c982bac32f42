pub mod chat;
pub mod health;
pub mod insights;
pub mod server;
pub mod waste_record;
