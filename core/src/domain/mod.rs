pub mod chat;
pub mod common;
pub mod health;
pub mod insights;
pub mod leftover;
pub mod recipe;
pub mod waste_record;
