pub mod llm;
pub mod recipe;
pub mod waste_record;
