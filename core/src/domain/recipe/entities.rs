use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Recipe {
    pub name: String,
    /// Lowercase keywords, scanned in order.
    pub ingredients: Vec<String>,
    pub instructions: String,
}

impl Recipe {
    pub fn new(name: &str, ingredients: &[&str], instructions: &str) -> Self {
        Self {
            name: name.to_string(),
            ingredients: ingredients.iter().map(|i| i.to_string()).collect(),
            instructions: instructions.to_string(),
        }
    }

    pub fn suggestion(&self) -> String {
        format!(
            "RAG Suggestion: Try '{}' - {}",
            self.name, self.instructions
        )
    }
}
