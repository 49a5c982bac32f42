use std::{fs, path::Path, sync::Arc};

use tracing::{error, info};

use crate::domain::{
    common::entities::app_errors::CoreError, recipe::entities::Recipe,
    recipe::ports::RecipeCatalog,
};

/// Recipe table read once from a JSON array. A load failure is kept and
/// reported on every lookup.
#[derive(Debug, Clone)]
pub struct JsonRecipeCatalog {
    recipes: Arc<Result<Vec<Recipe>, CoreError>>,
}

impl JsonRecipeCatalog {
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        let recipes = fs::read_to_string(path)
            .map_err(|e| CoreError::StorageError(format!("Failed to read recipes: {}", e)))
            .and_then(|content| {
                serde_json::from_str::<Vec<Recipe>>(&content)
                    .map_err(|e| CoreError::StorageError(format!("Invalid recipes file: {}", e)))
            });

        match &recipes {
            Ok(recipes) => info!(
                count = recipes.len(),
                path = %path.display(),
                "recipe catalog loaded"
            ),
            Err(e) => error!(path = %path.display(), "Recipe catalog unavailable: {}", e),
        }

        Self {
            recipes: Arc::new(recipes),
        }
    }
}

impl RecipeCatalog for JsonRecipeCatalog {
    fn recipes(&self) -> Result<Vec<Recipe>, CoreError> {
        self.recipes.as_ref().clone()
    }
}
