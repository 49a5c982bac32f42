use crate::domain::{common::entities::app_errors::CoreError, recipe::entities::Recipe};

/// Read-only recipe table, in lookup order.
#[cfg_attr(test, mockall::automock)]
pub trait RecipeCatalog: Send + Sync {
    fn recipes(&self) -> Result<Vec<Recipe>, CoreError>;
}
