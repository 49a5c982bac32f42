pub mod json_recipe_catalog;

pub use json_recipe_catalog::JsonRecipeCatalog;
