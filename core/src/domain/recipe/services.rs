use tracing::error;

use crate::domain::recipe::ports::RecipeCatalog;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecipeMatch {
    Found { recipe_name: String, suggestion: String },
    NoMatch,
}

/// Returns the first recipe with an ingredient keyword contained in
/// `food_item`. Table order decides, not match quality. An unreadable
/// catalog is logged and treated as no match.
pub fn find_recipe<RC>(catalog: &RC, food_item: &str) -> RecipeMatch
where
    RC: RecipeCatalog + ?Sized,
{
    let recipes = match catalog.recipes() {
        Ok(recipes) => recipes,
        Err(e) => {
            error!("Recipe lookup failed: {}", e);
            return RecipeMatch::NoMatch;
        }
    };

    let food_item = food_item.to_lowercase();

    for recipe in &recipes {
        for ingredient in &recipe.ingredients {
            if food_item.contains(ingredient.as_str()) {
                return RecipeMatch::Found {
                    recipe_name: recipe.name.clone(),
                    suggestion: recipe.suggestion(),
                };
            }
        }
    }

    RecipeMatch::NoMatch
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        common::entities::app_errors::CoreError,
        recipe::{entities::Recipe, ports::MockRecipeCatalog},
    };

    fn catalog(recipes: Vec<Recipe>) -> MockRecipeCatalog {
        let mut catalog = MockRecipeCatalog::new();
        catalog
            .expect_recipes()
            .returning(move || Ok(recipes.clone()));
        catalog
    }

    #[test]
    fn test_first_recipe_in_table_order_wins() {
        let catalog = catalog(vec![
            Recipe::new("Veg Pulao", &["peas", "carrot"], "Toss with rice."),
            Recipe::new("Carrot Halwa", &["carrot"], "Cook down with milk."),
        ]);

        let found = find_recipe(&catalog, "Grated CARROT");
        assert_eq!(
            found,
            RecipeMatch::Found {
                recipe_name: "Veg Pulao".to_string(),
                suggestion: "RAG Suggestion: Try 'Veg Pulao' - Toss with rice.".to_string(),
            }
        );
    }

    #[test]
    fn test_keyword_must_be_substring_of_input() {
        let catalog = catalog(vec![Recipe::new(
            "Bread Pudding",
            &["bread"],
            "Bake with custard.",
        )]);

        assert!(matches!(
            find_recipe(&catalog, "Stale bread loaves"),
            RecipeMatch::Found { .. }
        ));
        assert_eq!(find_recipe(&catalog, "Chapati"), RecipeMatch::NoMatch);
    }

    #[test]
    fn test_unreadable_catalog_is_no_match() {
        let mut catalog = MockRecipeCatalog::new();
        catalog
            .expect_recipes()
            .times(1)
            .returning(|| Err(CoreError::StorageError("missing file".to_string())));

        assert_eq!(find_recipe(&catalog, "rice"), RecipeMatch::NoMatch);
    }
}
