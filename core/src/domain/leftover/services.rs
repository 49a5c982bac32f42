use crate::domain::{
    leftover::value_objects::{
        DONATION_THRESHOLD_KG, LEFTOVER_ACTIONS, PORTION_CONTROL_ADVICE, format_quantity,
    },
    recipe::{
        ports::RecipeCatalog,
        services::{RecipeMatch, find_recipe},
    },
};

/// Suggests what to do with `quantity_kg` of leftover `food_item`.
///
/// Falls through a recipe match, the keyword table, the donation threshold
/// and finally generic portion-control advice.
pub fn advise<RC>(catalog: &RC, food_item: &str, quantity_kg: f64) -> String
where
    RC: RecipeCatalog + ?Sized,
{
    let kg = format_quantity(quantity_kg);

    if let RecipeMatch::Found { suggestion, .. } = find_recipe(catalog, food_item) {
        return format!("{suggestion} ({kg}kg saved)");
    }

    let food_item = food_item.to_lowercase();
    if let Some((_, template)) = LEFTOVER_ACTIONS
        .iter()
        .find(|(key, _)| food_item.contains(key))
    {
        return template.render(quantity_kg);
    }

    if quantity_kg > DONATION_THRESHOLD_KG {
        return format!(
            "Contact 'Hunger Relief Foundation' for immediate donation of {kg}kg."
        );
    }

    PORTION_CONTROL_ADVICE.to_string()
}
