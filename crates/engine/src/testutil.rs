use recipe_model::{Ingredient, Recipe};

pub(crate) fn recipe(
    id: u32,
    name: &str,
    ingredients: &[&str],
    ustensils: &[&str],
    appliance: &str,
) -> Recipe {
    Recipe {
        id,
        name: name.to_string(),
        image: String::new(),
        servings: 0,
        ingredients: ingredients
            .iter()
            .map(|i| Ingredient {
                ingredient: (*i).to_string(),
                quantity: None,
                unit: None,
            })
            .collect(),
        time: 0,
        description: String::new(),
        appliance: appliance.to_string(),
        ustensils: ustensils.iter().map(|u| (*u).to_string()).collect(),
    }
}

/// The two-recipe collection used by the matching and facet scenarios.
pub(crate) fn sample_pair() -> Vec<Recipe> {
    vec![
        recipe(1, "Tarte aux pommes", &["pomme"], &["four"], "four"),
        recipe(2, "Poisson grillé", &["poisson"], &["grill"], "four"),
    ]
}
