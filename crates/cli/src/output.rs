use std::fmt::Write as _;

use recipe_engine::{FilterCategory, Outcome};
use recipe_model::Recipe;
use serde_json::json;

/// Text rendering of the matching recipes, one card per recipe.
pub fn render_search(matches: &[&Recipe], total: usize, outcome: &Outcome) -> String {
    let mut out = String::new();

    if !outcome.selected.is_empty() {
        let chips: Vec<String> = FilterCategory::ALL
            .iter()
            .flat_map(|&category| {
                outcome
                    .selected
                    .values(category)
                    .iter()
                    .map(move |value| format!("{category}:{value}"))
            })
            .collect();
        let _ = writeln!(out, "filters: {}", chips.join(", "));
    }

    if matches.is_empty() {
        if outcome.invalid_query {
            out.push_str("No recipe matches your search (the query is not a valid pattern).\n");
        } else {
            out.push_str("No recipe matches your search.\n");
        }
        return out;
    }

    for recipe in matches {
        let _ = writeln!(out, "{} ({} min, {})", recipe.name, recipe.time, recipe.appliance);
        for ing in &recipe.ingredients {
            let _ = write!(out, "  - {}", ing.ingredient);
            if let Some(quantity) = ing.quantity {
                let _ = write!(out, ": {quantity}");
                if let Some(unit) = &ing.unit {
                    let _ = write!(out, " {unit}");
                }
            }
            out.push('\n');
        }
    }

    if matches.len() < total {
        let _ = writeln!(out, "... and {} more", total - matches.len());
    }
    let _ = writeln!(out, "{total} recipe(s)");
    out
}

/// Text rendering of the available filter values, grouped per category.
pub fn render_facets(facets: &recipe_engine::FacetSet) -> String {
    let mut out = String::new();
    for &category in &FilterCategory::ALL {
        let _ = writeln!(out, "{category}:");
        for value in facets.values(category) {
            let _ = writeln!(out, "  {value}");
        }
    }
    out
}

/// The JSON document for `recipes search --json`: matches plus everything
/// a presentation layer needs to refresh itself.
pub fn search_document(matches: &[&Recipe], total: usize, outcome: &Outcome) -> serde_json::Value {
    json!({
        "total": total,
        "matches": matches,
        "facets": outcome.facets,
        "selected": outcome.selected,
        "invalid_query": outcome.invalid_query,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use recipe_engine::Session;
    use recipe_model::load_recipes;

    const DATA: &str = r#"[
        {
            "id": 1,
            "name": "Tarte aux pommes",
            "ingredients": [{"ingredient": "pomme", "quantity": 4}],
            "appliance": "four",
            "ustensils": ["rouleau"],
            "time": 50
        }
    ]"#;

    fn session() -> Session {
        Session::new(load_recipes(DATA.as_bytes()).unwrap())
    }

    #[test]
    fn renders_a_card_per_recipe() {
        let mut session = session();
        let outcome = session.results().clone();
        let matches = session.matching_recipes();

        let text = render_search(&matches, matches.len(), &outcome);
        assert!(text.contains("Tarte aux pommes (50 min, four)"));
        assert!(text.contains("  - pomme: 4"));
        assert!(text.contains("1 recipe(s)"));
    }

    #[test]
    fn renders_the_no_results_message() {
        let mut session = session();
        session.set_query("poisson");
        let outcome = session.results().clone();

        let text = render_search(&[], 0, &outcome);
        assert!(text.contains("No recipe matches your search."));
    }

    #[test]
    fn search_document_carries_facets_and_selection() {
        let mut session = session();
        session.toggle_tag(FilterCategory::Appliance, "four");
        let outcome = session.results().clone();
        let matches = session.matching_recipes();

        let doc = search_document(&matches, matches.len(), &outcome);
        assert_eq!(doc["total"], 1);
        assert_eq!(doc["matches"][0]["name"], "Tarte aux pommes");
        assert_eq!(doc["facets"]["ingredients"][0], "pomme");
        assert_eq!(doc["selected"]["appliances"][0], "four");
        assert_eq!(doc["invalid_query"], false);
    }
}
