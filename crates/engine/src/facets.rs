use std::collections::HashSet;

use serde::Serialize;

use crate::category::FilterCategory;
use crate::corpus::Corpus;

/// Distinct lower-cased filter values present in a recipe subset, one list
/// per category, in first-seen order so repopulated option lists stay
/// stable between recomputes.
///
/// Purely a projection of a subset; it never looks at the criteria.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FacetSet {
    pub ingredients: Vec<String>,
    pub ustensils: Vec<String>,
    pub appliances: Vec<String>,
}

impl FacetSet {
    /// Walk the given recipe indices once and collect the distinct values.
    /// Indices without a corpus entry (malformed records) contribute nothing.
    #[must_use]
    pub fn derive(corpus: &Corpus, indices: &[usize]) -> Self {
        let mut facets = FacetSet::default();
        let mut seen: [HashSet<&str>; 3] = Default::default();

        for &index in indices {
            let Some(entry) = corpus.entry(index) else {
                continue;
            };
            for ingredient in &entry.ingredients {
                if seen[0].insert(ingredient) {
                    facets.ingredients.push(ingredient.clone());
                }
            }
            for ustensil in &entry.ustensils {
                if seen[1].insert(ustensil) {
                    facets.ustensils.push(ustensil.clone());
                }
            }
            if seen[2].insert(&entry.appliance) {
                facets.appliances.push(entry.appliance.clone());
            }
        }

        facets
    }

    #[must_use]
    pub fn values(&self, category: FilterCategory) -> &[String] {
        match category {
            FilterCategory::Ingredient => &self.ingredients,
            FilterCategory::Ustensil => &self.ustensils,
            FilterCategory::Appliance => &self.appliances,
        }
    }

    #[must_use]
    pub fn contains(&self, category: FilterCategory, value: &str) -> bool {
        let value = value.to_lowercase();
        self.values(category).iter().any(|v| *v == value)
    }
}
