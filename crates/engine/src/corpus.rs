use log::warn;
use recipe_model::Recipe;

/// The recipe collection with per-recipe lower-cased search fields,
/// memoized once at build time so recomputes never re-lowercase.
///
/// Recipes that fail the well-formedness check (empty name, no
/// ingredients, empty appliance) are excluded from matching and facet
/// derivation; each is reported once, here.
pub struct Corpus {
    recipes: Vec<Recipe>,
    pub(crate) entries: Vec<Entry>,
}

/// Lower-cased projection of one well-formed recipe. `recipe` indexes
/// into `Corpus::recipes`; entries are in recipe order.
pub(crate) struct Entry {
    pub(crate) recipe: usize,
    pub(crate) name: String,
    pub(crate) ingredients: Vec<String>,
    pub(crate) ustensils: Vec<String>,
    pub(crate) appliance: String,
}

impl Corpus {
    #[must_use]
    pub fn new(recipes: Vec<Recipe>) -> Self {
        let entries = recipes
            .iter()
            .enumerate()
            .filter_map(|(idx, recipe)| {
                if !recipe.is_well_formed() {
                    warn!(
                        "excluding malformed recipe id={} from matching and facets",
                        recipe.id
                    );
                    return None;
                }
                Some(Entry {
                    recipe: idx,
                    name: recipe.name.to_lowercase(),
                    ingredients: recipe
                        .ingredients
                        .iter()
                        .map(|i| i.ingredient.to_lowercase())
                        .collect(),
                    ustensils: recipe.ustensils.iter().map(|u| u.to_lowercase()).collect(),
                    appliance: recipe.appliance.to_lowercase(),
                })
            })
            .collect();

        Self { recipes, entries }
    }

    /// The full collection as loaded, malformed records included.
    #[must_use]
    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    #[must_use]
    pub fn recipe(&self, index: usize) -> Option<&Recipe> {
        self.recipes.get(index)
    }

    /// Number of recipes the engine actually considers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entry for a recipe index, if that recipe is well-formed.
    /// Entries are sorted by recipe index, so this is a binary search.
    pub(crate) fn entry(&self, recipe_index: usize) -> Option<&Entry> {
        self.entries
            .binary_search_by_key(&recipe_index, |e| e.recipe)
            .ok()
            .map(|pos| &self.entries[pos])
    }
}
