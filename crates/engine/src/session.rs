use recipe_model::Recipe;
use serde::Serialize;

use crate::category::FilterCategory;
use crate::corpus::Corpus;
use crate::criteria::{Criteria, SelectedTags};
use crate::facets::FacetSet;
use crate::query::QueryMode;

/// Everything one recompute hands to the presentation side: the matching
/// subset (as indices into [`Session::recipes`]), the facet values still
/// worth offering, the selected tags for chip rendering, and whether a
/// regex-mode query failed to compile.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Outcome {
    pub indices: Vec<usize>,
    pub facets: FacetSet,
    pub selected: SelectedTags,
    pub invalid_query: bool,
}

/// One browsing session: the loaded collection plus the accumulated
/// criteria, recomputed lazily.
///
/// Mutations mark the session dirty; the next read recomputes matching and
/// facets in one step against a single criteria snapshot, so a caller never
/// observes a half-applied criteria change.
pub struct Session {
    corpus: Corpus,
    criteria: Criteria,
    mode: QueryMode,
    outcome: Outcome,
    dirty: bool,
}

impl Session {
    #[must_use]
    pub fn new(recipes: Vec<Recipe>) -> Self {
        Self::with_mode(recipes, QueryMode::default())
    }

    #[must_use]
    pub fn with_mode(recipes: Vec<Recipe>, mode: QueryMode) -> Self {
        let mut session = Self {
            corpus: Corpus::new(recipes),
            criteria: Criteria::new(),
            mode,
            outcome: Outcome::default(),
            dirty: true,
        };
        session.refresh();
        session
    }

    pub fn set_query(&mut self, text: &str) {
        self.criteria.set_query(text);
        self.dirty = true;
    }

    pub fn toggle_tag(&mut self, category: FilterCategory, value: &str) -> bool {
        self.dirty = true;
        self.criteria.toggle_tag(category, value)
    }

    pub fn clear(&mut self, category: Option<FilterCategory>) {
        self.criteria.clear(category);
        self.dirty = true;
    }

    /// Current results, recomputing first if any criteria changed.
    pub fn results(&mut self) -> &Outcome {
        self.refresh();
        &self.outcome
    }

    /// The matching recipes in collection order, ready for card rendering.
    pub fn matching_recipes(&mut self) -> Vec<&Recipe> {
        self.refresh();
        self.outcome
            .indices
            .iter()
            .filter_map(|&index| self.corpus.recipe(index))
            .collect()
    }

    /// The whole collection as loaded.
    #[must_use]
    pub fn recipes(&self) -> &[Recipe] {
        self.corpus.recipes()
    }

    fn refresh(&mut self) {
        if !self.dirty {
            return;
        }
        let snapshot = self.criteria.snapshot();
        let matched = self.corpus.matches(&snapshot, self.mode);
        let facets = FacetSet::derive(&self.corpus, &matched.indices);
        self.outcome = Outcome {
            indices: matched.indices,
            facets,
            selected: snapshot.selected().clone(),
            invalid_query: matched.invalid_query,
        };
        self.dirty = false;
    }
}
