use serde::Serialize;

use crate::category::FilterCategory;

/// Queries shorter than this are kept but treated as "no text filter".
pub const MIN_QUERY_LEN: usize = 3;

/// Selected tag values per category, lower-cased, in selection order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SelectedTags {
    pub ingredients: Vec<String>,
    pub ustensils: Vec<String>,
    pub appliances: Vec<String>,
}

impl SelectedTags {
    #[must_use]
    pub fn values(&self, category: FilterCategory) -> &[String] {
        match category {
            FilterCategory::Ingredient => &self.ingredients,
            FilterCategory::Ustensil => &self.ustensils,
            FilterCategory::Appliance => &self.appliances,
        }
    }

    fn values_mut(&mut self, category: FilterCategory) -> &mut Vec<String> {
        match category {
            FilterCategory::Ingredient => &mut self.ingredients,
            FilterCategory::Ustensil => &mut self.ustensils,
            FilterCategory::Appliance => &mut self.appliances,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ingredients.is_empty() && self.ustensils.is_empty() && self.appliances.is_empty()
    }
}

/// The accumulated search state: free-text query plus selected tags.
/// Mutations never fail; the engine consumes it through [`snapshot`].
///
/// [`snapshot`]: Criteria::snapshot
#[derive(Debug, Clone, Default)]
pub struct Criteria {
    query: String,
    selected: SelectedTags,
}

impl Criteria {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store the trimmed query text. The 3-character activation threshold
    /// is applied when the snapshot is read, not here, so a short query is
    /// remembered and becomes active once it grows past the threshold.
    pub fn set_query(&mut self, text: &str) {
        self.query = text.trim().to_string();
    }

    /// Add the value to the category if absent, remove it if present.
    /// Values are trimmed and lower-cased first, so toggling "Tomate" and
    /// "tomate" hit the same entry. Returns true when the value is selected
    /// after the toggle. Empty values are ignored.
    pub fn toggle_tag(&mut self, category: FilterCategory, value: &str) -> bool {
        let value = value.trim().to_lowercase();
        if value.is_empty() {
            return false;
        }

        let values = self.selected.values_mut(category);
        if let Some(pos) = values.iter().position(|v| *v == value) {
            values.remove(pos);
            false
        } else {
            values.push(value);
            true
        }
    }

    /// Drop all selections for one category, or for all of them.
    pub fn clear(&mut self, category: Option<FilterCategory>) {
        match category {
            Some(cat) => self.selected.values_mut(cat).clear(),
            None => self.selected = SelectedTags::default(),
        }
    }

    /// An owned copy of the current state. The engine only ever sees
    /// snapshots, so a recompute always runs against fully-applied criteria
    /// and later mutations cannot reach into it.
    #[must_use]
    pub fn snapshot(&self) -> CriteriaSnapshot {
        CriteriaSnapshot {
            query: self.query.clone(),
            selected: self.selected.clone(),
        }
    }
}

/// Immutable view of [`Criteria`] consumed by the matching engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CriteriaSnapshot {
    query: String,
    selected: SelectedTags,
}

impl CriteriaSnapshot {
    /// The query, if it is long enough to act as a text filter.
    #[must_use]
    pub fn active_query(&self) -> Option<&str> {
        if self.query.chars().count() >= MIN_QUERY_LEN {
            Some(&self.query)
        } else {
            None
        }
    }

    /// The stored query regardless of the activation threshold.
    #[must_use]
    pub fn raw_query(&self) -> &str {
        &self.query
    }

    #[must_use]
    pub fn selected(&self) -> &SelectedTags {
        &self.selected
    }

    /// True when no criterion is active, i.e. matching is the identity.
    #[must_use]
    pub fn is_identity(&self) -> bool {
        self.active_query().is_none() && self.selected.is_empty()
    }
}
