use log::{debug, warn};
use regex::Regex;

use crate::corpus::{Corpus, Entry};
use crate::criteria::{CriteriaSnapshot, SelectedTags};
use crate::query::{compile_query, QueryMode};

/// Result of one matching pass: indices into the corpus's recipe slice,
/// in input order. `invalid_query` is set when a regex-mode query failed
/// to compile; the result is then empty by construction and the caller
/// can surface "no results" instead of an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchOutcome {
    pub indices: Vec<usize>,
    pub invalid_query: bool,
}

impl Corpus {
    /// Compute the subset matching the snapshot. A recipe is kept iff every
    /// active criterion holds: the text query must hit at least one field,
    /// and each selected tag value must be contained (case-insensitive
    /// substring) somewhere in its category. Order-preserving and
    /// deterministic; with no active criteria every well-formed recipe
    /// matches.
    #[must_use]
    pub fn matches(&self, criteria: &CriteriaSnapshot, mode: QueryMode) -> MatchOutcome {
        let pattern = match criteria.active_query() {
            Some(query) => match compile_query(query, mode) {
                Ok(re) => Some(re),
                Err(err) => {
                    // The text criterion matches nothing, and everything is
                    // ANDed, so the whole result is empty. Non-fatal.
                    warn!("query does not compile, returning no matches: {err}");
                    return MatchOutcome {
                        indices: Vec::new(),
                        invalid_query: true,
                    };
                }
            },
            None => None,
        };

        let selected = criteria.selected();
        let indices: Vec<usize> = self
            .entries
            .iter()
            .filter(|entry| entry.matches(pattern.as_ref(), selected))
            .map(|entry| entry.recipe)
            .collect();

        debug!(
            "matched {} of {} recipes (query={:?}, tags={})",
            indices.len(),
            self.len(),
            criteria.raw_query(),
            selected.ingredients.len() + selected.ustensils.len() + selected.appliances.len(),
        );

        MatchOutcome {
            indices,
            invalid_query: false,
        }
    }
}

impl Entry {
    fn matches(&self, pattern: Option<&Regex>, selected: &SelectedTags) -> bool {
        if let Some(re) = pattern {
            let hit = re.is_match(&self.name)
                || self.ingredients.iter().any(|i| re.is_match(i))
                || self.ustensils.iter().any(|u| re.is_match(u))
                || re.is_match(&self.appliance);
            if !hit {
                return false;
            }
        }

        // AND across selected values, OR within the recipe's own list.
        selected
            .ingredients
            .iter()
            .all(|value| self.ingredients.iter().any(|i| i.contains(value.as_str())))
            && selected
                .ustensils
                .iter()
                .all(|value| self.ustensils.iter().any(|u| u.contains(value.as_str())))
            && selected
                .appliances
                .iter()
                .all(|value| self.appliance.contains(value.as_str()))
    }
}
