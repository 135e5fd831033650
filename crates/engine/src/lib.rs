mod category;
mod corpus;
mod criteria;
mod error;
mod facets;
mod matcher;
mod query;
mod session;

#[cfg(test)]
pub(crate) mod testutil;

pub use category::FilterCategory;
pub use corpus::Corpus;
pub use criteria::{Criteria, CriteriaSnapshot, SelectedTags, MIN_QUERY_LEN};
pub use error::{EngineError, Result};
pub use facets::FacetSet;
pub use matcher::MatchOutcome;
pub use query::QueryMode;
pub use session::{Outcome, Session};
