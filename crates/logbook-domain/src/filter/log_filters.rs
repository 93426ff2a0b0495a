//! Log filter configuration.
//!
//! Holds what the user asked to filter by, as opposed to the predicates in
//! `log_filter` which perform the filtering.

use super::{CaptainSelection, MistakeFilter};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogFilters {
    /// Case-insensitive free-text query. `None` or empty matches everything.
    pub search_query: Option<String>,
    pub captain: CaptainSelection,
    pub mistakes: MistakeFilter,
}

impl LogFilters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.search_query = Some(query.into());
        self
    }

    pub fn with_captain(mut self, captain: impl Into<CaptainSelection>) -> Self {
        self.captain = captain.into();
        self
    }

    pub fn with_mistakes(mut self, yes: bool, no: bool) -> Self {
        self.mistakes = MistakeFilter::new(yes, no);
        self
    }

    /// The lower-cased query, or `None` when there is nothing to search for.
    pub fn normalized_query(&self) -> Option<String> {
        self.search_query
            .as_deref()
            .filter(|q| !q.is_empty())
            .map(str::to_lowercase)
    }

    pub fn has_active_filters(&self) -> bool {
        self.normalized_query().is_some()
            || self.captain != CaptainSelection::All
            || self.mistakes.is_active()
    }
}
