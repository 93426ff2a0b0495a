//! Free-text log search.
//!
//! A query matches a log when it is a case-insensitive substring of any of
//! the searchable fields. Captain and ship names live on the entry, the rest
//! on the log itself.

mod highlight;

pub use highlight::{highlight, HighlightSegment};

use crate::{DerivedCaptainEntry, LogRecord};

/// Trait for searching logs within their owning entry.
pub trait LogSearcher {
    /// Returns true if the log matches the search criteria.
    fn matches(&self, entry: &DerivedCaptainEntry, log: &LogRecord) -> bool;
}

/// Fields covered by free-text search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchField {
    CaptainName,
    ShipName,
    LogTitle,
    LogContent,
    Location,
}

impl SearchField {
    pub const ALL: [SearchField; 5] = [
        SearchField::CaptainName,
        SearchField::ShipName,
        SearchField::LogTitle,
        SearchField::LogContent,
        SearchField::Location,
    ];

    fn value<'a>(&self, entry: &'a DerivedCaptainEntry, log: &'a LogRecord) -> &'a str {
        match self {
            Self::CaptainName => &entry.captain_name,
            Self::ShipName => &entry.ship_name,
            Self::LogTitle => &log.log_title,
            Self::LogContent => &log.log_content,
            Self::Location => &log.location,
        }
    }
}

/// Search a single field (case-insensitive).
pub struct FieldSearcher {
    field: SearchField,
    query: String,
}

impl FieldSearcher {
    pub fn new(field: SearchField, query: impl Into<String>) -> Self {
        Self {
            field,
            query: query.into().to_lowercase(),
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }
}

impl LogSearcher for FieldSearcher {
    fn matches(&self, entry: &DerivedCaptainEntry, log: &LogRecord) -> bool {
        if self.query.is_empty() {
            return true;
        }
        self.field
            .value(entry, log)
            .to_lowercase()
            .contains(&self.query)
    }
}

/// Composite searcher that matches if any sub-searcher matches.
pub struct CompositeSearcher {
    searchers: Vec<FieldSearcher>,
}

impl CompositeSearcher {
    /// Create an empty composite searcher (matches all logs).
    pub fn new() -> Self {
        Self {
            searchers: Vec::new(),
        }
    }

    /// Search every field in [`SearchField::ALL`] for `query`.
    pub fn all(query: impl Into<String>) -> Self {
        let query = query.into();
        Self {
            searchers: SearchField::ALL
                .iter()
                .map(|field| FieldSearcher::new(*field, query.clone()))
                .collect(),
        }
    }
}

impl Default for CompositeSearcher {
    fn default() -> Self {
        Self::new()
    }
}

impl LogSearcher for CompositeSearcher {
    fn matches(&self, entry: &DerivedCaptainEntry, log: &LogRecord) -> bool {
        if self.searchers.is_empty() {
            return true;
        }
        self.searchers
            .iter()
            .any(|searcher| searcher.matches(entry, log))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CaptainEntry;
    use chrono::NaiveDate;

    fn fixture() -> (DerivedCaptainEntry, LogRecord) {
        let mut log = LogRecord::new(
            "Encounter with the Borg".to_string(),
            NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
        );
        log.update_content("Shields held at forty percent.".to_string());
        log.update_location("Delta Quadrant".to_string());
        let entry = CaptainEntry::new("Kathryn Janeway".to_string(), "USS Voyager".to_string(), None);
        (DerivedCaptainEntry::from_entry(&entry), log)
    }

    #[test]
    fn test_field_searcher_is_case_insensitive() {
        let (entry, log) = fixture();

        assert!(FieldSearcher::new(SearchField::LogTitle, "BORG").matches(&entry, &log));
        assert!(FieldSearcher::new(SearchField::CaptainName, "janeway").matches(&entry, &log));
        assert!(!FieldSearcher::new(SearchField::ShipName, "enterprise").matches(&entry, &log));
    }

    #[test]
    fn test_empty_query_matches() {
        let (entry, log) = fixture();
        assert!(FieldSearcher::new(SearchField::Location, "").matches(&entry, &log));
        assert!(CompositeSearcher::all("").matches(&entry, &log));
    }

    #[test]
    fn test_composite_searcher_any_field() {
        let (entry, log) = fixture();

        assert!(CompositeSearcher::all("voyager").matches(&entry, &log));
        assert!(CompositeSearcher::all("forty").matches(&entry, &log));
        assert!(CompositeSearcher::all("delta").matches(&entry, &log));
        assert!(!CompositeSearcher::all("romulan").matches(&entry, &log));
    }

    #[test]
    fn test_composite_searcher_empty() {
        let (entry, log) = fixture();
        assert!(CompositeSearcher::new().matches(&entry, &log));
    }
}
