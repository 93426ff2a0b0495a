//! Log filter predicates.

use std::fmt;

use crate::DerivedLogRecord;

/// Trait for filtering individual logs.
pub trait LogFilter {
    /// Returns true if the log matches the filter criteria.
    fn matches(&self, log: &DerivedLogRecord) -> bool;
}

/// Filter logs by their mistake flag.
///
/// With neither flag set the filter is inactive and passes everything.
/// With both set every log satisfies one of the two branches, so it also
/// passes everything.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MistakeFilter {
    pub yes: bool,
    pub no: bool,
}

impl MistakeFilter {
    pub fn new(yes: bool, no: bool) -> Self {
        Self { yes, no }
    }

    pub fn is_active(&self) -> bool {
        self.yes || self.no
    }
}

impl LogFilter for MistakeFilter {
    fn matches(&self, log: &DerivedLogRecord) -> bool {
        if !self.is_active() {
            return true;
        }
        let made = log.log.mistakes_were_made_today;
        (self.yes && made) || (self.no && !made)
    }
}

/// Which captain's entries to show.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CaptainSelection {
    #[default]
    All,
    Named(String),
}

impl CaptainSelection {
    /// Exact, case-sensitive comparison against the captain name.
    pub fn matches(&self, captain_name: &str) -> bool {
        match self {
            Self::All => true,
            Self::Named(name) => name == captain_name,
        }
    }
}

impl From<&str> for CaptainSelection {
    /// `"all"` and the empty string both mean no restriction.
    fn from(value: &str) -> Self {
        if value.is_empty() || value == "all" {
            Self::All
        } else {
            Self::Named(value.to_string())
        }
    }
}

impl From<String> for CaptainSelection {
    fn from(value: String) -> Self {
        Self::from(value.as_str())
    }
}

impl fmt::Display for CaptainSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => write!(f, "all"),
            Self::Named(name) => write!(f, "{}", name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::LogRecord;
    use chrono::NaiveDate;

    fn derived(mistakes: bool) -> DerivedLogRecord {
        let mut log = LogRecord::new(
            "Log".to_string(),
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        );
        log.set_mistakes(mistakes);
        DerivedLogRecord {
            log,
            days_since_last_crisis: Some(0),
        }
    }

    #[test]
    fn test_inactive_mistake_filter_passes_all() {
        let filter = MistakeFilter::default();
        assert!(!filter.is_active());
        assert!(filter.matches(&derived(true)));
        assert!(filter.matches(&derived(false)));
    }

    #[test]
    fn test_mistakes_yes_only() {
        let filter = MistakeFilter::new(true, false);
        assert!(filter.matches(&derived(true)));
        assert!(!filter.matches(&derived(false)));
    }

    #[test]
    fn test_mistakes_no_only() {
        let filter = MistakeFilter::new(false, true);
        assert!(!filter.matches(&derived(true)));
        assert!(filter.matches(&derived(false)));
    }

    #[test]
    fn test_both_flags_pass_all() {
        let filter = MistakeFilter::new(true, true);
        assert!(filter.is_active());
        assert!(filter.matches(&derived(true)));
        assert!(filter.matches(&derived(false)));
    }

    #[test]
    fn test_captain_selection_from_str() {
        assert_eq!(CaptainSelection::from("all"), CaptainSelection::All);
        assert_eq!(CaptainSelection::from(""), CaptainSelection::All);
        assert_eq!(
            CaptainSelection::from("Picard"),
            CaptainSelection::Named("Picard".to_string())
        );
    }

    #[test]
    fn test_captain_selection_matches_exactly() {
        let selection = CaptainSelection::from("Picard");
        assert!(selection.matches("Picard"));
        assert!(!selection.matches("picard"));
        assert!(CaptainSelection::All.matches("anyone"));
        assert_eq!(selection.to_string(), "Picard");
    }
}
