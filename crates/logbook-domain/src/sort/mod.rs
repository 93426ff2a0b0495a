//! Captain entry sorting.
//!
//! Entries are ordered as whole groups; per-entry keys are aggregated over
//! the logs that survived filtering. All sorts are stable.

use logbook_core::{LogbookError, LogbookResult};
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::cmp::Ordering;
use std::str::FromStr;

use crate::DerivedCaptainEntry;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortField {
    /// Keep the filter stage's order.
    #[default]
    #[serde(rename = "none")]
    Unsorted,
    Alphabetical,
    DaysSinceLastCrisis,
    LogDate,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

impl FromStr for SortField {
    type Err = LogbookError;

    fn from_str(s: &str) -> LogbookResult<Self> {
        match s.to_lowercase().replace(['-', '_'], "").as_str() {
            "none" => Ok(Self::Unsorted),
            "alphabetical" => Ok(Self::Alphabetical),
            "dayssincelastcrisis" => Ok(Self::DaysSinceLastCrisis),
            "logdate" => Ok(Self::LogDate),
            _ => Err(LogbookError::Validation(format!(
                "Invalid sort '{}'. Valid values: none, alphabetical, days-since-last-crisis, log-date",
                s
            ))),
        }
    }
}

impl FromStr for SortOrder {
    type Err = LogbookError;

    fn from_str(s: &str) -> LogbookResult<Self> {
        match s.to_lowercase().as_str() {
            "asc" | "ascending" => Ok(Self::Ascending),
            "desc" | "descending" => Ok(Self::Descending),
            _ => Err(LogbookError::Validation(format!(
                "Invalid order '{}'. Valid values: asc, desc",
                s
            ))),
        }
    }
}

/// Enum dispatch for comparing entries by a specific key.
pub enum SortBy {
    CaptainName,
    MinDaysSinceLastCrisis,
    EarliestLogDate,
}

impl SortBy {
    pub fn compare(&self, a: &DerivedCaptainEntry, b: &DerivedCaptainEntry) -> Ordering {
        match self {
            Self::CaptainName => a.captain_name.cmp(&b.captain_name),
            Self::MinDaysSinceLastCrisis => {
                missing_last(a.min_days_since_last_crisis(), b.min_days_since_last_crisis())
            }
            Self::EarliestLogDate => missing_last(a.earliest_log_date(), b.earliest_log_date()),
        }
    }
}

/// Entries without logs have no key and compare greater than any entry that has one.
fn missing_last<T: Ord>(a: Option<T>, b: Option<T>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Wrapper that applies sort order (ascending/descending) to a sort key.
pub struct OrderedSorter {
    sorter: SortBy,
    order: SortOrder,
}

impl OrderedSorter {
    pub fn new(sorter: SortBy, order: SortOrder) -> Self {
        Self { sorter, order }
    }

    /// Stable sort in place. Works with both `&DerivedCaptainEntry` and owned elements.
    pub fn sort<T: Borrow<DerivedCaptainEntry>>(&self, entries: &mut [T]) {
        entries.sort_by(|a, b| {
            let cmp = self.sorter.compare(a.borrow(), b.borrow());
            match self.order {
                SortOrder::Ascending => cmp,
                SortOrder::Descending => cmp.reverse(),
            }
        });
    }
}

/// Get the sorter for a sort field, or `None` when the order must be kept.
pub fn get_sorter_for_field(field: SortField) -> Option<SortBy> {
    match field {
        SortField::Unsorted => None,
        SortField::Alphabetical => Some(SortBy::CaptainName),
        SortField::DaysSinceLastCrisis => Some(SortBy::MinDaysSinceLastCrisis),
        SortField::LogDate => Some(SortBy::EarliestLogDate),
    }
}
