//! Derived per-log fields.
//!
//! Derivation is pure: the source collection is borrowed and a new derived
//! collection is returned. Nothing computed here is ever persisted.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{CaptainEntry, LogRecord, StoredDate};

/// A log together with its computed day count, `None` (serialized as
/// `null`) when one of its dates does not parse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DerivedLogRecord {
    #[serde(flatten)]
    pub log: LogRecord,
    pub days_since_last_crisis: Option<i64>,
}

/// A captain entry whose logs carry derived fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DerivedCaptainEntry {
    pub captain_name: String,
    pub ship_name: String,
    pub last_crisis_date: Option<StoredDate>,
    pub logs: Vec<DerivedLogRecord>,
}

impl DerivedCaptainEntry {
    pub fn from_entry(entry: &CaptainEntry) -> Self {
        Self {
            captain_name: entry.captain_name.clone(),
            ship_name: entry.ship_name.clone(),
            last_crisis_date: entry.last_crisis_date.clone(),
            logs: entry
                .logs
                .iter()
                .map(|log| DerivedLogRecord {
                    log: log.clone(),
                    days_since_last_crisis: days_since_last_crisis(
                        entry.last_crisis_date.as_ref(),
                        &log.date,
                    ),
                })
                .collect(),
        }
    }

    pub fn min_days_since_last_crisis(&self) -> Option<i64> {
        self.logs.iter().filter_map(|l| l.days_since_last_crisis).min()
    }

    pub fn earliest_log_date(&self) -> Option<NaiveDate> {
        self.logs.iter().filter_map(|l| l.log.date.valid()).min()
    }
}

/// Whole days from `last_crisis_date` to `log_date`, or 0 without a crisis date.
///
/// Dates are calendar days, so the difference is exact and floors trivially.
/// Logs dated before the crisis yield negative values. An unparseable date
/// on either side gives `None`.
pub fn days_since_last_crisis(
    last_crisis_date: Option<&StoredDate>,
    log_date: &StoredDate,
) -> Option<i64> {
    match last_crisis_date {
        None => Some(0),
        Some(crisis) => {
            let crisis = crisis.valid()?;
            let log_date = log_date.valid()?;
            Some(log_date.signed_duration_since(crisis).num_days())
        }
    }
}

pub fn derive_collection(entries: &[CaptainEntry]) -> Vec<DerivedCaptainEntry> {
    entries.iter().map(DerivedCaptainEntry::from_entry).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn days(crisis: Option<&str>, log: &str) -> Option<i64> {
        let crisis = crisis.map(StoredDate::parse);
        days_since_last_crisis(crisis.as_ref(), &StoredDate::parse(log))
    }

    #[test]
    fn test_ten_days_after_crisis() {
        assert_eq!(days(Some("2024-01-01"), "2024-01-11"), Some(10));
    }

    #[test]
    fn test_no_crisis_date_is_zero() {
        assert_eq!(days(None, "2024-01-11"), Some(0));
        assert_eq!(days(None, "whenever"), Some(0));
    }

    #[test]
    fn test_log_before_crisis_is_negative() {
        assert_eq!(days(Some("2024-01-11"), "2024-01-01"), Some(-10));
    }

    #[test]
    fn test_spans_leap_february() {
        assert_eq!(days(Some("2024-02-01"), "2024-03-01"), Some(29));
    }

    #[test]
    fn test_unparseable_date_has_no_day_count() {
        assert_eq!(days(Some("2024-02-01"), ""), None);
        assert_eq!(days(Some("last tuesday"), "2024-03-01"), None);
    }

    #[test]
    fn test_bad_date_only_affects_its_own_log() {
        let mut entry = CaptainEntry::new(
            "Janeway".to_string(),
            "Voyager".to_string(),
            Some(date("2024-02-01")),
        );
        let mut broken = LogRecord::new("Broken".to_string(), date("2024-03-01"));
        broken.date = StoredDate::parse("");
        entry.logs.push(broken);
        entry
            .logs
            .push(LogRecord::new("Fine".to_string(), date("2024-03-10")));

        let derived = DerivedCaptainEntry::from_entry(&entry);
        assert_eq!(derived.logs[0].days_since_last_crisis, None);
        assert_eq!(derived.logs[1].days_since_last_crisis, Some(38));
        assert_eq!(derived.min_days_since_last_crisis(), Some(38));
        assert_eq!(derived.earliest_log_date(), Some(date("2024-03-10")));

        let json = serde_json::to_value(&derived.logs[0]).unwrap();
        assert!(json["daysSinceLastCrisis"].is_null());
        assert_eq!(json["date"], "");
    }

    #[test]
    fn test_derive_collection_leaves_source_untouched() {
        let mut entry = CaptainEntry::new(
            "Janeway".to_string(),
            "Voyager".to_string(),
            Some(date("2024-02-01")),
        );
        entry
            .logs
            .push(LogRecord::new("Nebula".to_string(), date("2024-03-10")));
        let source = vec![entry];
        let before = source.clone();

        let derived = derive_collection(&source);

        assert_eq!(source, before);
        assert_eq!(derived.len(), 1);
        assert_eq!(derived[0].logs[0].days_since_last_crisis, Some(38));
        assert_eq!(derived[0].logs[0].log, source[0].logs[0]);
    }

    #[test]
    fn test_derived_log_serializes_flat() {
        let mut log = LogRecord::new("Nebula".to_string(), date("2024-03-10"));
        log.id = "a".to_string();
        let derived = DerivedLogRecord {
            log,
            days_since_last_crisis: Some(4),
        };

        let json = serde_json::to_value(&derived).unwrap();
        assert_eq!(json["id"], "a");
        assert_eq!(json["logTitle"], "Nebula");
        assert_eq!(json["daysSinceLastCrisis"], 4);
    }

    #[test]
    fn test_aggregates_over_logs() {
        let mut entry = CaptainEntry::new(
            "Sisko".to_string(),
            "Defiant".to_string(),
            Some(date("2024-01-01")),
        );
        entry
            .logs
            .push(LogRecord::new("B".to_string(), date("2024-01-20")));
        entry
            .logs
            .push(LogRecord::new("A".to_string(), date("2024-01-05")));

        let derived = DerivedCaptainEntry::from_entry(&entry);
        assert_eq!(derived.min_days_since_last_crisis(), Some(4));
        assert_eq!(derived.earliest_log_date(), Some(date("2024-01-05")));

        let empty = DerivedCaptainEntry::from_entry(&CaptainEntry::new(
            "Empty".to_string(),
            String::new(),
            None,
        ));
        assert_eq!(empty.min_days_since_last_crisis(), None);
        assert_eq!(empty.earliest_log_date(), None);
    }
}
