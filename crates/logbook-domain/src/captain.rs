use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::date::{self, StoredDate};
use crate::log_record::{LogId, LogRecord};

/// All logs belonging to one captain, keyed by `captain_name`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CaptainEntry {
    pub captain_name: String,
    pub ship_name: String,
    /// A blank stored value reads as no crisis.
    #[serde(deserialize_with = "date::deserialize_optional")]
    pub last_crisis_date: Option<StoredDate>,
    pub logs: Vec<LogRecord>,
}

impl CaptainEntry {
    pub fn new(captain_name: String, ship_name: String, last_crisis_date: Option<NaiveDate>) -> Self {
        Self {
            captain_name,
            ship_name,
            last_crisis_date: last_crisis_date.map(StoredDate::from),
            logs: Vec::new(),
        }
    }

    /// Entry created implicitly when the first log for an unknown captain arrives.
    pub fn with_first_log(captain_name: String, log: LogRecord) -> Self {
        Self {
            captain_name,
            ship_name: String::new(),
            last_crisis_date: None,
            logs: vec![log],
        }
    }

    pub fn find_log(&self, log_id: &str) -> Option<&LogRecord> {
        self.logs.iter().find(|log| log.id == log_id)
    }

    pub fn log_position(&self, log_id: &str) -> Option<usize> {
        self.logs.iter().position(|log| log.id == log_id)
    }

    pub fn log_ids(&self) -> impl Iterator<Item = &LogId> {
        self.logs.iter().map(|log| &log.id)
    }
}

pub fn find_entry<'a>(entries: &'a [CaptainEntry], captain_name: &str) -> Option<&'a CaptainEntry> {
    entries.iter().find(|entry| entry.captain_name == captain_name)
}

/// Captain names in collection order, skipping blank names.
pub fn captain_names(entries: &[CaptainEntry]) -> Vec<String> {
    entries
        .iter()
        .map(|entry| entry.captain_name.clone())
        .filter(|name| !name.is_empty())
        .collect()
}

/// Parseable crisis dates per captain; unparseable ones read as `None`.
pub fn last_crisis_dates(entries: &[CaptainEntry]) -> HashMap<String, Option<NaiveDate>> {
    entries
        .iter()
        .map(|entry| {
            let date = entry.last_crisis_date.as_ref().and_then(StoredDate::valid);
            (entry.captain_name.clone(), date)
        })
        .collect()
}

/// Asset key for a captain: lower-cased, whitespace runs become `_`, hyphens dropped.
pub fn normalize_captain_name(name: &str) -> String {
    name.to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_")
        .replace('-', "")
}
