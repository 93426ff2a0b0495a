use logbook_core::LogbookResult;
use serde::Serialize;

use crate::{CaptainEntry, DerivedLogRecord, LogRecord};

/// Which branch `add_log` took.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AddOutcome {
    /// No entry existed for the captain; one was created around the log.
    Created,
    /// The log was appended to an existing entry.
    Appended,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum UpdateOutcome {
    Updated,
    CaptainNotFound,
    LogNotFound,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RemoveOutcome {
    Removed,
    CaptainNotFound,
    LogNotFound,
}

impl UpdateOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, Self::Updated)
    }
}

impl RemoveOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, Self::Removed)
    }
}

/// Result of looking up a single log for the detail view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogLookup {
    Found {
        captain_name: String,
        ship_name: String,
        log: DerivedLogRecord,
    },
    CaptainNotFound,
    LogNotFound,
}

/// Trait ensuring the store and the view session expose the same operations.
/// Adding a method here forces both implementations to add it.
pub trait LogbookOperations {
    fn read_all(&self) -> Vec<CaptainEntry>;
    fn get_log(&self, captain_name: &str, log_id: &str) -> LogLookup;
    fn add_log(&mut self, captain_name: &str, new_log: LogRecord) -> LogbookResult<AddOutcome>;
    fn update_log(
        &mut self,
        captain_name: &str,
        updated_log: LogRecord,
    ) -> LogbookResult<UpdateOutcome>;
    fn remove_log(&mut self, captain_name: &str, log_id: &str) -> LogbookResult<RemoveOutcome>;
}
