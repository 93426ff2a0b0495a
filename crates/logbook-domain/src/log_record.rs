use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::date::StoredDate;

/// Log ids are unique within their owning captain entry only.
pub type LogId = String;

/// Fields missing from a stored log read as empty, like the browser app
/// treats them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LogRecord {
    pub id: LogId,
    pub log_title: String,
    pub log_content: String,
    pub location: String,
    pub date: StoredDate,
    pub mistakes_were_made_today: bool,
}

impl LogRecord {
    /// Create a log with a freshly generated id and empty body.
    pub fn new(log_title: String, date: NaiveDate) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            log_title,
            log_content: String::new(),
            location: String::new(),
            date: date.into(),
            mistakes_were_made_today: false,
        }
    }

    /// Create a log dated today (local time).
    pub fn dated_today(log_title: String) -> Self {
        Self::new(log_title, Local::now().date_naive())
    }

    pub fn update_title(&mut self, log_title: String) {
        self.log_title = log_title;
    }

    pub fn update_content(&mut self, log_content: String) {
        self.log_content = log_content;
    }

    pub fn update_location(&mut self, location: String) {
        self.location = location;
    }

    pub fn update_date(&mut self, date: NaiveDate) {
        self.date = date.into();
    }

    pub fn set_mistakes(&mut self, mistakes_were_made_today: bool) {
        self.mistakes_were_made_today = mistakes_were_made_today;
    }
}
