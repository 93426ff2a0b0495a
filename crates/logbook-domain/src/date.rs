//! Calendar dates as they appear in stored logbooks.
//!
//! Stored collections come from hand-edited forms and browser exports, so a
//! date field may be blank or unparseable. Such values are kept verbatim
//! instead of failing the whole collection; anything derived from them is
//! undefined for that log only.

use chrono::{DateTime, NaiveDate};
use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoredDate {
    Valid(NaiveDate),
    /// The raw text that failed to parse, written back unchanged.
    Invalid(String),
}

impl StoredDate {
    /// Parse `YYYY-MM-DD`, also accepting a full RFC 3339 timestamp.
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        NaiveDate::parse_from_str(trimmed, DATE_FORMAT)
            .ok()
            .or_else(|| {
                DateTime::parse_from_rfc3339(trimmed)
                    .ok()
                    .map(|dt| dt.date_naive())
            })
            .map(Self::Valid)
            .unwrap_or_else(|| Self::Invalid(raw.to_string()))
    }

    pub fn valid(&self) -> Option<NaiveDate> {
        match self {
            Self::Valid(date) => Some(*date),
            Self::Invalid(_) => None,
        }
    }

    pub fn is_blank(&self) -> bool {
        matches!(self, Self::Invalid(raw) if raw.trim().is_empty())
    }
}

impl Default for StoredDate {
    fn default() -> Self {
        Self::Invalid(String::new())
    }
}

impl From<NaiveDate> for StoredDate {
    fn from(date: NaiveDate) -> Self {
        Self::Valid(date)
    }
}

impl fmt::Display for StoredDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Valid(date) => write!(f, "{}", date.format(DATE_FORMAT)),
            Self::Invalid(raw) => f.write_str(raw),
        }
    }
}

impl Serialize for StoredDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for StoredDate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(StoredDateVisitor)
    }
}

struct StoredDateVisitor;

impl<'de> Visitor<'de> for StoredDateVisitor {
    type Value = StoredDate;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a YYYY-MM-DD date string")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<StoredDate, E> {
        Ok(StoredDate::parse(v))
    }

    fn visit_unit<E: de::Error>(self) -> Result<StoredDate, E> {
        Ok(StoredDate::default())
    }

    fn visit_none<E: de::Error>(self) -> Result<StoredDate, E> {
        Ok(StoredDate::default())
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<StoredDate, E> {
        Ok(StoredDate::Invalid(v.to_string()))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<StoredDate, E> {
        Ok(StoredDate::Invalid(v.to_string()))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<StoredDate, E> {
        Ok(StoredDate::Invalid(v.to_string()))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<StoredDate, E> {
        Ok(StoredDate::Invalid(v.to_string()))
    }
}

/// Optional date where a blank value means "no date", as an empty form field does.
pub fn deserialize_optional<'de, D>(deserializer: D) -> Result<Option<StoredDate>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<StoredDate>::deserialize(deserializer)?.filter(|date| !date.is_blank()))
}
