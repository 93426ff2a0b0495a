pub mod captain;
pub mod commands;
pub mod date;
pub mod derive;
pub mod filter;
pub mod log_record;
pub mod operations;
pub mod query;
pub mod search;
pub mod seed;
pub mod sort;

pub use captain::{
    captain_names, find_entry, last_crisis_dates, normalize_captain_name, CaptainEntry,
};
pub use date::StoredDate;
pub use derive::{days_since_last_crisis, derive_collection, DerivedCaptainEntry, DerivedLogRecord};
pub use filter::{CaptainSelection, LogFilters, MistakeFilter};
pub use log_record::{LogId, LogRecord};
pub use operations::{AddOutcome, LogLookup, LogbookOperations, RemoveOutcome, UpdateOutcome};
pub use query::{apply_filters, build_view, find_log, sort_entries, ViewParams};
pub use search::{highlight, CompositeSearcher, HighlightSegment};
pub use seed::seed_collection;
pub use sort::{SortField, SortOrder};
