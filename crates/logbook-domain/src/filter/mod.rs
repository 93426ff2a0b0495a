//! Log filtering functionality.
//!
//! Provides the per-log and per-entry predicates and the filter settings
//! struct consumed by the query pipeline.

pub mod log_filter;
pub mod log_filters;

pub use log_filter::{CaptainSelection, LogFilter, MistakeFilter};
pub use log_filters::LogFilters;
