pub mod config;
pub mod error;
pub mod result;

pub use config::{AppConfig, DEFAULT_STORAGE_KEY};
pub use error::LogbookError;
pub use result::LogbookResult;
