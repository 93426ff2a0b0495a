use crate::error::LogbookError;

pub type LogbookResult<T> = Result<T, LogbookError>;
