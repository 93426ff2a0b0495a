use crate::traits::StorageBackend;
use logbook_core::LogbookResult;
use std::collections::HashMap;

/// In-process storage, for tests and embedding.
#[derive(Debug, Clone, Default)]
pub struct MemoryBackend {
    values: HashMap<String, String>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with `value` already stored under `key`.
    pub fn with_value(key: &str, value: &str) -> Self {
        let mut backend = Self::new();
        backend.values.insert(key.to_string(), value.to_string());
        backend
    }

    pub fn raw(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }
}

impl StorageBackend for MemoryBackend {
    fn get(&self, key: &str) -> LogbookResult<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> LogbookResult<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
