use crate::traits::Serializer;
use logbook_core::{LogbookError, LogbookResult};

/// Pretty-printed JSON serializer for domain models
pub struct JsonSerializer;

impl<T: serde::Serialize + serde::de::DeserializeOwned> Serializer<T> for JsonSerializer {
    fn serialize(&self, data: &T) -> LogbookResult<String> {
        serde_json::to_string_pretty(data).map_err(|e| LogbookError::Serialization(e.to_string()))
    }

    fn deserialize(&self, raw: &str) -> LogbookResult<T> {
        serde_json::from_str(raw).map_err(|e| LogbookError::Serialization(e.to_string()))
    }
}
