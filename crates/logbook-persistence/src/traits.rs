use logbook_core::LogbookResult;

/// Client-side key-value storage holding serialized blobs.
///
/// Implementations handle different backends (file, memory). The log store
/// only ever reads and writes whole values; there are no partial writes.
#[cfg_attr(test, mockall::automock)]
pub trait StorageBackend {
    /// Read the value stored under `key`, or `None` if the key is absent.
    fn get(&self, key: &str) -> LogbookResult<Option<String>>;

    /// Replace the value stored under `key`.
    fn set(&mut self, key: &str, value: &str) -> LogbookResult<()>;
}

/// Trait for serialization/deserialization strategies.
pub trait Serializer<T> {
    fn serialize(&self, data: &T) -> LogbookResult<String>;

    fn deserialize(&self, raw: &str) -> LogbookResult<T>;
}
