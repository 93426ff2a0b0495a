use crate::store::atomic_writer::AtomicWriter;
use crate::traits::StorageBackend;
use chrono::{DateTime, Utc};
use logbook_core::{LogbookError, LogbookResult};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

const FORMAT_VERSION: u32 = 1;

/// On-disk layout: every key's value sits under `values`, stored as JSON
/// when the value parses as JSON and as a plain string otherwise.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonEnvelope {
    pub version: u32,
    #[serde(default)]
    pub saved_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub values: BTreeMap<String, Value>,
}

impl JsonEnvelope {
    pub fn empty() -> Self {
        Self {
            version: FORMAT_VERSION,
            saved_at: None,
            values: BTreeMap::new(),
        }
    }

    pub fn to_json_string(&self) -> LogbookResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| LogbookError::Serialization(e.to_string()))
    }
}

enum StoredFile {
    Envelope(JsonEnvelope),
    /// A bare collection array, as exported straight from browser storage.
    Bare(Value),
}

/// File-backed key-value storage.
#[derive(Debug, Clone)]
pub struct JsonFileBackend {
    path: PathBuf,
}

impl JsonFileBackend {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    fn load(&self) -> LogbookResult<Option<StoredFile>> {
        let Some(content) = AtomicWriter::read_optional(&self.path)? else {
            return Ok(None);
        };
        let value: Value = serde_json::from_str(&content)
            .map_err(|e| LogbookError::Serialization(e.to_string()))?;

        if value.is_array() {
            tracing::info!(
                "Detected bare collection at {}; it will be wrapped on next write",
                self.path.display()
            );
            return Ok(Some(StoredFile::Bare(value)));
        }

        let envelope: JsonEnvelope = serde_json::from_value(value)
            .map_err(|e| LogbookError::Serialization(e.to_string()))?;
        if envelope.version != FORMAT_VERSION {
            return Err(LogbookError::Serialization(format!(
                "Unsupported format version: {}",
                envelope.version
            )));
        }
        Ok(Some(StoredFile::Envelope(envelope)))
    }
}

impl StorageBackend for JsonFileBackend {
    fn get(&self, key: &str) -> LogbookResult<Option<String>> {
        let value = match self.load()? {
            None => return Ok(None),
            Some(StoredFile::Bare(value)) => value,
            Some(StoredFile::Envelope(mut envelope)) => match envelope.values.remove(key) {
                Some(value) => value,
                None => return Ok(None),
            },
        };
        match value {
            Value::String(raw) => Ok(Some(raw)),
            other => serde_json::to_string_pretty(&other)
                .map(Some)
                .map_err(|e| LogbookError::Serialization(e.to_string())),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> LogbookResult<()> {
        let mut envelope = match self.load()? {
            Some(StoredFile::Envelope(envelope)) => envelope,
            Some(StoredFile::Bare(_)) | None => JsonEnvelope::empty(),
        };

        let stored: Value =
            serde_json::from_str(value).unwrap_or_else(|_| Value::String(value.to_string()));
        envelope.values.insert(key.to_string(), stored);
        envelope.saved_at = Some(Utc::now());

        let json = envelope.to_json_string()?;
        AtomicWriter::write_atomic(&self.path, json.as_bytes())?;

        tracing::info!("Saved {} bytes to {}", json.len(), self.path.display());
        Ok(())
    }
}
