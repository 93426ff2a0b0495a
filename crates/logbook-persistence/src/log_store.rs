//! The captain collection store.
//!
//! `LogStore` owns an injected [`StorageBackend`] and the key the collection
//! lives under. Construct it once at startup and hand it to whoever needs
//! it. Every mutation is a full read-modify-write of the collection.

use logbook_core::{LogbookResult, DEFAULT_STORAGE_KEY};
use logbook_domain::commands::{AddLog, Command, CommandOutcome, RemoveLog, UpdateLog};
use logbook_domain::{
    find_log, seed_collection, AddOutcome, CaptainEntry, LogLookup, LogRecord, LogbookOperations,
    RemoveOutcome, UpdateOutcome,
};

use crate::serialization::JsonSerializer;
use crate::traits::{Serializer, StorageBackend};

pub struct LogStore<B: StorageBackend> {
    backend: B,
    key: String,
    serializer: JsonSerializer,
}

impl<B: StorageBackend> LogStore<B> {
    pub fn new(backend: B) -> Self {
        Self::with_key(backend, DEFAULT_STORAGE_KEY)
    }

    pub fn with_key(backend: B, key: impl Into<String>) -> Self {
        Self {
            backend,
            key: key.into(),
            serializer: JsonSerializer,
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Write the seed collection if nothing is stored under the key yet.
    ///
    /// Returns whether the seed was written. Existing data, readable or
    /// not, is left untouched.
    pub fn initialize(&mut self) -> LogbookResult<bool> {
        match self.backend.get(&self.key) {
            Ok(Some(_)) => Ok(false),
            Ok(None) => {
                let seed = seed_collection();
                self.persist(&seed)?;
                tracing::info!(
                    key = %self.key,
                    entries = seed.len(),
                    "Initialized logbook with seed collection"
                );
                Ok(true)
            }
            Err(e) => {
                tracing::warn!(key = %self.key, error = %e, "Could not check stored logbook; leaving it untouched");
                Ok(false)
            }
        }
    }

    fn load(&self) -> LogbookResult<Option<Vec<CaptainEntry>>> {
        match self.backend.get(&self.key)? {
            Some(raw) => self.serializer.deserialize(&raw).map(Some),
            None => Ok(None),
        }
    }

    fn persist(&mut self, entries: &[CaptainEntry]) -> LogbookResult<()> {
        let raw = self.serializer.serialize(&entries.to_vec())?;
        self.backend.set(&self.key, &raw)?;
        tracing::debug!(key = %self.key, bytes = raw.len(), "Persisted logbook");
        Ok(())
    }

    /// Read the collection, run `command` on it, and persist only if it changed something.
    ///
    /// Unlike [`LogbookOperations::read_all`] this does not fail soft: stored
    /// data that cannot be read is an error and nothing is written over it.
    pub fn run<C: Command>(&mut self, command: C) -> LogbookResult<C::Outcome> {
        let mut entries = match self.load() {
            Ok(Some(entries)) => entries,
            Ok(None) => Vec::new(),
            Err(e) => {
                tracing::warn!(key = %self.key, error = %e, "Stored logbook is unreadable; refusing to {}", command.description());
                return Err(e);
            }
        };
        let outcome = command.execute(&mut entries);
        if outcome.changed() {
            self.persist(&entries)?;
            tracing::debug!("{}", command.description());
        } else {
            tracing::warn!(?outcome, "{} had no target; nothing written", command.description());
        }
        Ok(outcome)
    }
}

impl<B: StorageBackend> LogbookOperations for LogStore<B> {
    /// Absent or unreadable data reads as an empty collection.
    fn read_all(&self) -> Vec<CaptainEntry> {
        match self.load() {
            Ok(Some(entries)) => entries,
            Ok(None) => Vec::new(),
            Err(e) => {
                tracing::warn!(key = %self.key, error = %e, "Stored logbook is unreadable; using an empty collection");
                Vec::new()
            }
        }
    }

    fn get_log(&self, captain_name: &str, log_id: &str) -> LogLookup {
        find_log(&self.read_all(), captain_name, log_id)
    }

    fn add_log(&mut self, captain_name: &str, new_log: LogRecord) -> LogbookResult<AddOutcome> {
        self.run(AddLog {
            captain_name: captain_name.to_string(),
            log: new_log,
        })
    }

    fn update_log(
        &mut self,
        captain_name: &str,
        updated_log: LogRecord,
    ) -> LogbookResult<UpdateOutcome> {
        self.run(UpdateLog {
            captain_name: captain_name.to_string(),
            log: updated_log,
        })
    }

    fn remove_log(&mut self, captain_name: &str, log_id: &str) -> LogbookResult<RemoveOutcome> {
        self.run(RemoveLog {
            captain_name: captain_name.to_string(),
            log_id: log_id.to_string(),
        })
    }
}
