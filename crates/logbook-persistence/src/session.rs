use logbook_core::LogbookResult;
use logbook_domain::{
    build_view, AddOutcome, CaptainEntry, DerivedCaptainEntry, LogLookup, LogRecord,
    LogbookOperations, RemoveOutcome, UpdateOutcome, ViewParams,
};

use crate::log_store::LogStore;
use crate::traits::StorageBackend;

/// A store paired with the current view parameters and a cached view.
///
/// The view is rebuilt lazily after any mutation, parameter change or
/// explicit refresh.
pub struct LogbookSession<B: StorageBackend> {
    store: LogStore<B>,
    params: ViewParams,
    cache: Option<Vec<DerivedCaptainEntry>>,
}

impl<B: StorageBackend> LogbookSession<B> {
    pub fn new(store: LogStore<B>) -> Self {
        Self::with_params(store, ViewParams::default())
    }

    pub fn with_params(store: LogStore<B>, params: ViewParams) -> Self {
        Self {
            store,
            params,
            cache: None,
        }
    }

    pub fn store(&self) -> &LogStore<B> {
        &self.store
    }

    pub fn params(&self) -> &ViewParams {
        &self.params
    }

    pub fn set_params(&mut self, params: ViewParams) {
        if params != self.params {
            self.params = params;
            self.invalidate();
        }
    }

    /// Drop the cached view so the next `view()` reads storage again.
    pub fn refresh(&mut self) {
        self.invalidate();
    }

    pub fn is_cached(&self) -> bool {
        self.cache.is_some()
    }

    pub fn view(&mut self) -> &[DerivedCaptainEntry] {
        let params = &self.params;
        let store = &self.store;
        self.cache.get_or_insert_with(|| {
            tracing::debug!("Rebuilding log view");
            build_view(&store.read_all(), params)
        })
    }

    fn invalidate(&mut self) {
        self.cache = None;
    }
}

impl<B: StorageBackend> LogbookOperations for LogbookSession<B> {
    fn read_all(&self) -> Vec<CaptainEntry> {
        self.store.read_all()
    }

    fn get_log(&self, captain_name: &str, log_id: &str) -> LogLookup {
        self.store.get_log(captain_name, log_id)
    }

    fn add_log(&mut self, captain_name: &str, new_log: LogRecord) -> LogbookResult<AddOutcome> {
        let outcome = self.store.add_log(captain_name, new_log)?;
        self.invalidate();
        Ok(outcome)
    }

    fn update_log(
        &mut self,
        captain_name: &str,
        updated_log: LogRecord,
    ) -> LogbookResult<UpdateOutcome> {
        let outcome = self.store.update_log(captain_name, updated_log)?;
        if outcome.is_applied() {
            self.invalidate();
        }
        Ok(outcome)
    }

    fn remove_log(&mut self, captain_name: &str, log_id: &str) -> LogbookResult<RemoveOutcome> {
        let outcome = self.store.remove_log(captain_name, log_id)?;
        if outcome.is_applied() {
            self.invalidate();
        }
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryBackend;
    use chrono::NaiveDate;
    use logbook_domain::{LogFilters, SortField, SortOrder};

    fn seeded_session() -> LogbookSession<MemoryBackend> {
        let mut store = LogStore::new(MemoryBackend::new());
        store.initialize().unwrap();
        LogbookSession::new(store)
    }

    #[test]
    fn test_view_is_cached_until_mutation() {
        let mut session = seeded_session();
        assert!(!session.is_cached());

        let before = session.view().len();
        assert!(session.is_cached());

        let log = LogRecord::new(
            "First day".to_string(),
            NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
        );
        session.add_log("Pike", log).unwrap();
        assert!(!session.is_cached());
        assert_eq!(session.view().len(), before + 1);
    }

    #[test]
    fn test_missing_target_keeps_cache() {
        let mut session = seeded_session();
        session.view();

        assert_eq!(
            session.remove_log("Nobody", "x").unwrap(),
            RemoveOutcome::CaptainNotFound
        );
        assert!(session.is_cached());
    }

    #[test]
    fn test_set_params_rebuilds_view() {
        let mut session = seeded_session();
        session.view();

        session.set_params(
            ViewParams::new()
                .with_filters(LogFilters::new().with_captain("James T. Kirk"))
                .sorted_by(SortField::Alphabetical, SortOrder::Descending),
        );
        assert!(!session.is_cached());

        let view = session.view();
        assert_eq!(view.len(), 1);
        assert_eq!(view[0].captain_name, "James T. Kirk");
    }

    #[test]
    fn test_same_params_keep_cache() {
        let mut session = seeded_session();
        session.view();
        session.set_params(ViewParams::default());
        assert!(session.is_cached());

        session.refresh();
        assert!(!session.is_cached());
    }
}
