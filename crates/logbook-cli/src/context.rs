use logbook_core::{AppConfig, LogbookResult};
use logbook_domain::{LogFilters, SortField, SortOrder, ViewParams};
use logbook_persistence::{JsonFileBackend, LogStore, LogbookSession};
use std::path::{Path, PathBuf};

pub struct CliContext {
    pub session: LogbookSession<JsonFileBackend>,
    pub config: AppConfig,
    pub file: PathBuf,
    /// Whether opening the file wrote the seed collection.
    pub seeded: bool,
}

impl CliContext {
    pub fn open(file: &Path, config: AppConfig) -> LogbookResult<Self> {
        let backend = JsonFileBackend::new(file);
        let mut store = LogStore::with_key(backend, config.effective_storage_key());
        let seeded = store.initialize()?;

        Ok(Self {
            session: LogbookSession::new(store),
            config,
            file: file.to_path_buf(),
            seeded,
        })
    }

    /// Build view parameters, falling back to the configured sort defaults.
    pub fn view_params(
        &self,
        filters: LogFilters,
        sort: Option<&str>,
        order: Option<&str>,
    ) -> LogbookResult<ViewParams> {
        let field: SortField = sort
            .unwrap_or(self.config.effective_default_sort())
            .parse()?;
        let order: SortOrder = order
            .unwrap_or(self.config.effective_default_order())
            .parse()?;
        Ok(ViewParams::new().with_filters(filters).sorted_by(field, order))
    }
}
