//! Log view pipeline: derive, filter, sort.
//!
//! Every function here is pure over the collection it is given. Storage and
//! presentation layers call [`build_view`] with explicit [`ViewParams`].

use crate::filter::{LogFilter, LogFilters};
use crate::search::{CompositeSearcher, LogSearcher};
use crate::sort::{get_sorter_for_field, OrderedSorter};
use crate::{
    derive_collection, find_entry, CaptainEntry, DerivedCaptainEntry, DerivedLogRecord, LogLookup,
    SortField, SortOrder,
};

/// Everything needed to turn the stored collection into a displayed view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewParams {
    pub filters: LogFilters,
    pub sort_field: SortField,
    pub sort_order: SortOrder,
}

impl ViewParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_filters(mut self, filters: LogFilters) -> Self {
        self.filters = filters;
        self
    }

    pub fn sorted_by(mut self, field: SortField, order: SortOrder) -> Self {
        self.sort_field = field;
        self.sort_order = order;
        self
    }
}

/// Apply text, captain, and mistake filters, in that order.
///
/// Entries left without logs after the text or mistake filter are dropped.
pub fn apply_filters(
    entries: Vec<DerivedCaptainEntry>,
    filters: &LogFilters,
) -> Vec<DerivedCaptainEntry> {
    let searcher = filters
        .normalized_query()
        .map(CompositeSearcher::all)
        .unwrap_or_default();

    entries
        .into_iter()
        .map(|mut entry| {
            let logs = std::mem::take(&mut entry.logs);
            entry.logs = logs
                .into_iter()
                .filter(|l| searcher.matches(&entry, &l.log))
                .collect();
            entry
        })
        .filter(|entry| !entry.logs.is_empty() && filters.captain.matches(&entry.captain_name))
        .filter_map(|mut entry| {
            if !filters.mistakes.is_active() {
                return Some(entry);
            }
            entry.logs.retain(|l| filters.mistakes.matches(l));
            (!entry.logs.is_empty()).then_some(entry)
        })
        .collect()
}

/// Stable sort of entries; `SortField::Unsorted` leaves the order untouched.
pub fn sort_entries(entries: &mut [DerivedCaptainEntry], field: SortField, order: SortOrder) {
    if let Some(sorter) = get_sorter_for_field(field) {
        OrderedSorter::new(sorter, order).sort(entries);
    }
}

/// Run the whole pipeline over a stored collection.
pub fn build_view(entries: &[CaptainEntry], params: &ViewParams) -> Vec<DerivedCaptainEntry> {
    let mut view = apply_filters(derive_collection(entries), &params.filters);
    sort_entries(&mut view, params.sort_field, params.sort_order);
    tracing::debug!(
        entries = view.len(),
        filtered = params.filters.has_active_filters(),
        logs = view.iter().map(|e| e.logs.len()).sum::<usize>(),
        "Built log view"
    );
    view
}

/// Look up a single log with its derived fields.
pub fn find_log(entries: &[CaptainEntry], captain_name: &str, log_id: &str) -> LogLookup {
    let Some(entry) = find_entry(entries, captain_name) else {
        return LogLookup::CaptainNotFound;
    };
    match entry.find_log(log_id) {
        Some(log) => LogLookup::Found {
            captain_name: entry.captain_name.clone(),
            ship_name: entry.ship_name.clone(),
            log: DerivedLogRecord {
                log: log.clone(),
                days_since_last_crisis: crate::days_since_last_crisis(
                    entry.last_crisis_date.as_ref(),
                    &log.date,
                ),
            },
        },
        None => LogLookup::LogNotFound,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CaptainSelection, LogRecord};
    use chrono::NaiveDate;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn log(id: &str, title: &str, location: &str, d: &str, mistakes: bool) -> LogRecord {
        let mut log = LogRecord::new(title.to_string(), date(d));
        log.id = id.to_string();
        log.update_location(location.to_string());
        log.set_mistakes(mistakes);
        log
    }

    fn fleet() -> Vec<CaptainEntry> {
        let mut janeway = CaptainEntry::new(
            "Janeway".to_string(),
            "Voyager".to_string(),
            Some(date("2024-02-01")),
        );
        janeway.logs = vec![
            log("j1", "Coffee shortage", "Mess hall", "2024-03-01", false),
            log("j2", "Borg negotiations", "Delta Quadrant", "2024-03-10", true),
        ];

        let mut picard = CaptainEntry::new(
            "Picard".to_string(),
            "Enterprise-D".to_string(),
            Some(date("2024-01-01")),
        );
        picard.logs = vec![
            log("p1", "Tea, Earl Grey, hot", "Ready room", "2024-01-05", false),
            log("p2", "Borg again", "Sector 001", "2024-02-20", true),
        ];

        let mut sisko = CaptainEntry::new("Sisko".to_string(), "Defiant".to_string(), None);
        sisko.logs = vec![log("s1", "Baseball", "Holosuite", "2024-01-20", false)];

        let empty = CaptainEntry::new("Archer".to_string(), "NX-01".to_string(), None);

        vec![janeway, picard, sisko, empty]
    }

    fn names(view: &[DerivedCaptainEntry]) -> Vec<&str> {
        view.iter().map(|e| e.captain_name.as_str()).collect()
    }

    fn ids(view: &[DerivedCaptainEntry]) -> Vec<&str> {
        view.iter()
            .flat_map(|e| e.logs.iter().map(|l| l.log.id.as_str()))
            .collect()
    }

    #[test]
    fn test_default_view_drops_empty_entries_and_keeps_order() {
        let view = build_view(&fleet(), &ViewParams::default());
        assert_eq!(names(&view), vec!["Janeway", "Picard", "Sisko"]);
        assert_eq!(ids(&view), vec!["j1", "j2", "p1", "p2", "s1"]);
    }

    #[test]
    fn test_janeway_scenario() {
        let params = ViewParams::new()
            .with_filters(LogFilters::new().with_query("janeway"))
            .sorted_by(SortField::LogDate, SortOrder::Ascending);
        let view = build_view(&fleet(), &params);

        assert_eq!(names(&view), vec!["Janeway"]);
        let days: Vec<Option<i64>> = view[0].logs.iter().map(|l| l.days_since_last_crisis).collect();
        assert_eq!(days, vec![Some(29), Some(38)]);
        assert_eq!(view[0].logs[0].log.date.valid(), Some(date("2024-03-01")));
    }

    #[test]
    fn test_text_filter_narrows_logs_within_entry() {
        let view = build_view(
            &fleet(),
            &ViewParams::new().with_filters(LogFilters::new().with_query("BORG")),
        );
        assert_eq!(ids(&view), vec!["j2", "p2"]);
    }

    #[test]
    fn test_text_filter_matches_ship_and_location() {
        let filters = LogFilters::new().with_query("defiant");
        assert_eq!(ids(&apply_filters(derive_collection(&fleet()), &filters)), vec!["s1"]);

        let filters = LogFilters::new().with_query("ready room");
        assert_eq!(ids(&apply_filters(derive_collection(&fleet()), &filters)), vec!["p1"]);
    }

    #[test]
    fn test_captain_filter() {
        let filters = LogFilters::new().with_captain("Picard");
        let view = apply_filters(derive_collection(&fleet()), &filters);
        assert_eq!(names(&view), vec!["Picard"]);

        let filters = LogFilters::new().with_captain("picard");
        assert!(apply_filters(derive_collection(&fleet()), &filters).is_empty());
    }

    #[test]
    fn test_mistake_filter_drops_emptied_entries() {
        let filters = LogFilters::new().with_mistakes(true, false);
        let view = apply_filters(derive_collection(&fleet()), &filters);
        assert_eq!(names(&view), vec!["Janeway", "Picard"]);
        assert_eq!(ids(&view), vec!["j2", "p2"]);

        let filters = LogFilters::new().with_mistakes(false, true);
        let view = apply_filters(derive_collection(&fleet()), &filters);
        assert_eq!(ids(&view), vec!["j1", "p1", "s1"]);
    }

    #[test]
    fn test_both_mistake_flags_match_unfiltered() {
        let both = apply_filters(
            derive_collection(&fleet()),
            &LogFilters::new().with_mistakes(true, true),
        );
        let none = apply_filters(derive_collection(&fleet()), &LogFilters::new());
        assert_eq!(both, none);
    }

    #[test]
    fn test_every_result_satisfies_all_predicates() {
        let queries = [None, Some("borg"), Some("o"), Some("xyz"), Some("VOYAGER")];
        let captains = ["all", "Janeway", "Picard", "Sisko", "Archer", "Nobody"];
        let flags = [(false, false), (true, false), (false, true), (true, true)];
        let source = fleet();

        for query in queries {
            for captain in captains {
                for (yes, no) in flags {
                    let mut filters = LogFilters::new()
                        .with_captain(captain)
                        .with_mistakes(yes, no);
                    filters.search_query = query.map(str::to_string);
                    let view = apply_filters(derive_collection(&source), &filters);

                    for entry in &view {
                        assert!(!entry.logs.is_empty());
                        assert!(CaptainSelection::from(captain).matches(&entry.captain_name));
                        for l in &entry.logs {
                            if let Some(q) = query.map(str::to_lowercase) {
                                let haystack = [
                                    &entry.captain_name,
                                    &entry.ship_name,
                                    &l.log.log_title,
                                    &l.log.log_content,
                                    &l.log.location,
                                ];
                                assert!(haystack.iter().any(|f| f.to_lowercase().contains(&q)));
                            }
                            if yes != no {
                                assert_eq!(l.log.mistakes_were_made_today, yes);
                            }
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn test_unsorted_reproduces_filter_order() {
        let filters = LogFilters::new().with_query("o");
        let filtered = apply_filters(derive_collection(&fleet()), &filters);
        let mut sorted = filtered.clone();
        sort_entries(&mut sorted, SortField::Unsorted, SortOrder::Descending);
        assert_eq!(sorted, filtered);
    }

    #[test]
    fn test_sort_keys() {
        let source = fleet();
        let by = |field, order| {
            names(&build_view(&source, &ViewParams::new().sorted_by(field, order)))
                .into_iter()
                .map(str::to_string)
                .collect::<Vec<_>>()
        };

        assert_eq!(
            by(SortField::Alphabetical, SortOrder::Descending),
            vec!["Sisko", "Picard", "Janeway"]
        );
        // Minimum days: Sisko 0, Picard 4, Janeway 29.
        assert_eq!(
            by(SortField::DaysSinceLastCrisis, SortOrder::Ascending),
            vec!["Sisko", "Picard", "Janeway"]
        );
        // Earliest log: Picard 01-05, Sisko 01-20, Janeway 03-01.
        assert_eq!(
            by(SortField::LogDate, SortOrder::Ascending),
            vec!["Picard", "Sisko", "Janeway"]
        );
        assert_eq!(
            by(SortField::LogDate, SortOrder::Descending),
            vec!["Janeway", "Sisko", "Picard"]
        );
    }

    #[test]
    fn test_sort_key_uses_only_retained_logs() {
        // Without the filter Picard's earliest log is 01-05; with it only 02-20 remains.
        let params = ViewParams::new()
            .with_filters(LogFilters::new().with_mistakes(true, false))
            .sorted_by(SortField::LogDate, SortOrder::Ascending);
        assert_eq!(names(&build_view(&fleet(), &params)), vec!["Picard", "Janeway"]);
    }

    #[test]
    fn test_build_view_does_not_mutate_source() {
        let source = fleet();
        let before = source.clone();
        let _ = build_view(
            &source,
            &ViewParams::new()
                .with_filters(LogFilters::new().with_query("borg").with_mistakes(true, false))
                .sorted_by(SortField::Alphabetical, SortOrder::Descending),
        );
        assert_eq!(source, before);
    }

    #[test]
    fn test_find_log() {
        let source = fleet();
        match find_log(&source, "Janeway", "j2") {
            LogLookup::Found {
                captain_name,
                ship_name,
                log,
            } => {
                assert_eq!(captain_name, "Janeway");
                assert_eq!(ship_name, "Voyager");
                assert_eq!(log.days_since_last_crisis, Some(38));
            }
            other => panic!("expected found, got {:?}", other),
        }
        assert_eq!(find_log(&source, "Kirk", "j2"), LogLookup::CaptainNotFound);
        assert_eq!(find_log(&source, "Janeway", "p1"), LogLookup::LogNotFound);
    }
}
