//! Built-in collection written on first start.

use chrono::NaiveDate;

use crate::{CaptainEntry, LogRecord, StoredDate};

struct SeedLog {
    id: &'static str,
    title: &'static str,
    content: &'static str,
    location: &'static str,
    date: (i32, u32, u32),
    mistakes: bool,
}

struct SeedCaptain {
    captain_name: &'static str,
    ship_name: &'static str,
    last_crisis_date: Option<(i32, u32, u32)>,
    logs: &'static [SeedLog],
}

const SEED: &[SeedCaptain] = &[
    SeedCaptain {
        captain_name: "James T. Kirk",
        ship_name: "USS Enterprise",
        last_crisis_date: Some((2266, 1, 12)),
        logs: &[
            SeedLog {
                id: "kirk-1",
                title: "Tribble infestation",
                content: "Grain stores compromised. Tribbles multiplying beyond containment.",
                location: "Space Station K-7",
                date: (2266, 1, 20),
                mistakes: true,
            },
            SeedLog {
                id: "kirk-2",
                title: "Shore leave",
                content: "Crew reports the planet makes whatever they imagine real.",
                location: "Omicron Delta",
                date: (2266, 2, 3),
                mistakes: false,
            },
        ],
    },
    SeedCaptain {
        captain_name: "Jean-Luc Picard",
        ship_name: "USS Enterprise-D",
        last_crisis_date: Some((2366, 6, 15)),
        logs: &[
            SeedLog {
                id: "picard-1",
                title: "First contact protocols",
                content: "Diplomatic talks proceeding. Tea consumption nominal.",
                location: "Ready room",
                date: (2366, 7, 1),
                mistakes: false,
            },
            SeedLog {
                id: "picard-2",
                title: "Borg incursion",
                content: "The collective has crossed into Federation space.",
                location: "Sector 001",
                date: (2366, 6, 20),
                mistakes: true,
            },
        ],
    },
    SeedCaptain {
        captain_name: "Kathryn Janeway",
        ship_name: "USS Voyager",
        last_crisis_date: Some((2371, 2, 1)),
        logs: &[
            SeedLog {
                id: "janeway-1",
                title: "Coffee rationing",
                content: "Replicator rations redirected. Morale uncertain.",
                location: "Delta Quadrant",
                date: (2371, 3, 1),
                mistakes: false,
            },
            SeedLog {
                id: "janeway-2",
                title: "Caretaker array",
                content: "Destroyed the array. We are a long way from home.",
                location: "Badlands",
                date: (2371, 3, 10),
                mistakes: true,
            },
        ],
    },
    SeedCaptain {
        captain_name: "Benjamin Sisko",
        ship_name: "USS Defiant",
        last_crisis_date: None,
        logs: &[SeedLog {
            id: "sisko-1",
            title: "Baseball practice",
            content: "Holosuite booked. The Niners need work on their fielding.",
            location: "Deep Space Nine",
            date: (2373, 4, 18),
            mistakes: false,
        }],
    },
];

fn ymd((y, m, d): (i32, u32, u32)) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

/// The fixed collection persisted when no stored collection exists.
pub fn seed_collection() -> Vec<CaptainEntry> {
    SEED.iter()
        .map(|captain| CaptainEntry {
            captain_name: captain.captain_name.to_string(),
            ship_name: captain.ship_name.to_string(),
            last_crisis_date: captain.last_crisis_date.map(|d| StoredDate::from(ymd(d))),
            logs: captain
                .logs
                .iter()
                .map(|log| LogRecord {
                    id: log.id.to_string(),
                    log_title: log.title.to_string(),
                    log_content: log.content.to_string(),
                    location: log.location.to_string(),
                    date: ymd(log.date).into(),
                    mistakes_were_made_today: log.mistakes,
                })
                .collect(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_seed_dates_are_valid() {
        for entry in seed_collection() {
            for log in &entry.logs {
                let date = log.date.valid();
                assert!(date.is_some_and(|d| d != NaiveDate::default()), "bad date in {}", log.id);
            }
        }
    }

    #[test]
    fn test_seed_keys_are_unique() {
        let seed = seed_collection();
        let names: HashSet<_> = seed.iter().map(|e| &e.captain_name).collect();
        assert_eq!(names.len(), seed.len());

        for entry in &seed {
            let ids: HashSet<_> = entry.log_ids().collect();
            assert_eq!(ids.len(), entry.logs.len());
            assert!(!entry.logs.is_empty());
        }
    }

    #[test]
    fn test_seed_is_deterministic() {
        assert_eq!(seed_collection(), seed_collection());
    }
}
