use super::{Command, CommandOutcome};
use crate::{AddOutcome, CaptainEntry, LogRecord, RemoveOutcome, UpdateOutcome};

impl CommandOutcome for AddOutcome {
    fn changed(&self) -> bool {
        true
    }
}

impl CommandOutcome for UpdateOutcome {
    fn changed(&self) -> bool {
        self.is_applied()
    }
}

impl CommandOutcome for RemoveOutcome {
    fn changed(&self) -> bool {
        self.is_applied()
    }
}

/// Append a log to a captain's entry, creating the entry if needed.
pub struct AddLog {
    pub captain_name: String,
    pub log: LogRecord,
}

impl Command for AddLog {
    type Outcome = AddOutcome;

    fn execute(&self, entries: &mut Vec<CaptainEntry>) -> AddOutcome {
        match entries
            .iter_mut()
            .find(|e| e.captain_name == self.captain_name)
        {
            Some(entry) => {
                entry.logs.push(self.log.clone());
                AddOutcome::Appended
            }
            None => {
                entries.push(CaptainEntry::with_first_log(
                    self.captain_name.clone(),
                    self.log.clone(),
                ));
                AddOutcome::Created
            }
        }
    }

    fn description(&self) -> String {
        format!(
            "Add log '{}' for captain '{}'",
            self.log.log_title, self.captain_name
        )
    }
}

/// Replace a log in place, keyed by the replacement's id.
pub struct UpdateLog {
    pub captain_name: String,
    pub log: LogRecord,
}

impl Command for UpdateLog {
    type Outcome = UpdateOutcome;

    fn execute(&self, entries: &mut Vec<CaptainEntry>) -> UpdateOutcome {
        let Some(entry) = entries
            .iter_mut()
            .find(|e| e.captain_name == self.captain_name)
        else {
            return UpdateOutcome::CaptainNotFound;
        };
        match entry.logs.iter_mut().find(|l| l.id == self.log.id) {
            Some(slot) => {
                *slot = self.log.clone();
                UpdateOutcome::Updated
            }
            None => UpdateOutcome::LogNotFound,
        }
    }

    fn description(&self) -> String {
        format!(
            "Update log {} for captain '{}'",
            self.log.id, self.captain_name
        )
    }
}

/// Remove a log. The entry is kept even when its last log goes.
pub struct RemoveLog {
    pub captain_name: String,
    pub log_id: String,
}

impl Command for RemoveLog {
    type Outcome = RemoveOutcome;

    fn execute(&self, entries: &mut Vec<CaptainEntry>) -> RemoveOutcome {
        let Some(entry) = entries
            .iter_mut()
            .find(|e| e.captain_name == self.captain_name)
        else {
            return RemoveOutcome::CaptainNotFound;
        };
        let before = entry.logs.len();
        entry.logs.retain(|l| l.id != self.log_id);
        if entry.logs.len() < before {
            RemoveOutcome::Removed
        } else {
            RemoveOutcome::LogNotFound
        }
    }

    fn description(&self) -> String {
        format!(
            "Remove log {} from captain '{}'",
            self.log_id, self.captain_name
        )
    }
}
