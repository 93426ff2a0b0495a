use crate::CaptainEntry;

pub mod log_commands;

pub use log_commands::*;

/// Trait for domain commands that mutate the captain collection.
pub trait Command {
    type Outcome: CommandOutcome;

    /// Execute this command against the in-memory collection.
    fn execute(&self, entries: &mut Vec<CaptainEntry>) -> Self::Outcome;

    /// Human-readable description of what this command does
    fn description(&self) -> String;
}

/// Tells the caller whether executing a command changed the collection,
/// and therefore whether it needs to be persisted.
pub trait CommandOutcome: std::fmt::Debug {
    fn changed(&self) -> bool;
}
