use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "logbook")]
#[command(about = "A captain's logbook", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to logbook data file (or set LOGBOOK_FILE env var)
    #[arg(long, global = true, value_name = "FILE", env = "LOGBOOK_FILE")]
    pub file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Seed the logbook if it is empty
    Init,
    /// List captains and their logs with optional filters and sorting
    List(ListArgs),
    /// Get a single log
    Get {
        #[arg(long)]
        captain: String,
        #[arg(long)]
        id: String,
        /// Mark occurrences of this text in the log's title, content and location
        #[arg(long)]
        highlight: Option<String>,
    },
    /// Add a log for a captain
    Add(AddArgs),
    /// Replace a log with an edited copy
    Update(UpdateArgs),
    /// Remove a log
    Remove {
        #[arg(long)]
        captain: String,
        #[arg(long)]
        id: String,
    },
    /// List captain names and their last crisis dates
    Captains,
    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Args)]
pub struct ListArgs {
    /// Case-insensitive text search over captain, ship, title, content, location
    #[arg(long)]
    pub query: Option<String>,
    /// Captain name, or "all"
    #[arg(long)]
    pub captain: Option<String>,
    /// Keep logs where mistakes were made
    #[arg(long)]
    pub mistakes_yes: bool,
    /// Keep logs where no mistakes were made
    #[arg(long)]
    pub mistakes_no: bool,
    /// none, alphabetical, days-since-last-crisis, log-date
    #[arg(long)]
    pub sort: Option<String>,
    /// asc or desc
    #[arg(long)]
    pub order: Option<String>,
}

#[derive(Args)]
pub struct AddArgs {
    #[arg(long)]
    pub captain: String,
    #[arg(long)]
    pub title: String,
    #[arg(long)]
    pub content: Option<String>,
    #[arg(long)]
    pub location: Option<String>,
    /// YYYY-MM-DD, defaults to today
    #[arg(long)]
    pub date: Option<String>,
    #[arg(long)]
    pub mistakes: bool,
}

#[derive(Args)]
pub struct UpdateArgs {
    #[arg(long)]
    pub captain: String,
    #[arg(long)]
    pub id: String,
    #[arg(long)]
    pub title: Option<String>,
    #[arg(long)]
    pub content: Option<String>,
    #[arg(long)]
    pub location: Option<String>,
    #[arg(long)]
    pub date: Option<String>,
    #[arg(long)]
    pub mistakes: Option<bool>,
}
