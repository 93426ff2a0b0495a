mod cli;
mod context;
mod handlers;
mod output;

use clap::{CommandFactory, Parser};
use cli::{Cli, Commands};
use context::CliContext;
use logbook_core::AppConfig;
use std::path::PathBuf;

fn main() -> anyhow::Result<()> {
    if let Ok(log_path) = std::env::var("LOGBOOK_DEBUG_LOG") {
        let log_file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)?;

        tracing_subscriber::fmt()
            .with_writer(log_file)
            .with_max_level(tracing::Level::DEBUG)
            .with_target(true)
            .with_file(true)
            .with_line_number(true)
            .with_ansi(false)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_max_level(tracing::Level::WARN)
            .init();
    }

    let cli = Cli::parse();

    match cli.command {
        Commands::Completions { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "logbook", &mut std::io::stdout());
        }
        Commands::Init => {
            let ctx = open_context(cli.file)?;
            handlers::captain::handle_init(&ctx)?;
        }
        Commands::Captains => {
            let ctx = open_context(cli.file)?;
            handlers::captain::handle_captains(&ctx)?;
        }
        Commands::List(args) => {
            let mut ctx = open_context(cli.file)?;
            handlers::log::handle_list(&mut ctx, args)?;
        }
        Commands::Get {
            captain,
            id,
            highlight,
        } => {
            let ctx = open_context(cli.file)?;
            handlers::log::handle_get(&ctx, &captain, &id, highlight.as_deref())?;
        }
        Commands::Add(args) => {
            let mut ctx = open_context(cli.file)?;
            handlers::log::handle_add(&mut ctx, args)?;
        }
        Commands::Update(args) => {
            let mut ctx = open_context(cli.file)?;
            handlers::log::handle_update(&mut ctx, args)?;
        }
        Commands::Remove { captain, id } => {
            let mut ctx = open_context(cli.file)?;
            handlers::log::handle_remove(&mut ctx, &captain, &id)?;
        }
    }

    Ok(())
}

/// Open the data file named on the command line, else the configured one.
fn open_context(file: Option<PathBuf>) -> anyhow::Result<CliContext> {
    let config = AppConfig::load();
    let file_path = file
        .or_else(|| config.effective_data_file())
        .ok_or_else(|| anyhow::anyhow!("--file is required when no data directory is available"))?;

    tracing::debug!("Opening logbook at {}", file_path.display());
    Ok(CliContext::open(&file_path, config)?)
}
