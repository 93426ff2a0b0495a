use crate::cli::{AddArgs, ListArgs, UpdateArgs};
use crate::context::CliContext;
use crate::output;
use chrono::NaiveDate;
use logbook_core::LogbookError;
use logbook_domain::{
    highlight, LogFilters, LogLookup, LogRecord, LogbookOperations, RemoveOutcome,
    UpdateOutcome,
};

pub fn handle_list(ctx: &mut CliContext, args: ListArgs) -> anyhow::Result<()> {
    let mut filters = LogFilters::new().with_mistakes(args.mistakes_yes, args.mistakes_no);
    if let Some(query) = args.query {
        filters = filters.with_query(query);
    }
    if let Some(captain) = args.captain {
        filters = filters.with_captain(captain);
    }

    let params = ctx.view_params(filters, args.sort.as_deref(), args.order.as_deref())?;
    ctx.session.set_params(params);
    let view = ctx.session.view().to_vec();
    output::output_list(view)
}

pub fn handle_get(
    ctx: &CliContext,
    captain: &str,
    id: &str,
    highlight_query: Option<&str>,
) -> anyhow::Result<()> {
    match ctx.session.get_log(captain, id) {
        LogLookup::Found {
            captain_name,
            ship_name,
            log,
        } => {
            let mut data = serde_json::json!({
                "captain_name": captain_name,
                "ship_name": ship_name,
                "log": log,
            });
            if let Some(query) = highlight_query {
                data["highlights"] = serde_json::json!({
                    "logTitle": highlight(&log.log.log_title, query),
                    "logContent": highlight(&log.log.log_content, query),
                    "location": highlight(&log.log.location, query),
                });
            }
            output::output_success(data)
        }
        LogLookup::CaptainNotFound => output::output_error(&captain_not_found(captain)),
        LogLookup::LogNotFound => output::output_error(&log_not_found(captain, id)),
    }
}

pub fn handle_add(ctx: &mut CliContext, args: AddArgs) -> anyhow::Result<()> {
    let mut log = match &args.date {
        Some(d) => LogRecord::new(args.title, parse_date(d).map_err(|e| anyhow::anyhow!(e))?),
        None => LogRecord::dated_today(args.title),
    };
    if let Some(content) = args.content {
        log.update_content(content);
    }
    if let Some(location) = args.location {
        log.update_location(location);
    }
    log.set_mistakes(args.mistakes);

    let outcome = ctx.session.add_log(&args.captain, log.clone())?;
    output::output_success(serde_json::json!({
        "outcome": outcome,
        "captain_name": args.captain,
        "log": log,
    }))
}

pub fn handle_update(ctx: &mut CliContext, args: UpdateArgs) -> anyhow::Result<()> {
    let mut log = match ctx.session.get_log(&args.captain, &args.id) {
        LogLookup::Found { log, .. } => log.log,
        LogLookup::CaptainNotFound => return output::output_error(&captain_not_found(&args.captain)),
        LogLookup::LogNotFound => {
            return output::output_error(&log_not_found(&args.captain, &args.id))
        }
    };

    if let Some(title) = args.title {
        log.update_title(title);
    }
    if let Some(content) = args.content {
        log.update_content(content);
    }
    if let Some(location) = args.location {
        log.update_location(location);
    }
    if let Some(d) = &args.date {
        log.update_date(parse_date(d).map_err(|e| anyhow::anyhow!(e))?);
    }
    if let Some(mistakes) = args.mistakes {
        log.set_mistakes(mistakes);
    }

    match ctx.session.update_log(&args.captain, log.clone())? {
        UpdateOutcome::Updated => output::output_success(serde_json::json!({
            "captain_name": args.captain,
            "log": log,
        })),
        UpdateOutcome::CaptainNotFound => output::output_error(&captain_not_found(&args.captain)),
        UpdateOutcome::LogNotFound => output::output_error(&log_not_found(&args.captain, &args.id)),
    }
}

pub fn handle_remove(ctx: &mut CliContext, captain: &str, id: &str) -> anyhow::Result<()> {
    match ctx.session.remove_log(captain, id)? {
        RemoveOutcome::Removed => output::output_success(serde_json::json!({
            "captain_name": captain,
            "removed": id,
        })),
        RemoveOutcome::CaptainNotFound => output::output_error(&captain_not_found(captain)),
        RemoveOutcome::LogNotFound => output::output_error(&log_not_found(captain, id)),
    }
}

fn captain_not_found(captain: &str) -> String {
    LogbookError::NotFound(format!("captain {}", captain)).to_string()
}

fn log_not_found(captain: &str, id: &str) -> String {
    LogbookError::NotFound(format!("log {} (captain {})", id, captain)).to_string()
}

fn parse_date(s: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|_| format!("Invalid date '{}'. Expected YYYY-MM-DD (e.g., 2024-03-01)", s))
}
