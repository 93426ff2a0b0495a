use crate::context::CliContext;
use crate::output;
use logbook_domain::{captain_names, last_crisis_dates, normalize_captain_name, LogbookOperations};

pub fn handle_init(ctx: &CliContext) -> anyhow::Result<()> {
    let entries = ctx.session.read_all();
    output::output_success(serde_json::json!({
        "file": ctx.file.display().to_string(),
        "key": ctx.session.store().key(),
        "seeded": ctx.seeded,
        "entries": entries.len(),
    }))
}

pub fn handle_captains(ctx: &CliContext) -> anyhow::Result<()> {
    let entries = ctx.session.read_all();
    let crisis_dates = last_crisis_dates(&entries);

    let captains = captain_names(&entries)
        .into_iter()
        .map(|name| {
            let last_crisis_date = crisis_dates.get(&name).copied().flatten();
            serde_json::json!({
                "asset_key": normalize_captain_name(&name),
                "captain_name": name,
                "last_crisis_date": last_crisis_date,
            })
        })
        .collect::<Vec<_>>();
    output::output_list(captains)
}
