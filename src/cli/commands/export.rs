use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::report::{ListScope, ReportLogic};
use crate::errors::AppResult;
use crate::export;
use crate::ui::messages;
use crate::utils::path::require_absolute;

use super::{open_book, open_store, resolve_client};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        client,
        all,
        force,
    } = cmd
    {
        let path = require_absolute(file)?;
        let store = open_store(cfg);
        let book = open_book(cfg, &store)?;
        let client = resolve_client(&book, client.as_ref(), cfg)?;

        let scope = if *all {
            ListScope::All
        } else {
            ListScope::Current
        };
        let logs = ReportLogic::load_logs(&store, client, &scope, cfg.strict_parse)?;
        let rows = export::rows_for_client(client, &logs);

        if rows.is_empty() {
            messages::warning("No tasks found for the selected logs. Nothing to export.");
            return Ok(());
        }

        export::export_rows(format, &path, *force, &rows)?;
    }
    Ok(())
}
