use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::report::{ListScope, ReportLogic};
use crate::errors::AppResult;

use super::{open_book, open_store, resolve_client};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { client, log, all } = cmd {
        let store = open_store(cfg);
        let book = open_book(cfg, &store)?;
        let client = resolve_client(&book, client.as_ref(), cfg)?;

        let scope = if *all {
            ListScope::All
        } else if let Some(i) = log {
            ListScope::Index(*i)
        } else {
            ListScope::Current
        };

        let logs = ReportLogic::load_logs(&store, client, &scope, cfg.strict_parse)?;
        ReportLogic::print_list(client, &logs);
    }
    Ok(())
}
