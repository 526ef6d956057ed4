use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::report::ReportLogic;
use crate::errors::AppResult;
use crate::logs::Log;
use crate::ui::messages;
use crate::utils::time;

use super::{open_book, open_store, resolve_client};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Status { client } = cmd {
        let store = open_store(cfg);
        let book = open_book(cfg, &store)?;
        let client = resolve_client(&book, client.as_ref(), cfg)?;

        let path = store.current_log(&client.slug)?;
        if !path.exists() {
            messages::info(format!("No log yet for '{}'", client.slug));
            return Ok(());
        }
        let log = Log::load(&path, cfg.strict_parse)?;
        ReportLogic::print_status(client, &log, time::now());
    }
    Ok(())
}
