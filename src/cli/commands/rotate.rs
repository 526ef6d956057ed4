use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::logs::store::log_index;
use crate::ui::messages;

use super::{open_book, open_store, resolve_client};

/// Start the next numbered log period for a client.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Rotate { client } = cmd {
        let store = open_store(cfg);
        let book = open_book(cfg, &store)?;
        let client = resolve_client(&book, client.as_ref(), cfg)?;

        let path = store.next_log(&client.slug)?;
        messages::success(format!(
            "Started log period {} for '{}' ({})",
            log_index(&path).unwrap_or_default(),
            client.slug,
            path.display()
        ));
    }
    Ok(())
}
