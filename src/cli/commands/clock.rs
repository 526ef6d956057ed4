use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::clock::ClockLogic;
use crate::errors::AppResult;
use crate::ui::messages;
use crate::utils::time;

use super::{open_book, open_store, resolve_client};

/// Clock in or out of a client's current log.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let store = open_store(cfg);
    let book = open_book(cfg, &store)?;

    match cmd {
        Commands::In { client } => {
            let client = resolve_client(&book, client.as_ref(), cfg)?;
            let now = time::now();
            let path = ClockLogic::clock_in(&store, client, cfg.strict_parse, now)?;
            messages::success(format!(
                "{} clocked in at {} ({})",
                client.display_name(),
                time::format_timestamp(now),
                path.display()
            ));
        }
        Commands::Out { client } => {
            let client = resolve_client(&book, client.as_ref(), cfg)?;
            let now = time::now();
            let session = ClockLogic::clock_out(&store, client, cfg.strict_parse, now)?;
            messages::success(format!(
                "{} clocked out at {}",
                client.display_name(),
                time::format_timestamp(now)
            ));
            println!(
                "Session time: {}   Working time: {} across {} task(s)",
                session.session_clocktime().unwrap_or_default(),
                session.working_clocktime(),
                session.tasks.len()
            );
        }
        _ => {}
    }
    Ok(())
}
