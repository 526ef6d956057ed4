use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::clock::ClockLogic;
use crate::errors::{AppError, AppResult};
use crate::ui::messages;
use crate::utils::time;
use chrono::Duration;

use super::{open_book, open_store, resolve_client};

/// Record a finished task in the client's open session.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Task {
        description,
        client,
        start,
        minutes,
    } = cmd
    {
        let store = open_store(cfg);
        let book = open_book(cfg, &store)?;
        let client = resolve_client(&book, client.as_ref(), cfg)?;

        let now = time::now();
        let start_override = match (start, minutes) {
            (Some(s), _) => {
                let t = time::parse_wall_time(s)
                    .ok_or_else(|| AppError::InvalidTimestamp(s.clone()))?;
                Some(now.date().and_time(t))
            }
            (None, Some(m)) => {
                if *m < 0 {
                    return Err(AppError::InvalidDuration(format!("{m} minutes")));
                }
                Some(now - Duration::minutes(*m))
            }
            (None, None) => None,
        };

        let task = ClockLogic::task(
            &store,
            client,
            cfg.strict_parse,
            description,
            start_override,
            now,
        )?;
        messages::success(format!(
            "Task recorded for {}: {} ({})",
            client.display_name(),
            task.description,
            task.clocktime()
        ));
    }
    Ok(())
}
