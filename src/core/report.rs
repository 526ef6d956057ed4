//! Status and listing views over parsed logs.

use crate::errors::AppResult;
use crate::logs::{Log, LogStore};
use crate::models::{Client, Session};
use crate::ui::messages;
use crate::utils::table::Table;
use crate::utils::time;
use chrono::NaiveDateTime;

/// Which log periods a listing covers.
pub enum ListScope {
    Current,
    Index(u32),
    All,
}

pub struct ReportLogic;

impl ReportLogic {
    /// Load the logs selected by the scope, oldest first.
    pub fn load_logs(
        store: &LogStore,
        client: &Client,
        scope: &ListScope,
        strict: bool,
    ) -> AppResult<Vec<Log>> {
        let paths = match scope {
            ListScope::Current => {
                let path = store.current_log(&client.slug)?;
                if path.exists() { vec![path] } else { Vec::new() }
            }
            ListScope::Index(i) => {
                let path = store.client_dir(&client.slug).join(format!("{i}.log"));
                if !path.exists() {
                    return Err(crate::errors::AppError::Other(format!(
                        "no log period {i} for '{}'",
                        client.slug
                    )));
                }
                vec![path]
            }
            ListScope::All => store.all_logs(&client.slug)?,
        };
        paths.iter().map(|p| Log::load(p, strict)).collect()
    }

    /// Current-session view for the `status` command.
    pub fn print_status(client: &Client, log: &Log, now: NaiveDateTime) {
        messages::header(format!("Status: {}", client.display_name()));
        println!("Log file: {}", log.path.display());
        println!("Closed sessions this period: {}", log.sessions.len());

        let Some(open) = &log.open else {
            messages::info("Not clocked in.");
            return;
        };

        messages::success(format!("Clocked in since {}", open.clockin_timestamp()));
        if !open.tasks.is_empty() {
            let mut table = Table::new(&["Start", "End", "Description", "Duration"]);
            for task in &open.tasks {
                table.add_row(vec![
                    task.start_timestamp(),
                    task.end_timestamp(),
                    task.description.clone(),
                    task.clocktime(),
                ]);
            }
            print!("{}", table.render());
        }
        println!("Working time:  {}", open.working_clocktime());
        println!(
            "Elapsed time:  {}",
            time::elapsed_clocktime(now - open.clock_in_time)
        );
    }

    /// Per-session table over the selected logs, with totals and, when the
    /// client has a rate, the billable amount.
    pub fn print_list(client: &Client, logs: &[Log]) {
        messages::header(format!("Sessions: {}", client.display_name()));

        let mut worked_total: i64 = 0;
        let mut session_total: i64 = 0;
        let mut table = Table::new(&["Log", "#", "Clocked in", "Clocked out", "Tasks", "Worked", "Session"]);
        for log in logs {
            let label = log
                .index()
                .map(|i| i.to_string())
                .unwrap_or_else(|| "?".to_string());
            for (n, session) in log.sessions.iter().chain(log.open.as_ref()).enumerate() {
                worked_total += session.total_working_time;
                session_total += session.total_session_time.unwrap_or(0);
                table.add_row(session_row(&label, n + 1, session));
            }
        }

        if table.is_empty() {
            messages::info("No sessions recorded.");
            return;
        }
        print!("{}", table.render());

        println!();
        println!("Total worked:   {}", time::format_clocktime(worked_total));
        println!("Total session:  {}", time::format_clocktime(session_total));
        if let Some(rate) = client.rate {
            let amount = rate * worked_total as f64 / 3600.0;
            println!("Billable @ {rate}/h: {amount:.2}");
        }
    }
}

fn session_row(log_label: &str, n: usize, session: &Session) -> Vec<String> {
    vec![
        log_label.to_string(),
        n.to_string(),
        session.clockin_timestamp(),
        session
            .clockout_timestamp()
            .unwrap_or_else(|| "(open)".to_string()),
        session.tasks.len().to_string(),
        session.working_clocktime(),
        session
            .session_clocktime()
            .unwrap_or_else(|| "--:--:--".to_string()),
    ]
}
