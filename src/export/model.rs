use crate::logs::Log;
use crate::models::{Client, Session};
use serde::Serialize;

/// Flat per-task row for export.
#[derive(Serialize, Clone, Debug)]
pub struct TaskExport {
    pub client: String,
    pub log: String,
    pub clock_in: String,
    pub clock_out: String,
    pub task_start: String,
    pub task_end: String,
    pub description: String,
    pub duration: String,
    pub seconds: i64,
}

/// Flatten parsed logs into one row per task; the trailing open session is
/// included with an empty clock-out column.
pub fn rows_for_client(client: &Client, logs: &[Log]) -> Vec<TaskExport> {
    let mut rows = Vec::new();
    for log in logs {
        let log_label = log
            .index()
            .map(|i| i.to_string())
            .unwrap_or_else(|| log.path.display().to_string());
        for session in log.sessions.iter().chain(log.open.as_ref()) {
            push_session_rows(&mut rows, &client.slug, &log_label, session);
        }
    }
    rows
}

fn push_session_rows(rows: &mut Vec<TaskExport>, slug: &str, log_label: &str, session: &Session) {
    for task in &session.tasks {
        rows.push(TaskExport {
            client: slug.to_string(),
            log: log_label.to_string(),
            clock_in: session.clockin_timestamp(),
            clock_out: session.clockout_timestamp().unwrap_or_default(),
            task_start: task.start_timestamp(),
            task_end: task.end_timestamp(),
            description: task.description.clone(),
            duration: task.clocktime(),
            seconds: task.duration,
        });
    }
}
