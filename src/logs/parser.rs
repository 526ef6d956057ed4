//! Line-replay parser for the log grammar.
//!
//! The grammar is the contract between this parser and [`crate::logs::writer`]:
//! marker lines announce clock-in/clock-out events, and every task is exactly
//! three indented lines (timestamp range, description, duration).

use crate::errors::{AppError, AppResult};
use crate::models::{Session, Task};
use crate::utils::time;

pub const CLOCK_IN_LABEL: &str = "Clock In";
pub const CLOCK_OUT_LABEL: &str = "Clock Out";

/// Result of replaying one log text start to end.
///
/// `error` carries the first malformed line, with everything parsed before it
/// still present in `sessions`/`open`; the caller decides whether that is
/// fatal (strict mode) or reported and tolerated (lenient mode).
#[derive(Debug)]
pub struct ParseOutcome {
    pub sessions: Vec<Session>,
    /// Trailing session with a clock-in but no clock-out yet.
    pub open: Option<Session>,
    pub error: Option<AppError>,
}

pub fn parse_sessions(text: &str) -> ParseOutcome {
    let mut sessions: Vec<Session> = Vec::new();
    let mut current: Option<Session> = None;
    let mut task_lines: Vec<String> = Vec::new();

    let fail = |sessions: Vec<Session>, open: Option<Session>, err: AppError| ParseOutcome {
        sessions,
        open,
        error: Some(err),
    };

    for raw in text.lines() {
        let line = raw.trim();
        if line.contains(CLOCK_IN_LABEL) {
            // A clock-in while a session is open overwrites it; the grammar
            // orders markers and this is not separately validated.
            match time::parse_marker_timestamp(line) {
                Ok(t) => current = Some(Session::new(t)),
                Err(e) => return fail(sessions, current, e),
            }
            task_lines.clear();
        } else if line.contains(CLOCK_OUT_LABEL) {
            let Some(mut session) = current.take() else {
                return fail(sessions, None, AppError::UnmatchedClockOut);
            };
            match time::parse_marker_timestamp(line) {
                Ok(t) => {
                    let total = (t - session.clock_in_time).num_seconds();
                    session.clock_out(t, total);
                    sessions.push(session);
                }
                Err(e) => return fail(sessions, None, e),
            }
            task_lines.clear();
        } else if current.is_some() {
            if line.is_empty() {
                continue;
            }
            task_lines.push(line.to_string());
            if task_lines.len() == 3 {
                let block = std::mem::take(&mut task_lines);
                match parse_task(&block) {
                    Ok(task) => {
                        if let Some(session) = current.as_mut() {
                            session.add_task(task);
                        }
                    }
                    Err(e) => return fail(sessions, current, e),
                }
            }
        }
        // Non-empty lines outside a session are ignored: no session to attach to.
    }

    ParseOutcome {
        sessions,
        open: current,
        error: None,
    }
}

/// Interpret a buffered 3-line block as one task:
/// `start - end` timestamps, free-form description, `HH:MM:SS` duration.
fn parse_task(lines: &[String]) -> AppResult<Task> {
    let (start, end) = lines[0]
        .split_once('-')
        .ok_or_else(|| AppError::InvalidTimestamp(lines[0].clone()))?;
    Task::with_duration_text(
        time::parse_timestamp(start)?,
        time::parse_timestamp(end)?,
        lines[1].trim(),
        &lines[2],
    )
}
