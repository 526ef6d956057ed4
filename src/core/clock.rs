//! High-level business logic for the clock-in / clock-out / task commands.
//!
//! All state lives in the client's current log file: every operation first
//! re-derives it through the parser, then appends through the writer.

use crate::errors::{AppError, AppResult};
use crate::logs::{Log, LogStore, LogWriter};
use crate::models::{Client, Session, Task};
use crate::utils::time;
use chrono::NaiveDateTime;
use std::path::PathBuf;

pub struct ClockLogic;

impl ClockLogic {
    /// Open a new session in the client's current log.
    pub fn clock_in(
        store: &LogStore,
        client: &Client,
        strict: bool,
        now: NaiveDateTime,
    ) -> AppResult<PathBuf> {
        store.ensure_client_dir(&client.slug)?;
        let path = store.current_log(&client.slug)?;
        let log = Log::load(&path, strict)?;
        if log.is_clocked_in() {
            return Err(AppError::AlreadyClockedIn(client.slug.clone()));
        }
        LogWriter::new(&path).clock_in(now)?;
        Ok(path)
    }

    /// Close the open session and return it, finalized, for display.
    pub fn clock_out(
        store: &LogStore,
        client: &Client,
        strict: bool,
        now: NaiveDateTime,
    ) -> AppResult<Session> {
        let path = store.current_log(&client.slug)?;
        if !path.exists() {
            return Err(AppError::NotClockedIn(client.slug.clone()));
        }
        let log = Log::load(&path, strict)?;
        let Some(mut session) = log.open else {
            return Err(AppError::NotClockedIn(client.slug.clone()));
        };
        LogWriter::new(&path).clock_out(now)?;
        let total = (now - session.clock_in_time).num_seconds();
        session.clock_out(now, total);
        Ok(session)
    }

    /// Record a finished task in the open session.
    ///
    /// With no explicit start the task begins where the previous one ended
    /// (or at clock-in), so consecutive tasks tile the session.
    pub fn task(
        store: &LogStore,
        client: &Client,
        strict: bool,
        description: &str,
        start_override: Option<NaiveDateTime>,
        now: NaiveDateTime,
    ) -> AppResult<Task> {
        let path = store.current_log(&client.slug)?;
        if !path.exists() {
            return Err(AppError::NotClockedIn(client.slug.clone()));
        }
        let log = Log::load(&path, strict)?;
        let Some(session) = log.open else {
            return Err(AppError::NotClockedIn(client.slug.clone()));
        };

        let start = start_override.unwrap_or_else(|| {
            session
                .tasks
                .last()
                .map(|t| t.end_time)
                .unwrap_or(session.clock_in_time)
        });
        if start > now {
            return Err(AppError::InvalidTimestamp(format!(
                "task start {} is in the future",
                time::format_timestamp(start)
            )));
        }

        let duration = (now - start).num_seconds();
        let duration_text = time::format_clocktime(duration);
        LogWriter::new(&path).task(start, now, description, &duration_text)?;
        Ok(Task::new(start, now, description, duration))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::fs;

    fn dt(h: u32, mi: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 2)
            .unwrap()
            .and_hms_opt(h, mi, 0)
            .unwrap()
    }

    fn fixture(name: &str) -> (LogStore, Client) {
        let root = std::env::temp_dir().join(format!("{name}_timecard_clock"));
        fs::remove_dir_all(&root).ok();
        let store = LogStore::new(&root);
        let client = Client::new("acme", store.client_dir("acme"));
        (store, client)
    }

    #[test]
    fn a_full_day_round_trips_through_the_log() {
        let (store, client) = fixture("fullday");

        ClockLogic::clock_in(&store, &client, true, dt(9, 0)).unwrap();
        let t1 = ClockLogic::task(&store, &client, true, "Wrote onboarding doc", None, dt(10, 15))
            .unwrap();
        assert_eq!(t1.start_time, dt(9, 0));
        assert_eq!(t1.duration, 4500);

        // second task starts where the first ended
        let t2 = ClockLogic::task(&store, &client, true, "Call with accounting", None, dt(11, 0))
            .unwrap();
        assert_eq!(t2.start_time, dt(10, 15));
        assert_eq!(t2.duration, 2700);

        let session = ClockLogic::clock_out(&store, &client, true, dt(17, 0)).unwrap();
        assert_eq!(session.total_session_time, Some(28800));

        let parsed = Log::load(&store.current_log("acme").unwrap(), true).unwrap();
        assert_eq!(parsed.sessions.len(), 1);
        assert_eq!(parsed.sessions[0].tasks.len(), 2);
        assert_eq!(parsed.sessions[0].total_working_time, 7200);
    }

    #[test]
    fn clock_in_twice_is_rejected() {
        let (store, client) = fixture("twicein");
        ClockLogic::clock_in(&store, &client, true, dt(9, 0)).unwrap();
        assert!(matches!(
            ClockLogic::clock_in(&store, &client, true, dt(10, 0)),
            Err(AppError::AlreadyClockedIn(_))
        ));
    }

    #[test]
    fn clock_out_and_task_require_an_open_session() {
        let (store, client) = fixture("noopen");
        store.ensure_client_dir("acme").unwrap();
        assert!(matches!(
            ClockLogic::clock_out(&store, &client, true, dt(17, 0)),
            Err(AppError::NotClockedIn(_))
        ));
        assert!(matches!(
            ClockLogic::task(&store, &client, true, "orphan", None, dt(17, 0)),
            Err(AppError::NotClockedIn(_))
        ));
    }

    #[test]
    fn future_task_start_is_rejected() {
        let (store, client) = fixture("future");
        ClockLogic::clock_in(&store, &client, true, dt(9, 0)).unwrap();
        let err =
            ClockLogic::task(&store, &client, true, "time travel", Some(dt(12, 0)), dt(10, 0))
                .unwrap_err();
        assert!(matches!(err, AppError::InvalidTimestamp(_)));
    }
}
