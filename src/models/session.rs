use crate::models::task::Task;
use crate::utils::time;
use chrono::NaiveDateTime;
use serde::Serialize;

/// One clock-in/clock-out period of work for a client.
///
/// Tasks are append-only and chronological; `total_working_time` is the
/// running sum of their durations. `total_session_time` is set exactly once,
/// at clock-out, and never recomputed afterwards.
#[derive(Debug, Clone, Serialize)]
pub struct Session {
    pub clock_in_time: NaiveDateTime,
    pub clock_out_time: Option<NaiveDateTime>,
    pub tasks: Vec<Task>,
    /// Sum of task durations, in seconds.
    pub total_working_time: i64,
    /// Elapsed clock-in → clock-out, in seconds. None while the session is open.
    pub total_session_time: Option<i64>,
}

impl Session {
    pub fn new(clock_in_time: NaiveDateTime) -> Self {
        Self {
            clock_in_time,
            clock_out_time: None,
            tasks: Vec::new(),
            total_working_time: 0,
            total_session_time: None,
        }
    }

    pub fn add_task(&mut self, task: Task) {
        self.total_working_time += task.duration;
        self.tasks.push(task);
    }

    pub fn clock_out(&mut self, clock_out_time: NaiveDateTime, total_session_time: i64) {
        self.clock_out_time = Some(clock_out_time);
        self.total_session_time = Some(total_session_time);
    }

    pub fn is_open(&self) -> bool {
        self.clock_out_time.is_none()
    }

    pub fn clockin_timestamp(&self) -> String {
        time::format_timestamp(self.clock_in_time)
    }

    pub fn clockout_timestamp(&self) -> Option<String> {
        self.clock_out_time.map(time::format_timestamp)
    }

    pub fn working_clocktime(&self) -> String {
        time::format_clocktime(self.total_working_time)
    }

    pub fn session_clocktime(&self) -> Option<String> {
        self.total_session_time.map(time::format_clocktime)
    }
}
