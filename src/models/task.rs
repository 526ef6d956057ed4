use crate::errors::AppResult;
use crate::utils::time;
use chrono::NaiveDateTime;
use serde::Serialize;

/// One completed unit of work inside a session. Immutable once built.
#[derive(Debug, Clone, Serialize)]
pub struct Task {
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
    pub description: String,
    /// Normalized duration in seconds, whatever form it was supplied in.
    pub duration: i64,
}

impl Task {
    pub fn new(
        start_time: NaiveDateTime,
        end_time: NaiveDateTime,
        description: &str,
        duration: i64,
    ) -> Self {
        Self {
            start_time,
            end_time,
            description: description.to_string(),
            duration,
        }
    }

    /// Build a task from preformatted `HH:MM:SS` duration text.
    pub fn with_duration_text(
        start_time: NaiveDateTime,
        end_time: NaiveDateTime,
        description: &str,
        duration: &str,
    ) -> AppResult<Self> {
        Ok(Self::new(
            start_time,
            end_time,
            description,
            time::parse_clocktime(duration)?,
        ))
    }

    pub fn start_timestamp(&self) -> String {
        time::format_timestamp(self.start_time)
    }

    pub fn end_timestamp(&self) -> String {
        time::format_timestamp(self.end_time)
    }

    pub fn clocktime(&self) -> String {
        time::format_clocktime(self.duration)
    }
}
