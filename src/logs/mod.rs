//! Plain-text session logs: one directory per client, one numbered `.log`
//! file per log period, parsed back into sessions on demand.

pub mod parser;
pub mod store;
pub mod writer;

pub use store::LogStore;
pub use writer::LogWriter;

use crate::errors::{AppError, AppResult};
use crate::models::Session;
use crate::ui::messages;
use std::fs;
use std::path::{Path, PathBuf};

/// One parsed log period: the closed sessions in file order, plus the
/// trailing open session when the last clock-in has no clock-out yet.
#[derive(Debug)]
pub struct Log {
    pub path: PathBuf,
    pub sessions: Vec<Session>,
    pub open: Option<Session>,
}

impl Log {
    /// Read and parse one log file.
    ///
    /// In strict mode any malformed line fails the load. In lenient mode
    /// (the default) the failure is reported with the file path and cause,
    /// and whatever sessions were parsed before it are kept.
    pub fn load(path: &Path, strict: bool) -> AppResult<Self> {
        let text = fs::read_to_string(path)?;
        let outcome = parser::parse_sessions(&text);
        if let Some(err) = outcome.error {
            let wrapped = AppError::LogParse {
                file: path.display().to_string(),
                source: Box::new(err),
            };
            if strict {
                return Err(wrapped);
            }
            messages::warning(format!(
                "{wrapped}; keeping {} parsed session(s)",
                outcome.sessions.len()
            ));
        }
        Ok(Self {
            path: path.to_path_buf(),
            sessions: outcome.sessions,
            open: outcome.open,
        })
    }

    /// Numeric log-period index taken from the file name (`3.log` → 3).
    pub fn index(&self) -> Option<u32> {
        store::log_index(&self.path)
    }

    pub fn is_clocked_in(&self) -> bool {
        self.open.is_some()
    }
}
