//! Unified application error type.
//! All modules (book, logs, core, cli, utils) return AppError to keep the
//! error handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Format errors (timestamp / duration / marker text)
    // ---------------------------
    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(String),

    #[error("Invalid duration: {0}")]
    InvalidDuration(String),

    #[error("Malformed marker line: {0}")]
    MalformedMarker(String),

    // ---------------------------
    // Structure errors (grammar violations / wrong clock state)
    // ---------------------------
    #[error("Clock-out without a matching clock-in")]
    UnmatchedClockOut,

    #[error("No open session for client '{0}'")]
    NotClockedIn(String),

    #[error("Client '{0}' is already clocked in")]
    AlreadyClockedIn(String),

    #[error("Task description may not contain a clock marker: {0}")]
    ReservedMarker(String),

    // ---------------------------
    // Log / roster errors
    // ---------------------------
    #[error("Failed to parse {file}: {source}")]
    LogParse {
        file: String,
        #[source]
        source: Box<AppError>,
    },

    #[error("Unknown client: {0}")]
    UnknownClient(String),

    #[error("Client book error: {0}")]
    Book(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export format not supported: {0}")]
    InvalidExportFormat(String),

    #[error("Export error: {0}")]
    Export(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

impl AppError {
    /// True for errors caused by malformed timestamp/duration text.
    pub fn is_format(&self) -> bool {
        matches!(
            self,
            AppError::InvalidTimestamp(_)
                | AppError::InvalidDuration(_)
                | AppError::MalformedMarker(_)
        )
    }

    /// True for grammar violations such as an unmatched clock-out.
    pub fn is_structure(&self) -> bool {
        matches!(self, AppError::UnmatchedClockOut)
    }
}

pub type AppResult<T> = Result<T, AppError>;
