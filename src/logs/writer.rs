//! Append-only writer for the log grammar.
//!
//! Every operation is one scoped open-append-close of the target file; the
//! handle is released on all exit paths. The writer keeps no other state:
//! session state lives in the file and is re-derived by the parser.

use crate::errors::{AppError, AppResult};
use crate::logs::parser::{CLOCK_IN_LABEL, CLOCK_OUT_LABEL};
use crate::utils::time;
use chrono::NaiveDateTime;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Fixed run of `=` on both sides of a marker line.
const MARKER_RULE: &str = "===============";

pub struct LogWriter {
    path: PathBuf,
}

impl LogWriter {
    pub fn new(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
        }
    }

    pub fn clock_in(&self, now: NaiveDateTime) -> AppResult<()> {
        self.append(&marker_line(CLOCK_IN_LABEL, now))
    }

    pub fn clock_out(&self, now: NaiveDateTime) -> AppResult<()> {
        self.append(&marker_line(CLOCK_OUT_LABEL, now))
    }

    /// Append the exact 3-line block the parser expects: timestamp range,
    /// description, duration text.
    pub fn task(
        &self,
        start: NaiveDateTime,
        end: NaiveDateTime,
        description: &str,
        duration_text: &str,
    ) -> AppResult<()> {
        if description.contains(CLOCK_IN_LABEL) || description.contains(CLOCK_OUT_LABEL) {
            return Err(AppError::ReservedMarker(description.to_string()));
        }
        self.append(&format!(
            "\t{} - {}\n\t\t\t{}\n\t\t{}\n",
            time::format_timestamp(start),
            time::format_timestamp(end),
            description,
            duration_text,
        ))
    }

    fn append(&self, entry: &str) -> AppResult<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        file.write_all(entry.as_bytes())?;
        Ok(())
    }
}

fn marker_line(label: &str, at: NaiveDateTime) -> String {
    format!(
        "{MARKER_RULE}[{label} - {}]{MARKER_RULE}\n",
        time::format_timestamp(at)
    )
}
