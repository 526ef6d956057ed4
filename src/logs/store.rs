//! Repository over the logs root directory.
//!
//! Owns the client-slug → log-directory mapping; `current_log`, `next_log`
//! and `all_logs` are functions of that mapping plus filesystem queries, so
//! the parsing/writing core can be exercised against any temp directory.

use crate::errors::AppResult;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

pub struct LogStore {
    root: PathBuf,
}

impl LogStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn client_dir(&self, slug: &str) -> PathBuf {
        self.root.join(slug)
    }

    /// Create the client's log directory if missing and seed the first log
    /// period so there is always a current log to append to.
    pub fn ensure_client_dir(&self, slug: &str) -> AppResult<PathBuf> {
        let dir = self.client_dir(slug);
        fs::create_dir_all(&dir)?;
        if self.all_logs(slug)?.is_empty() {
            fs::File::create(dir.join("1.log"))?;
        }
        Ok(dir)
    }

    /// All `<n>.log` files for the client, oldest-modified first.
    pub fn all_logs(&self, slug: &str) -> AppResult<Vec<PathBuf>> {
        let dir = self.client_dir(slug);
        if !dir.exists() {
            return Ok(Vec::new());
        }
        let mut logs: Vec<(SystemTime, PathBuf)> = Vec::new();
        for entry in fs::read_dir(&dir)? {
            let entry = entry?;
            let path = entry.path();
            if log_index(&path).is_some() {
                logs.push((entry.metadata()?.modified()?, path));
            }
        }
        // mtime order; index breaks ties on filesystems with coarse mtimes
        logs.sort_by_key(|(mtime, path)| (*mtime, log_index(path)));
        Ok(logs.into_iter().map(|(_, path)| path).collect())
    }

    /// The most recently modified log file, or the would-be first period if
    /// the client has no logs yet.
    pub fn current_log(&self, slug: &str) -> AppResult<PathBuf> {
        Ok(self
            .all_logs(slug)?
            .pop()
            .unwrap_or_else(|| self.client_dir(slug).join("1.log")))
    }

    /// Start the next numbered log period: highest existing index plus one.
    pub fn next_log(&self, slug: &str) -> AppResult<PathBuf> {
        let dir = self.ensure_client_dir(slug)?;
        let next = self
            .all_logs(slug)?
            .iter()
            .filter_map(|p| log_index(p))
            .max()
            .unwrap_or(0)
            + 1;
        let path = dir.join(format!("{next}.log"));
        fs::File::create(&path)?;
        Ok(path)
    }
}

/// Numeric index of a `<n>.log` path, None for anything else.
pub fn log_index(path: &Path) -> Option<u32> {
    if path.extension()?.to_str()? != "log" {
        return None;
    }
    path.file_stem()?.to_str()?.parse().ok()
}
