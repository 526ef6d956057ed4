mod csv;
mod json;
mod model;

pub use model::{TaskExport, rows_for_client};

use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use clap::ValueEnum;
use std::path::Path;

/// Shared completion message for export commands.
pub(crate) fn notify_export_success(label: &str, path: &Path) {
    success(format!("{label} export completed: {}", path.display()));
}

#[derive(Clone, Debug, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}

/// Refuse to clobber an existing output file unless forced.
pub(crate) fn ensure_writable(path: &Path, force: bool) -> AppResult<()> {
    if path.exists() && !force {
        return Err(AppError::Export(format!(
            "Output file already exists: {} (use --force to overwrite)",
            path.display()
        )));
    }
    Ok(())
}

/// Write the flat task rows in the requested format.
pub fn export_rows(
    format: &ExportFormat,
    path: &Path,
    force: bool,
    rows: &[TaskExport],
) -> AppResult<()> {
    ensure_writable(path, force)?;
    match format {
        ExportFormat::Csv => csv::write_csv(path, rows)?,
        ExportFormat::Json => json::write_json(path, rows)?,
    }
    notify_export_success(format.as_str(), path);
    Ok(())
}
