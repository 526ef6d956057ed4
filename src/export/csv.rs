use crate::errors::{AppError, AppResult};
use crate::export::model::TaskExport;
use crate::ui::messages::info;
use std::io;
use std::path::Path;

/// Export CSV (header included courtesy of serde).
pub(crate) fn write_csv(path: &Path, rows: &[TaskExport]) -> AppResult<()> {
    info(format!("Exporting to CSV: {}", path.display()));

    let mut wtr = csv::Writer::from_path(path)
        .map_err(|e| AppError::from(io::Error::other(format!("CSV open error: {e}"))))?;

    for row in rows {
        wtr.serialize(row)
            .map_err(|e| AppError::from(io::Error::other(format!("CSV write error: {e}"))))?;
    }

    wtr.flush()
        .map_err(|e| AppError::from(io::Error::other(format!("CSV flush error: {e}"))))?;

    Ok(())
}
