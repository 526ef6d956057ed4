//! Backup of the whole data set (client book + every log) into one zip.

use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::success;
use std::fs;
use std::path::Path;
use zip::ZipWriter;
use zip::write::FileOptions;

pub struct BackupLogic;

impl BackupLogic {
    pub fn backup(cfg: &Config, dest: &Path, force: bool) -> AppResult<()> {
        crate::export::ensure_writable(dest, force)?;
        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent)?;
        }

        let file = fs::File::create(dest)?;
        let mut zip = ZipWriter::new(file);
        let options: FileOptions<'_, ()> =
            FileOptions::default().compression_method(zip::CompressionMethod::Deflated);

        let book = Path::new(&cfg.client_book);
        if book.exists() {
            add_file(&mut zip, book, "client-book.ini", options)?;
        }

        let logs_root = Path::new(&cfg.logs_dir);
        if logs_root.exists() {
            for client_entry in fs::read_dir(logs_root)? {
                let client_dir = client_entry?.path();
                if !client_dir.is_dir() {
                    continue;
                }
                let slug = client_dir
                    .file_name()
                    .map(|n| n.to_string_lossy().to_string())
                    .unwrap_or_default();
                for log_entry in fs::read_dir(&client_dir)? {
                    let log_path = log_entry?.path();
                    if log_path.is_file() {
                        let name = log_path
                            .file_name()
                            .map(|n| n.to_string_lossy().to_string())
                            .unwrap_or_default();
                        add_file(&mut zip, &log_path, &format!("logs/{slug}/{name}"), options)?;
                    }
                }
            }
        }

        zip.finish().map_err(std::io::Error::other)?;
        success(format!("Backup created: {}", dest.display()));
        Ok(())
    }
}

fn add_file(
    zip: &mut ZipWriter<fs::File>,
    src: &Path,
    archived_name: &str,
    options: FileOptions<'_, ()>,
) -> AppResult<()> {
    let mut f = fs::File::open(src)?;
    zip.start_file(archived_name, options)
        .map_err(std::io::Error::other)?;
    std::io::copy(&mut f, zip)?;
    Ok(())
}
