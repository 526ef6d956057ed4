pub mod backup;
pub mod client;
pub mod clock;
pub mod config;
pub mod export;
pub mod init;
pub mod list;
pub mod rotate;
pub mod status;
pub mod task;

use crate::book::ClientBook;
use crate::config::Config;
use crate::errors::AppResult;
use crate::logs::LogStore;
use crate::models::Client;
use std::path::Path;

pub(crate) fn open_store(cfg: &Config) -> LogStore {
    LogStore::new(&cfg.logs_dir)
}

pub(crate) fn open_book(cfg: &Config, store: &LogStore) -> AppResult<ClientBook> {
    ClientBook::load(Path::new(&cfg.client_book), store)
}

/// The client a command acts on: the positional slug, or the configured
/// default when none was given.
pub(crate) fn resolve_client<'a>(
    book: &'a ClientBook,
    arg: Option<&String>,
    cfg: &Config,
) -> AppResult<&'a Client> {
    let slug = arg.map(String::as_str).unwrap_or(&cfg.default_client);
    book.get(slug)
}
