use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages;

use super::{open_book, open_store};

/// Handle the `init` command
///
/// This initializes:
///  - the data directory (if missing)
///  - the configuration file (skipped in test mode)
///  - the client book, seeded with the default client
///  - the default client's first log period
pub fn handle(cli: &Cli) -> AppResult<()> {
    let cfg = Config::init_all(cli.dir.clone(), cli.test)?;

    println!("⚙️  Initializing timecard…");
    println!("📒 Client book : {}", &cfg.client_book);
    println!("🗂️  Logs        : {}", &cfg.logs_dir);

    let store = open_store(&cfg);
    let mut book = open_book(&cfg, &store)?;
    if !book.contains(&cfg.default_client) {
        book.add_client(&store, &cfg.default_client, "Self", None)?;
    }
    store.ensure_client_dir(&cfg.default_client)?;

    messages::success(format!(
        "Client book ready with default client '{}'",
        cfg.default_client
    ));
    println!("🎉 timecard initialization completed!");
    Ok(())
}
