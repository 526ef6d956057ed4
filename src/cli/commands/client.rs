use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages;
use crate::utils::table::Table;

use super::{open_book, open_store};

/// Add a client to the book and/or list the roster.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Client {
        add,
        name,
        rate,
        list,
    } = cmd
    {
        let store = open_store(cfg);
        let mut book = open_book(cfg, &store)?;

        if let Some(slug) = add {
            let full_name = name.clone().unwrap_or_else(|| slug.clone());
            book.add_client(&store, slug, &full_name, *rate)?;
            store.ensure_client_dir(slug)?;
            messages::success(format!("Client '{slug}' added to the book"));
        }

        if *list || add.is_none() {
            if book.is_empty() {
                messages::info(
                    "Client book is empty; add one with 'timecard client --add <slug> --name <name>'",
                );
                return Ok(());
            }
            let mut table = Table::new(&["Slug", "Name", "Rate", "Phone", "City"]);
            for client in book.clients() {
                table.add_row(vec![
                    client.slug.clone(),
                    client.display_name().to_string(),
                    client.rate.map(|r| r.to_string()).unwrap_or_default(),
                    client.phone.clone().unwrap_or_default(),
                    client.city.clone().unwrap_or_default(),
                ]);
            }
            print!("{}", table.render());
        }
    }
    Ok(())
}
