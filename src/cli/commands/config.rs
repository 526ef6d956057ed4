use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages;
use std::fs;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config { print_config, path } = cmd {
        let file = Config::config_file();

        if *path {
            println!("{}", file.display());
            return Ok(());
        }

        if *print_config {
            if file.exists() {
                print!("{}", fs::read_to_string(&file)?);
            } else {
                messages::warning("No configuration file found; using defaults.");
            }
            return Ok(());
        }

        // No flag: show the effective configuration.
        println!("Config file    : {}", file.display());
        println!("Client book    : {}", cfg.client_book);
        println!("Logs directory : {}", cfg.logs_dir);
        println!("Default client : {}", cfg.default_client);
        println!("Strict parse   : {}", cfg.strict_parse);
    }
    Ok(())
}
