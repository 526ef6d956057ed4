use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::backup::BackupLogic;
use crate::errors::AppResult;
use crate::utils::path::require_absolute;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Backup { file, force } = cmd {
        let dest = require_absolute(file)?;
        BackupLogic::backup(cfg, &dest, *force)?;
    }
    Ok(())
}
