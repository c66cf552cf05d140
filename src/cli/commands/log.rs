use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::log::LogLogic;
use crate::db::records::RecordStore;
use crate::errors::AppResult;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Log { print } = cmd
        && *print
    {
        let store = RecordStore::open(&cfg.database)?;
        LogLogic::print_log(&store)?;
    }

    Ok(())
}
