use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::export::ExportLogic;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        dataset,
        file,
        range,
        force,
    } = cmd
    {
        let mut pool = DbPool::open(&cfg.database)?;
        ExportLogic::export(&mut pool, *format, *dataset, file, range.as_ref(), *force)?;
    }
    Ok(())
}
