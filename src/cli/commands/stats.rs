use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::report::StatsLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::utils::date::parse_date_or_today;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Stats { today, json } = cmd {
        let today = parse_date_or_today(today.as_ref())?;
        let pool = DbPool::open(&cfg.database)?;
        StatsLogic::print(&pool, today, *json)?;
    }
    Ok(())
}
