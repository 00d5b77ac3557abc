use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::report::ProgressLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::completion::CompletionKind;
use crate::utils::date::{days_between, month_days, parse_date_or_today, parse_range, week_dates};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Progress {
        tasks: _,
        habits,
        week: _,
        offset,
        month,
        period,
        today,
        json,
    } = cmd
    {
        let kind = if *habits {
            CompletionKind::Habit
        } else {
            CompletionKind::Task
        };
        let today = parse_date_or_today(today.as_ref())?;

        // week is the default window
        let dates = if let Some(m) = month {
            month_days(m)?
        } else if let Some(p) = period {
            let (start, end) = parse_range(p)?;
            days_between(start, end)
        } else {
            week_dates(today, cfg.week_start_day()?, offset.unwrap_or(0))?
        };

        let pool = DbPool::open(&cfg.database)?;
        ProgressLogic::print(&pool, kind, &dates, *json)?;
    }
    Ok(())
}
