use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::report::{ChartLogic, ChartView};
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::utils::date::{month_days, parse_date_or_today};
use chrono::Datelike;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Chart {
        view,
        offset,
        month,
        today,
    } = cmd
    {
        let today = parse_date_or_today(today.as_ref())?;
        let pool = DbPool::open(&cfg.database)?;

        match view {
            ChartView::Daily => ChartLogic::daily(&pool, today)?,
            ChartView::Weekly => ChartLogic::weekly(&pool, today, *offset)?,
            ChartView::Monthly => ChartLogic::monthly(&pool, today)?,
            ChartView::Subjects => ChartLogic::subjects(&pool, cfg.top_subjects)?,
            ChartView::Heatmap => {
                let (year, m) = match month {
                    Some(m) => match month_days(m)?.first() {
                        Some(first) => (first.year(), first.month()),
                        None => return Err(AppError::InvalidPeriod(m.clone())),
                    },
                    None => (today.year(), today.month()),
                };
                ChartLogic::heatmap(&pool, year, m, cfg.week_start_day()?)?;
            }
        }
    }
    Ok(())
}
