use crate::cli::parser::{Commands, TrackerAction};
use crate::config::Config;
use crate::core::tracker::{self, TaskLogic};
use crate::db::completions::find_task;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::completion::CompletionKind;
use crate::ui::messages::{confirm, info};
use crate::utils::date::{self, parse_date_or_today, resolve_bounds};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Task { action } = cmd {
        let mut pool = DbPool::open(&cfg.database)?;

        match action {
            TrackerAction::Add { name, created } => {
                let created = parse_date_or_today(created.as_ref())?;
                TaskLogic::add(&mut pool, name, created)?;
            }
            TrackerAction::List => TaskLogic::print_list(&pool, date::today())?,
            TrackerAction::Rename { id, name } => TaskLogic::rename(&mut pool, *id, name)?,
            TrackerAction::Del { id } => {
                let task = find_task(&pool.conn, *id)?;
                if !confirm(&format!(
                    "Delete task #{id} '{}' and all its completions? This action is irreversible.",
                    task.name
                )) {
                    info("Operation cancelled.");
                    return Ok(());
                }
                tracker::delete(&mut pool, CompletionKind::Task, *id)?;
            }
            TrackerAction::Toggle { id, date: day } => {
                let day = parse_date_or_today(day.as_ref())?;
                tracker::toggle(&mut pool, CompletionKind::Task, *id, day)?;
            }
            TrackerAction::Completions { period } => {
                let bounds = resolve_bounds(period.as_ref())?;
                tracker::print_completions(&pool, CompletionKind::Task, bounds)?;
            }
        }
    }
    Ok(())
}
