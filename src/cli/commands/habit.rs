use crate::cli::parser::{Commands, HabitAction};
use crate::config::Config;
use crate::core::tracker::{self, HabitLogic};
use crate::db::completions::find_habit;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::completion::CompletionKind;
use crate::ui::messages::{confirm, info};
use crate::utils::date::{self, parse_date_or_today, resolve_bounds};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Habit { action } = cmd {
        let mut pool = DbPool::open(&cfg.database)?;

        match action {
            HabitAction::Add {
                name,
                emoji,
                goal,
                created,
            } => {
                let created = parse_date_or_today(created.as_ref())?;
                HabitLogic::add(&mut pool, cfg, name, emoji.as_deref(), *goal, created)?;
            }
            HabitAction::List => HabitLogic::print_list(&pool, date::today())?,
            HabitAction::Edit {
                id,
                name,
                emoji,
                goal,
            } => {
                HabitLogic::edit(&mut pool, *id, name.as_deref(), emoji.as_deref(), *goal)?;
            }
            HabitAction::Del { id } => {
                let habit = find_habit(&pool.conn, *id)?;
                if !confirm(&format!(
                    "Delete habit #{id} '{}' and all its completions? This action is irreversible.",
                    habit.name
                )) {
                    info("Operation cancelled.");
                    return Ok(());
                }
                tracker::delete(&mut pool, CompletionKind::Habit, *id)?;
            }
            HabitAction::Toggle { id, date: day } => {
                let day = parse_date_or_today(day.as_ref())?;
                tracker::toggle(&mut pool, CompletionKind::Habit, *id, day)?;
            }
            HabitAction::Completions { period } => {
                let bounds = resolve_bounds(period.as_ref())?;
                tracker::print_completions(&pool, CompletionKind::Habit, bounds)?;
            }
        }
    }
    Ok(())
}
