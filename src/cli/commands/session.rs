use crate::cli::parser::{Commands, SessionAction};
use crate::config::Config;
use crate::core::session::{SessionLogic, SessionPatch};
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{confirm, info};
use crate::utils::date::{self, parse_date_or_today, resolve_bounds};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Session { action } = cmd {
        let mut pool = DbPool::open(&cfg.database)?;

        match action {
            SessionAction::Add {
                subject,
                minutes,
                date: day,
                notes,
            } => {
                let day = parse_date_or_today(day.as_ref())?;
                SessionLogic::add(&mut pool, subject, *minutes, day, notes.as_deref())?;
            }

            SessionAction::List { period, now } => {
                let bounds = if *now {
                    let t = date::today();
                    Some((t, t))
                } else {
                    resolve_bounds(period.as_ref())?
                };
                SessionLogic::print_list(&pool, bounds)?;
            }

            SessionAction::Edit {
                id,
                subject,
                minutes,
                date: day,
                notes,
            } => {
                let day = day.as_deref().map(date::parse_date).transpose()?;
                let patch = SessionPatch {
                    subject: subject.as_deref(),
                    minutes: *minutes,
                    date: day,
                    notes: notes.as_deref(),
                };
                SessionLogic::edit(&mut pool, *id, patch)?;
            }

            SessionAction::Del { id } => {
                if !confirm(&format!("Delete session #{id}? This action is irreversible.")) {
                    info("Operation cancelled.");
                    return Ok(());
                }
                SessionLogic::delete(&mut pool, *id)?;
            }
        }
    }
    Ok(())
}
