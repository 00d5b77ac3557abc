use crate::cli::parser::{Commands, SubjectAction};
use crate::config::Config;
use crate::core::subject::SubjectLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{confirm, info};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Subject { action } = cmd {
        let mut pool = DbPool::open(&cfg.database)?;

        match action {
            SubjectAction::Add { name, color } => {
                SubjectLogic::add(&mut pool, cfg, name, color.as_deref())?;
            }
            SubjectAction::List => SubjectLogic::print_list(&pool)?,
            SubjectAction::Edit { id, name, color } => {
                SubjectLogic::edit(&mut pool, *id, name.as_deref(), color.as_deref())?;
            }
            SubjectAction::Del { id } => {
                if !confirm(&format!(
                    "Delete subject #{id}? Its sessions are kept under the same name."
                )) {
                    info("Operation cancelled.");
                    return Ok(());
                }
                SubjectLogic::delete(&mut pool, *id)?;
            }
        }
    }
    Ok(())
}
