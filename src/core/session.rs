use crate::db::log::audit;
use crate::db::pool::DbPool;
use crate::db::queries::{delete_session, find_session, insert_session, load_sessions, update_session};
use crate::errors::{AppError, AppResult};
use crate::models::session::Session;
use crate::models::subject::required_name;
use crate::ui::messages::{info, success};
use crate::utils::formatting::{mins2readable, truncate};
use crate::utils::table::Table;
use chrono::NaiveDate;

/// Fields of a session that `edit` may change.
#[derive(Debug, Default)]
pub struct SessionPatch<'a> {
    pub subject: Option<&'a str>,
    pub minutes: Option<i64>,
    pub date: Option<NaiveDate>,
    pub notes: Option<&'a str>,
}

/// A single session cannot last longer than a day.
pub const MAX_SESSION_MINUTES: i64 = 24 * 60;

fn validate_minutes(minutes: i64) -> AppResult<i64> {
    if minutes < 0 {
        return Err(AppError::NegativeDuration(minutes));
    }
    if minutes == 0 {
        return Err(AppError::Validation("minutes must be greater than zero".into()));
    }
    if minutes > MAX_SESSION_MINUTES {
        return Err(AppError::Validation(format!(
            "minutes must be at most {MAX_SESSION_MINUTES}"
        )));
    }
    Ok(minutes)
}

/// Business logic for the `session` command.
pub struct SessionLogic;

impl SessionLogic {
    pub fn add(
        pool: &mut DbPool,
        subject: &str,
        minutes: i64,
        date: NaiveDate,
        notes: Option<&str>,
    ) -> AppResult<i64> {
        let subject = required_name(subject, "Subject")?;
        let minutes = validate_minutes(minutes)?;

        let session = Session::new(&subject, minutes, date, notes);
        let id = insert_session(&pool.conn, &session)?;

        audit(
            &pool.conn,
            "add",
            &format!("session #{id}"),
            &format!("{} min of '{}' on {}", minutes, subject, session.date_str()),
        );

        success(format!(
            "Session #{id} saved: {} of {} on {}.",
            mins2readable(minutes),
            subject,
            session.date_str()
        ));
        Ok(id)
    }

    pub fn edit(pool: &mut DbPool, id: i64, patch: SessionPatch) -> AppResult<Session> {
        let mut session = find_session(&pool.conn, id)?;

        if let Some(s) = patch.subject {
            session.subject = required_name(s, "Subject")?;
        }
        if let Some(m) = patch.minutes {
            session.minutes = validate_minutes(m)?;
        }
        if let Some(d) = patch.date {
            session.date = d;
        }
        if let Some(n) = patch.notes {
            session.notes = n.trim().to_string();
        }

        update_session(&pool.conn, &session)?;
        audit(
            &pool.conn,
            "edit",
            &format!("session #{id}"),
            &format!(
                "{} min of '{}' on {}",
                session.minutes,
                session.subject,
                session.date_str()
            ),
        );

        success(format!("Session #{id} updated."));
        Ok(session)
    }

    pub fn delete(pool: &mut DbPool, id: i64) -> AppResult<()> {
        delete_session(&pool.conn, id)?;
        audit(&pool.conn, "del", &format!("session #{id}"), "Deleted session");
        success(format!("Session #{id} deleted."));
        Ok(())
    }

    pub fn print_list(pool: &DbPool, bounds: Option<(NaiveDate, NaiveDate)>) -> AppResult<()> {
        let sessions = load_sessions(pool, bounds)?;

        match bounds {
            Some((s, e)) if s == e => println!("📅 Sessions for {s}:\n"),
            Some((s, e)) => println!("📅 Sessions from {s} to {e}:\n"),
            None => println!("📅 All sessions:\n"),
        }

        if sessions.is_empty() {
            info("No sessions found.");
            return Ok(());
        }

        let mut table = Table::with_headers(&["ID", "DATE", "SUBJECT", "TIME", "NOTES"]);
        for s in &sessions {
            table.add_row(vec![
                s.id.to_string(),
                s.date_str(),
                s.subject.clone(),
                mins2readable(s.minutes),
                truncate(&s.notes, 40),
            ]);
        }
        print!("{}", table.render());

        let total: i64 = sessions.iter().map(|s| s.minutes).sum();
        println!(
            "\n{} session(s), total {}",
            sessions.len(),
            mins2readable(total)
        );
        Ok(())
    }
}
