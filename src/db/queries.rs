use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::activity::ActivityRecord;
use crate::models::session::Session;
use crate::models::subject::Subject;
use chrono::{Local, NaiveDate};
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

/// Read a `YYYY-MM-DD` column, surfacing bad values as a conversion failure.
pub(crate) fn date_column(row: &Row, col: &str) -> Result<NaiveDate> {
    let raw: String = row.get(col)?;
    NaiveDate::parse_from_str(&raw, "%Y-%m-%d").map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidDateFormat(raw.clone())),
        )
    })
}

pub(crate) fn date_param(d: &NaiveDate) -> String {
    d.format("%Y-%m-%d").to_string()
}

fn collect<T>(rows: impl Iterator<Item = Result<T>>) -> Result<Vec<T>> {
    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

// ---------------------------
// Subjects
// ---------------------------

fn map_subject(row: &Row) -> Result<Subject> {
    Ok(Subject {
        id: row.get("id")?,
        name: row.get("name")?,
        color: row.get("color")?,
        created_at: row.get("created_at")?,
    })
}

pub fn insert_subject(conn: &Connection, name: &str, color: &str) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO subjects (name, color, created_at) VALUES (?1, ?2, ?3)",
        params![name, color, Local::now().to_rfc3339()],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn load_subjects(pool: &DbPool) -> AppResult<Vec<Subject>> {
    let mut stmt = pool
        .conn
        .prepare("SELECT * FROM subjects ORDER BY id ASC")?;
    let rows = stmt.query_map([], map_subject)?;
    Ok(collect(rows)?)
}

pub fn find_subject(conn: &Connection, id: i64) -> AppResult<Subject> {
    conn.query_row("SELECT * FROM subjects WHERE id = ?1", [id], map_subject)
        .optional()?
        .ok_or(AppError::SubjectNotFound(id))
}

pub fn update_subject(conn: &Connection, s: &Subject) -> AppResult<()> {
    conn.execute(
        "UPDATE subjects SET name = ?1, color = ?2 WHERE id = ?3",
        params![s.name, s.color, s.id],
    )?;
    Ok(())
}

pub fn delete_subject(conn: &Connection, id: i64) -> AppResult<()> {
    let n = conn.execute("DELETE FROM subjects WHERE id = ?1", [id])?;
    if n == 0 {
        return Err(AppError::SubjectNotFound(id));
    }
    Ok(())
}

// ---------------------------
// Sessions
// ---------------------------

pub fn map_session(row: &Row) -> Result<Session> {
    Ok(Session {
        id: row.get("id")?,
        subject: row.get("subject")?,
        minutes: row.get("minutes")?,
        date: date_column(row, "date")?,
        notes: row.get("notes")?,
        created_at: row.get("created_at")?,
    })
}

pub fn insert_session(conn: &Connection, s: &Session) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO sessions (subject, minutes, date, notes, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![s.subject, s.minutes, s.date_str(), s.notes, s.created_at],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Update a session (all fields except id and created_at)
pub fn update_session(conn: &Connection, s: &Session) -> AppResult<()> {
    conn.execute(
        "UPDATE sessions
         SET subject = ?1, minutes = ?2, date = ?3, notes = ?4
         WHERE id = ?5",
        params![s.subject, s.minutes, s.date_str(), s.notes, s.id],
    )?;
    Ok(())
}

pub fn find_session(conn: &Connection, id: i64) -> AppResult<Session> {
    conn.query_row("SELECT * FROM sessions WHERE id = ?1", [id], map_session)
        .optional()?
        .ok_or(AppError::SessionNotFound(id))
}

pub fn delete_session(conn: &Connection, id: i64) -> AppResult<()> {
    let n = conn.execute("DELETE FROM sessions WHERE id = ?1", [id])?;
    if n == 0 {
        return Err(AppError::SessionNotFound(id));
    }
    Ok(())
}

/// Sessions within optional inclusive bounds, newest first.
pub fn load_sessions(
    pool: &DbPool,
    bounds: Option<(NaiveDate, NaiveDate)>,
) -> AppResult<Vec<Session>> {
    let out = match bounds {
        None => {
            let mut stmt = pool
                .conn
                .prepare("SELECT * FROM sessions ORDER BY date DESC, id DESC")?;
            let rows = stmt.query_map([], map_session)?;
            collect(rows)?
        }
        Some((start, end)) => {
            let mut stmt = pool.conn.prepare(
                "SELECT * FROM sessions
                 WHERE date BETWEEN ?1 AND ?2
                 ORDER BY date DESC, id DESC",
            )?;
            let rows = stmt.query_map(params![date_param(&start), date_param(&end)], map_session)?;
            collect(rows)?
        }
    };
    Ok(out)
}

/// Raw (date, minutes) pairs for the statistics engine.
///
/// Dates are parsed here rather than in the row mapper, so a corrupt value
/// surfaces as `InvalidDateFormat` instead of a database error.
pub fn load_activity(pool: &DbPool) -> AppResult<Vec<ActivityRecord>> {
    let mut stmt = pool.conn.prepare("SELECT date, minutes FROM sessions")?;
    let rows = stmt.query_map([], |row| {
        Ok((row.get::<_, String>(0)?, row.get::<_, i64>(1)?))
    })?;

    let mut out = Vec::new();
    for r in rows {
        let (date, minutes) = r?;
        out.push(ActivityRecord::parse(&date, minutes)?);
    }
    Ok(out)
}

// ---------------------------
// Internal log
// ---------------------------

/// A row of the internal `log` table.
#[derive(Debug, Clone)]
pub struct LogEntry {
    pub id: i64,
    pub date: String,
    pub operation: String,
    pub target: String,
    pub message: String,
}

pub fn load_log(pool: &DbPool) -> AppResult<Vec<LogEntry>> {
    let mut stmt = pool.conn.prepare_cached(
        "SELECT id, date, operation, IFNULL(target, ''), message FROM log ORDER BY id ASC",
    )?;

    let rows = stmt.query_map([], |row| {
        Ok(LogEntry {
            id: row.get(0)?,
            date: row.get(1)?,
            operation: row.get(2)?,
            target: row.get(3)?,
            message: row.get(4)?,
        })
    })?;

    Ok(collect(rows)?)
}
