//! Tasks, habits and their per-day completion marks.

use crate::db::pool::DbPool;
use crate::db::queries::{date_column, date_param};
use crate::errors::{AppError, AppResult};
use crate::models::completion::{Completion, CompletionKind};
use crate::models::task::{Habit, Task};
use chrono::{Local, NaiveDate};
use rusqlite::{Connection, OptionalExtension, Result, Row, params};
use std::collections::HashMap;

fn not_found(kind: CompletionKind, id: i64) -> AppError {
    match kind {
        CompletionKind::Task => AppError::TaskNotFound(id),
        CompletionKind::Habit => AppError::HabitNotFound(id),
    }
}

// ---------------------------
// Tasks
// ---------------------------

fn map_task(row: &Row) -> Result<Task> {
    Ok(Task {
        id: row.get("id")?,
        name: row.get("name")?,
        created_on: date_column(row, "created_on")?,
        created_at: row.get("created_at")?,
    })
}

pub fn insert_task(conn: &Connection, name: &str, created_on: NaiveDate) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO tasks (name, created_on, created_at) VALUES (?1, ?2, ?3)",
        params![name, date_param(&created_on), Local::now().to_rfc3339()],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn load_tasks(pool: &DbPool) -> AppResult<Vec<Task>> {
    let mut stmt = pool
        .conn
        .prepare("SELECT * FROM tasks ORDER BY created_on DESC, id DESC")?;
    let rows = stmt.query_map([], map_task)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn find_task(conn: &Connection, id: i64) -> AppResult<Task> {
    conn.query_row("SELECT * FROM tasks WHERE id = ?1", [id], map_task)
        .optional()?
        .ok_or(AppError::TaskNotFound(id))
}

pub fn rename_task(conn: &Connection, id: i64, name: &str) -> AppResult<()> {
    let n = conn.execute("UPDATE tasks SET name = ?1 WHERE id = ?2", params![name, id])?;
    if n == 0 {
        return Err(AppError::TaskNotFound(id));
    }
    Ok(())
}

// ---------------------------
// Habits
// ---------------------------

fn map_habit(row: &Row) -> Result<Habit> {
    Ok(Habit {
        id: row.get("id")?,
        name: row.get("name")?,
        emoji: row.get("emoji")?,
        goal: row.get("goal")?,
        created_on: date_column(row, "created_on")?,
        created_at: row.get("created_at")?,
    })
}

pub fn insert_habit(
    conn: &Connection,
    name: &str,
    emoji: &str,
    goal: i64,
    created_on: NaiveDate,
) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO habits (name, emoji, goal, created_on, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![name, emoji, goal, date_param(&created_on), Local::now().to_rfc3339()],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn load_habits(pool: &DbPool) -> AppResult<Vec<Habit>> {
    let mut stmt = pool
        .conn
        .prepare("SELECT * FROM habits ORDER BY created_on DESC, id DESC")?;
    let rows = stmt.query_map([], map_habit)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn find_habit(conn: &Connection, id: i64) -> AppResult<Habit> {
    conn.query_row("SELECT * FROM habits WHERE id = ?1", [id], map_habit)
        .optional()?
        .ok_or(AppError::HabitNotFound(id))
}

pub fn update_habit(conn: &Connection, h: &Habit) -> AppResult<()> {
    conn.execute(
        "UPDATE habits SET name = ?1, emoji = ?2, goal = ?3 WHERE id = ?4",
        params![h.name, h.emoji, h.goal, h.id],
    )?;
    Ok(())
}

// ---------------------------
// Shared: delete + completions
// ---------------------------

/// Names of every task or habit, keyed by id.
pub fn item_names(pool: &DbPool, kind: CompletionKind) -> AppResult<HashMap<i64, String>> {
    let mut stmt = pool
        .conn
        .prepare(&format!("SELECT id, name FROM {}", kind.item_table()))?;
    let rows = stmt.query_map([], |row| Ok((row.get(0)?, row.get(1)?)))?;

    let mut out = HashMap::new();
    for r in rows {
        let (id, name) = r?;
        out.insert(id, name);
    }
    Ok(out)
}

/// Delete an item together with all of its completion marks.
pub fn delete_item(pool: &mut DbPool, kind: CompletionKind, id: i64) -> AppResult<()> {
    let tx = pool.conn.transaction()?;

    let n = tx.execute(
        &format!("DELETE FROM {} WHERE id = ?1", kind.item_table()),
        [id],
    )?;
    if n == 0 {
        return Err(not_found(kind, id));
    }

    tx.execute(
        &format!("DELETE FROM {} WHERE item_id = ?1", kind.completion_table()),
        [id],
    )?;

    tx.commit()?;
    Ok(())
}

fn map_completion(row: &Row) -> Result<Completion> {
    Ok(Completion {
        id: row.get("id")?,
        item_id: row.get("item_id")?,
        date: date_column(row, "date")?,
        completed: row.get::<_, i64>("completed")? == 1,
    })
}

/// Flip the mark for (item, date); a missing mark becomes `completed = true`.
/// Returns the stored state after the toggle.
pub fn toggle_completion(
    conn: &Connection,
    kind: CompletionKind,
    item_id: i64,
    date: NaiveDate,
) -> AppResult<Completion> {
    let exists: Option<i64> = conn
        .query_row(
            &format!("SELECT id FROM {} WHERE id = ?1", kind.item_table()),
            [item_id],
            |row| row.get(0),
        )
        .optional()?;
    if exists.is_none() {
        return Err(not_found(kind, item_id));
    }

    let table = kind.completion_table();
    let now = Local::now().to_rfc3339();

    conn.execute(
        &format!(
            "INSERT INTO {table} (item_id, date, completed, updated_at)
             VALUES (?1, ?2, 1, ?3)
             ON CONFLICT(item_id, date)
             DO UPDATE SET completed = 1 - completed, updated_at = excluded.updated_at"
        ),
        params![item_id, date_param(&date), now],
    )?;

    let c = conn.query_row(
        &format!("SELECT * FROM {table} WHERE item_id = ?1 AND date = ?2"),
        params![item_id, date_param(&date)],
        map_completion,
    )?;
    Ok(c)
}

/// Completion marks of one kind within optional inclusive bounds.
pub fn load_completions(
    pool: &DbPool,
    kind: CompletionKind,
    bounds: Option<(NaiveDate, NaiveDate)>,
) -> AppResult<Vec<Completion>> {
    let table = kind.completion_table();
    let (start, end) = match bounds {
        Some((s, e)) => (date_param(&s), date_param(&e)),
        None => ("0000-01-01".to_string(), "9999-12-31".to_string()),
    };

    let mut stmt = pool.conn.prepare(&format!(
        "SELECT * FROM {table}
         WHERE date BETWEEN ?1 AND ?2
         ORDER BY date ASC, item_id ASC"
    ))?;
    let rows = stmt.query_map(params![start, end], map_completion)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Number of completed marks for an item within inclusive bounds.
pub fn count_completed(
    conn: &Connection,
    kind: CompletionKind,
    item_id: i64,
    start: NaiveDate,
    end: NaiveDate,
) -> AppResult<i64> {
    let n = conn.query_row(
        &format!(
            "SELECT COUNT(*) FROM {}
             WHERE item_id = ?1 AND completed = 1 AND date BETWEEN ?2 AND ?3",
            kind.completion_table()
        ),
        params![item_id, date_param(&start), date_param(&end)],
        |row| row.get(0),
    )?;
    Ok(n)
}
