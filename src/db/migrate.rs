use crate::ui::messages::success;
use rusqlite::{Connection, OptionalExtension, Result};

/// A named schema step, applied at most once.
struct Migration {
    version: &'static str,
    description: &'static str,
    sql: &'static str,
}

const MIGRATIONS: &[Migration] = &[
    Migration {
        version: "20250301_0001_create_subjects_sessions",
        description: "Created subjects and sessions tables",
        sql: r#"
        CREATE TABLE IF NOT EXISTS subjects (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            name        TEXT NOT NULL,
            color       TEXT NOT NULL DEFAULT '#c77541',
            created_at  TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS sessions (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            subject     TEXT NOT NULL,
            minutes     INTEGER NOT NULL CHECK(minutes >= 0),
            date        TEXT NOT NULL,
            notes       TEXT NOT NULL DEFAULT '',
            created_at  TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_sessions_date ON sessions(date);
        "#,
    },
    Migration {
        version: "20250301_0002_create_tasks",
        description: "Created tasks and task_completions tables",
        sql: r#"
        CREATE TABLE IF NOT EXISTS tasks (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            name        TEXT NOT NULL,
            created_on  TEXT NOT NULL,
            created_at  TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS task_completions (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            item_id     INTEGER NOT NULL,
            date        TEXT NOT NULL,
            completed   INTEGER NOT NULL DEFAULT 1,
            updated_at  TEXT NOT NULL
        );

        CREATE UNIQUE INDEX IF NOT EXISTS idx_task_completions_item_date
            ON task_completions(item_id, date);
        CREATE INDEX IF NOT EXISTS idx_task_completions_date ON task_completions(date);
        "#,
    },
    Migration {
        version: "20250301_0003_create_habits",
        description: "Created habits and habit_completions tables",
        sql: r#"
        CREATE TABLE IF NOT EXISTS habits (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            name        TEXT NOT NULL,
            emoji       TEXT NOT NULL DEFAULT '',
            goal        INTEGER NOT NULL DEFAULT 30,
            created_on  TEXT NOT NULL,
            created_at  TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS habit_completions (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            item_id     INTEGER NOT NULL,
            date        TEXT NOT NULL,
            completed   INTEGER NOT NULL DEFAULT 1,
            updated_at  TEXT NOT NULL
        );

        CREATE UNIQUE INDEX IF NOT EXISTS idx_habit_completions_item_date
            ON habit_completions(item_id, date);
        CREATE INDEX IF NOT EXISTS idx_habit_completions_date ON habit_completions(date);
        "#,
    },
];

/// Ensure that the `log` table exists: it also records applied migrations.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn is_applied(conn: &Connection, version: &str) -> Result<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

fn apply(conn: &Connection, m: &Migration) -> Result<()> {
    let tx = conn.unchecked_transaction()?;
    tx.execute_batch(m.sql)?;
    tx.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, ?2)",
        [m.version, m.description],
    )?;
    tx.commit()?;

    success(format!("Migration applied: {} → {}", m.version, m.description));
    Ok(())
}

/// Names of migrations not yet applied, in order.
pub fn pending_migrations(conn: &Connection) -> Result<Vec<&'static str>> {
    ensure_log_table(conn)?;

    let mut out = Vec::new();
    for m in MIGRATIONS {
        if !is_applied(conn, m.version)? {
            out.push(m.version);
        }
    }
    Ok(out)
}

/// Public entry point: run all pending migrations.
///
/// Invoked by `init`, `DbPool::open` and `db --migrate`. Returns how many ran.
pub fn run_pending_migrations(conn: &Connection) -> Result<usize> {
    ensure_log_table(conn)?;

    let mut applied = 0;
    for m in MIGRATIONS {
        if !is_applied(conn, m.version)? {
            apply(conn, m)?;
            applied += 1;
        }
    }

    Ok(applied)
}
