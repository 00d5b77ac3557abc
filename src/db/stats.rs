use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use crate::utils::date::parse_date;
use crate::utils::formatting::mins2readable;
use rusqlite::OptionalExtension;
use std::fs;

const TABLES: &[&str] = &[
    "subjects",
    "sessions",
    "tasks",
    "task_completions",
    "habits",
    "habit_completions",
    "log",
];

pub fn print_db_info(pool: &DbPool, db_path: &str) -> AppResult<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_mb = (file_size as f64) / (1024.0 * 1024.0);

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.2} MB", CYAN, RESET, file_mb);

    //
    // 2) ROW COUNTS
    //
    println!("{}• Rows:{}", CYAN, RESET);
    for table in TABLES {
        let count: i64 =
            pool.conn
                .query_row(&format!("SELECT COUNT(*) FROM {table}"), [], |row| row.get(0))?;
        println!("    {:<18} {}{}{}", table, GREEN, count, RESET);
    }

    //
    // 3) SESSION DATE RANGE
    //
    let first_date: Option<String> = pool
        .conn
        .query_row(
            "SELECT date FROM sessions ORDER BY date ASC LIMIT 1",
            [],
            |row| row.get(0),
        )
        .optional()?;

    let last_date: Option<String> = pool
        .conn
        .query_row(
            "SELECT date FROM sessions ORDER BY date DESC LIMIT 1",
            [],
            |row| row.get(0),
        )
        .optional()?;

    let fmt_first = first_date
        .clone()
        .unwrap_or_else(|| format!("{GREY}--{RESET}"));
    let fmt_last = last_date
        .clone()
        .unwrap_or_else(|| format!("{GREY}--{RESET}"));

    println!("{}• Session range:{}", CYAN, RESET);
    println!("    from: {}", fmt_first);
    println!("    to:   {}", fmt_last);

    //
    // 4) AVERAGE MINUTES PER ACTIVE DAY
    //
    if first_date.is_some() {
        let (days, minutes): (i64, i64) = pool.conn.query_row(
            "SELECT COUNT(DISTINCT date), IFNULL(SUM(minutes), 0) FROM sessions",
            [],
            |row| Ok((row.get(0)?, row.get(1)?)),
        )?;
        let avg = minutes / days.max(1);
        println!(
            "{}• Average per active day:{} {}",
            CYAN,
            RESET,
            mins2readable(avg)
        );
    }

    if let (Some(f), Some(l)) = (first_date, last_date) {
        let span = (parse_date(&l)? - parse_date(&f)?).num_days() + 1;
        println!("{}• Days covered:{} {}", CYAN, RESET, span);
    }

    println!();
    Ok(())
}
