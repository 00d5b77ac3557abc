use crate::db::pool::DbPool;
use crate::db::queries::load_log;
use crate::errors::AppResult;
use crate::ui::messages::info;
use ansi_term::Colour;
use regex::Regex;
use std::sync::LazyLock;

const OP_WIDTH: usize = 60;

static ANSI_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\x1B\[[0-9;]*[mK]").expect("static ANSI pattern"));

fn strip_ansi(s: &str) -> String {
    ANSI_RE.replace_all(s, "").into_owned()
}

/// Colour for an audit operation.
fn color_for_operation(op: &str) -> Colour {
    match op {
        "add" => Colour::Green,
        "del" => Colour::Red,
        "edit" => Colour::Yellow,
        "toggle" => Colour::Cyan,
        "migration_applied" => Colour::Purple,
        "backup" | "export" => Colour::Blue,
        "init" => Colour::RGB(255, 153, 51),
        _ => Colour::White,
    }
}

pub struct LogLogic;

impl LogLogic {
    pub fn print_log(pool: &DbPool) -> AppResult<()> {
        let entries = load_log(pool)?;
        if entries.is_empty() {
            info("The internal log is empty.");
            return Ok(());
        }

        let rows: Vec<(i64, String, String, String, &str)> = entries
            .iter()
            .map(|e| {
                let date = chrono::DateTime::parse_from_rfc3339(&e.date)
                    .map(|dt| dt.format("%FT%T%:z").to_string())
                    .unwrap_or_else(|_| e.date.clone());
                let op_target = if e.target.is_empty() {
                    e.operation.clone()
                } else {
                    format!("{} ({})", e.operation, e.target)
                };
                (e.id, date, e.operation.clone(), op_target, e.message.as_str())
            })
            .collect();

        let op_w = rows
            .iter()
            .map(|r| r.3.chars().count())
            .max()
            .unwrap_or(10)
            .min(OP_WIDTH);
        let id_w = rows.iter().map(|r| r.0.to_string().len()).max().unwrap_or(1);
        let date_w = rows.iter().map(|r| r.1.len()).max().unwrap_or(10);

        println!("📜 Internal log:\n");

        for (id, date, operation, op_target, message) in rows {
            let color = color_for_operation(&operation);

            let visible = if op_target.chars().count() > OP_WIDTH {
                let mut s: String = op_target.chars().take(OP_WIDTH - 3).collect();
                s.push_str("...");
                s
            } else {
                op_target
            };

            // only the operation word is coloured
            let colored = match visible.split_once(' ') {
                Some((op_word, rest)) => format!("{} {}", color.paint(op_word), rest),
                None => color.paint(visible.as_str()).to_string(),
            };

            let padding = " ".repeat(op_w.saturating_sub(strip_ansi(&colored).chars().count()));

            println!("{id:>id_w$}: {date:<date_w$} | {colored}{padding} => {message}");
        }

        Ok(())
    }
}
