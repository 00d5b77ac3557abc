//! Tasks and habits: CRUD plus the daily completion toggle.

use crate::config::Config;
use crate::db::completions::{
    count_completed, delete_item, find_habit, insert_habit, insert_task, item_names,
    load_completions, load_habits, load_tasks, rename_task, toggle_completion, update_habit,
};
use crate::db::log::audit;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::completion::{Completion, CompletionKind};
use crate::models::subject::required_name;
use crate::models::task::Habit;
use crate::ui::messages::{info, success};
use crate::utils::date::{all_days_of_month, format_date};
use crate::utils::table::Table;
use chrono::{Datelike, NaiveDate};

fn validate_goal(goal: i64) -> AppResult<i64> {
    if goal <= 0 {
        return Err(AppError::InvalidGoal(goal));
    }
    Ok(goal)
}

/// Toggle the mark of a task or habit on `date`.
pub fn toggle(
    pool: &mut DbPool,
    kind: CompletionKind,
    id: i64,
    date: NaiveDate,
) -> AppResult<Completion> {
    let c = toggle_completion(&pool.conn, kind, id, date)?;
    let state = if c.completed { "done" } else { "not done" };

    audit(
        &pool.conn,
        "toggle",
        &format!("{} #{id}", kind.label()),
        &format!("{} marked {state}", format_date(&date)),
    );

    success(format!(
        "{} #{id} on {} marked as {state}.",
        capitalize(kind.label()),
        format_date(&date)
    ));
    Ok(c)
}

/// Delete a task or habit and its completion history.
pub fn delete(pool: &mut DbPool, kind: CompletionKind, id: i64) -> AppResult<()> {
    delete_item(pool, kind, id)?;
    audit(
        &pool.conn,
        "del",
        &format!("{} #{id}", kind.label()),
        "Deleted with all completions",
    );
    success(format!("{} #{id} deleted.", capitalize(kind.label())));
    Ok(())
}

/// Print completion marks in a period, with item names.
pub fn print_completions(
    pool: &DbPool,
    kind: CompletionKind,
    bounds: Option<(NaiveDate, NaiveDate)>,
) -> AppResult<()> {
    let names = item_names(pool, kind)?;
    let marks = load_completions(pool, kind, bounds)?;

    if marks.is_empty() {
        info(format!("No {} completions found.", kind.label()));
        return Ok(());
    }

    let mut table = Table::with_headers(&["DATE", "ID", "NAME", "DONE"]);
    for m in &marks {
        table.add_row(vec![
            format_date(&m.date),
            m.item_id.to_string(),
            names.get(&m.item_id).cloned().unwrap_or_else(|| "?".into()),
            if m.completed { "yes" } else { "no" }.to_string(),
        ]);
    }
    print!("{}", table.render());
    Ok(())
}

fn capitalize(s: &str) -> String {
    let mut c = s.chars();
    match c.next() {
        Some(f) => f.to_uppercase().collect::<String>() + c.as_str(),
        None => String::new(),
    }
}

/// Business logic for the `task` command.
pub struct TaskLogic;

impl TaskLogic {
    pub fn add(pool: &mut DbPool, name: &str, created_on: NaiveDate) -> AppResult<i64> {
        let name = required_name(name, "Task")?;
        let id = insert_task(&pool.conn, &name, created_on)?;

        audit(
            &pool.conn,
            "add",
            &format!("task #{id}"),
            &format!("Added task '{name}' counting from {}", format_date(&created_on)),
        );
        success(format!("Task #{id} '{name}' added."));
        Ok(id)
    }

    pub fn rename(pool: &mut DbPool, id: i64, name: &str) -> AppResult<()> {
        let name = required_name(name, "Task")?;
        rename_task(&pool.conn, id, &name)?;

        audit(&pool.conn, "edit", &format!("task #{id}"), &format!("Renamed to '{name}'"));
        success(format!("Task #{id} renamed to '{name}'."));
        Ok(())
    }

    pub fn print_list(pool: &DbPool, today: NaiveDate) -> AppResult<()> {
        let tasks = load_tasks(pool)?;
        if tasks.is_empty() {
            info("No tasks yet. Add one with `studylog task add <NAME>`.");
            return Ok(());
        }

        let done_today: Vec<i64> = load_completions(pool, CompletionKind::Task, Some((today, today)))?
            .into_iter()
            .filter(|c| c.completed)
            .map(|c| c.item_id)
            .collect();

        let mut table = Table::with_headers(&["ID", "NAME", "SINCE", "TODAY"]);
        for t in &tasks {
            let mark = if done_today.contains(&t.id) { "✔" } else { "·" };
            table.add_row(vec![
                t.id.to_string(),
                t.name.clone(),
                format_date(&t.created_on),
                mark.to_string(),
            ]);
        }
        println!("📝 Tasks ({}):\n", format_date(&today));
        print!("{}", table.render());
        Ok(())
    }
}

/// Business logic for the `habit` command.
pub struct HabitLogic;

impl HabitLogic {
    pub fn add(
        pool: &mut DbPool,
        cfg: &Config,
        name: &str,
        emoji: Option<&str>,
        goal: Option<i64>,
        created_on: NaiveDate,
    ) -> AppResult<i64> {
        let name = required_name(name, "Habit")?;
        let goal = validate_goal(goal.unwrap_or(cfg.default_habit_goal))?;
        let emoji = emoji.map(str::trim).unwrap_or("");

        let id = insert_habit(&pool.conn, &name, emoji, goal, created_on)?;
        audit(
            &pool.conn,
            "add",
            &format!("habit #{id}"),
            &format!("Added habit '{name}' (goal {goal} min)"),
        );
        success(format!("Habit #{id} '{name}' added."));
        Ok(id)
    }

    pub fn edit(
        pool: &mut DbPool,
        id: i64,
        name: Option<&str>,
        emoji: Option<&str>,
        goal: Option<i64>,
    ) -> AppResult<Habit> {
        let mut habit = find_habit(&pool.conn, id)?;

        if let Some(n) = name {
            habit.name = required_name(n, "Habit")?;
        }
        if let Some(e) = emoji {
            habit.emoji = e.trim().to_string();
        }
        if let Some(g) = goal {
            habit.goal = validate_goal(g)?;
        }

        update_habit(&pool.conn, &habit)?;
        audit(
            &pool.conn,
            "edit",
            &format!("habit #{id}"),
            &format!("name='{}' goal={}", habit.name, habit.goal),
        );
        success(format!("Habit #{id} updated."));
        Ok(habit)
    }

    /// List habits with how many days they were done this month.
    pub fn print_list(pool: &DbPool, today: NaiveDate) -> AppResult<()> {
        let habits = load_habits(pool)?;
        if habits.is_empty() {
            info("No habits yet. Add one with `studylog habit add <NAME>`.");
            return Ok(());
        }

        let month = all_days_of_month(today.year(), today.month())?;
        let (first, last) = match (month.first(), month.last()) {
            (Some(f), Some(l)) => (*f, *l),
            _ => (today, today),
        };

        let mut table = Table::with_headers(&["ID", "HABIT", "GOAL", "SINCE", "THIS MONTH"]);
        for h in &habits {
            let done = count_completed(&pool.conn, CompletionKind::Habit, h.id, first, last)?;
            let label = if h.emoji.is_empty() {
                h.name.clone()
            } else {
                format!("{} {}", h.emoji, h.name)
            };
            table.add_row(vec![
                h.id.to_string(),
                label,
                format!("{} min", h.goal),
                format_date(&h.created_on),
                format!("{done} day(s)"),
            ]);
        }
        println!("🔁 Habits ({}):\n", today.format("%B %Y"));
        print!("{}", table.render());
        Ok(())
    }
}
