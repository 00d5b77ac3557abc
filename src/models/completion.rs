use chrono::NaiveDate;
use serde::Serialize;

/// Which family of recurring items a completion belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompletionKind {
    Task,
    Habit,
}

impl CompletionKind {
    /// Table holding the items themselves.
    pub fn item_table(&self) -> &'static str {
        match self {
            CompletionKind::Task => "tasks",
            CompletionKind::Habit => "habits",
        }
    }

    /// Table holding the per-day marks.
    pub fn completion_table(&self) -> &'static str {
        match self {
            CompletionKind::Task => "task_completions",
            CompletionKind::Habit => "habit_completions",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CompletionKind::Task => "task",
            CompletionKind::Habit => "habit",
        }
    }
}

/// A stored completion row.
#[derive(Debug, Clone, Serialize)]
pub struct Completion {
    pub id: i64,
    pub item_id: i64,
    pub date: NaiveDate,
    pub completed: bool,
}

impl Completion {
    pub fn to_mark(&self) -> CompletionMark {
        CompletionMark::new(self.item_id, self.date, self.completed)
    }
}

/// A (task, day) pair and whether it was completed.
/// A pair without any mark counts as not completed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompletionMark {
    pub task_id: i64,
    pub date: NaiveDate,
    pub completed: bool,
}

impl CompletionMark {
    pub fn new(task_id: i64, date: NaiveDate, completed: bool) -> Self {
        Self {
            task_id,
            date,
            completed,
        }
    }
}
