use chrono::NaiveDate;
use serde::Serialize;

/// A recurring to-do checked off day by day.
#[derive(Debug, Clone, Serialize)]
pub struct Task {
    pub id: i64,
    pub name: String,
    pub created_on: NaiveDate, // first day the task counts
    pub created_at: String,
}

/// A habit with a daily goal in minutes.
#[derive(Debug, Clone, Serialize)]
pub struct Habit {
    pub id: i64,
    pub name: String,
    pub emoji: String,
    pub goal: i64,
    pub created_on: NaiveDate,
    pub created_at: String,
}

/// Minimal view of a recurring item for completion percentages:
/// an identifier and the day from which it counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskRecord {
    pub id: i64,
    pub created: NaiveDate,
}

impl TaskRecord {
    pub fn new(id: i64, created: NaiveDate) -> Self {
        Self { id, created }
    }
}

impl From<&Task> for TaskRecord {
    fn from(t: &Task) -> Self {
        Self::new(t.id, t.created_on)
    }
}

impl From<&Habit> for TaskRecord {
    fn from(h: &Habit) -> Self {
        Self::new(h.id, h.created_on)
    }
}
