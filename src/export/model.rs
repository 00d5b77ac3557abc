// src/export/model.rs

use crate::models::completion::Completion;
use crate::models::session::Session;
use crate::utils::date::format_date;
use serde::Serialize;

/// Flat session row for CSV / JSON.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct SessionExport {
    pub id: i64,
    pub date: String,
    pub subject: String,
    pub minutes: i64,
    pub notes: String,
}

impl From<&Session> for SessionExport {
    fn from(s: &Session) -> Self {
        Self {
            id: s.id,
            date: s.date_str(),
            subject: s.subject.clone(),
            minutes: s.minutes,
            notes: s.notes.clone(),
        }
    }
}

/// Flat completion mark joined with its task or habit name.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct CompletionExport {
    pub date: String,
    pub item_id: i64,
    pub name: String,
    pub completed: bool,
}

impl CompletionExport {
    pub fn new(c: &Completion, name: &str) -> Self {
        Self {
            date: format_date(&c.date),
            item_id: c.item_id,
            name: name.to_string(),
            completed: c.completed,
        }
    }
}
