use chrono::{Local, NaiveDate};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct Session {
    pub id: i64,
    pub subject: String,    // ⇔ sessions.subject (name, kept even if the subject is deleted)
    pub minutes: i64,       // ⇔ sessions.minutes (INT, > 0)
    pub date: NaiveDate,    // ⇔ sessions.date (TEXT "YYYY-MM-DD")
    pub notes: String,      // ⇔ sessions.notes (TEXT, default '')
    pub created_at: String, // ⇔ sessions.created_at (TEXT, ISO8601)
}

impl Session {
    /// New, not yet persisted session (`id = 0`).
    pub fn new(subject: &str, minutes: i64, date: NaiveDate, notes: Option<&str>) -> Self {
        Self {
            id: 0,
            subject: subject.trim().to_string(),
            minutes,
            date,
            notes: notes.map(|n| n.trim().to_string()).unwrap_or_default(),
            created_at: Local::now().to_rfc3339(),
        }
    }

    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }
}
