use crate::errors::AppResult;
use crate::utils::date::parse_date;
use chrono::NaiveDate;
use serde::Serialize;

/// One unit of tracked activity: a calendar day and a duration.
///
/// Several records may share the same date; the statistics engine sums them
/// per day before looking at streaks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ActivityRecord {
    pub date: NaiveDate,
    pub duration_minutes: i64,
}

impl ActivityRecord {
    pub fn new(date: NaiveDate, duration_minutes: i64) -> Self {
        Self {
            date,
            duration_minutes,
        }
    }

    /// Build a record from a `YYYY-MM-DD` string.
    pub fn parse(date: &str, duration_minutes: i64) -> AppResult<Self> {
        Ok(Self::new(parse_date(date)?, duration_minutes))
    }
}
