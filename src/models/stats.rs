use chrono::NaiveDate;
use serde::{Serialize, Serializer};
use std::collections::BTreeMap;

/// Totals and streaks computed over a set of activity records.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsResult {
    pub total_minutes: i64,
    #[serde(serialize_with = "date_or_empty")]
    pub best_date: Option<NaiveDate>,
    pub best_date_minutes: i64,
    pub current_streak: u32,
    pub highest_streak: u32,
}

fn date_or_empty<S: Serializer>(d: &Option<NaiveDate>, s: S) -> Result<S::Ok, S::Error> {
    match d {
        Some(d) => s.serialize_str(&d.format("%Y-%m-%d").to_string()),
        None => s.serialize_str(""),
    }
}

/// Completion figures for one day of a series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DailyCompletion {
    pub date: NaiveDate,
    /// Items that already existed on this day.
    pub eligible: u32,
    pub completed: u32,
    pub percentage: u32,
}

/// Per-day completion percentages plus their aggregate.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CompletionSeries {
    /// One entry per requested date, in the order the dates were supplied.
    pub days: Vec<DailyCompletion>,
    pub aggregate_percentage: u32,
}

impl CompletionSeries {
    pub fn per_date_percentage(&self) -> BTreeMap<NaiveDate, u32> {
        self.days.iter().map(|d| (d.date, d.percentage)).collect()
    }

    pub fn percentage_for(&self, date: NaiveDate) -> Option<u32> {
        self.days
            .iter()
            .find(|d| d.date == date)
            .map(|d| d.percentage)
    }

    pub fn total_completed(&self) -> u32 {
        self.days.iter().map(|d| d.completed).sum()
    }

    pub fn total_possible(&self) -> u32 {
        self.days.iter().map(|d| d.eligible).sum()
    }

    /// Days on which every eligible item was completed.
    pub fn full_days(&self) -> usize {
        self.days
            .iter()
            .filter(|d| d.eligible > 0 && d.completed == d.eligible)
            .count()
    }
}

/// A labelled value for bar-style text charts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChartBar {
    pub label: String,
    pub minutes: i64,
}

impl ChartBar {
    pub fn new(label: impl Into<String>, minutes: i64) -> Self {
        Self {
            label: label.into(),
            minutes,
        }
    }
}
