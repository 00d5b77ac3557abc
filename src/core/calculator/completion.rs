//! Completion percentages for recurring items (tasks, habits).
//!
//! An item only counts on the days it already existed: one created on day N
//! is left out of both numerator and denominator before N.

use crate::models::completion::CompletionMark;
use crate::models::stats::{CompletionSeries, DailyCompletion};
use crate::models::task::TaskRecord;
use chrono::NaiveDate;
use std::collections::HashMap;

fn percent(part: u32, whole: u32) -> u32 {
    if whole == 0 {
        return 0;
    }
    (100.0 * part as f64 / whole as f64).round() as u32
}

/// Percentages for each of `dates`, in the order given, plus their mean.
///
/// A day with no eligible item scores 0 and still counts in the mean, so the
/// aggregate always averages over `dates.len()` days.
pub fn compute_completion_series(
    tasks: &[TaskRecord],
    completions: &[CompletionMark],
    dates: &[NaiveDate],
) -> CompletionSeries {
    // Later marks for the same (task, day) override earlier ones.
    let marks: HashMap<(i64, NaiveDate), bool> = completions
        .iter()
        .map(|m| ((m.task_id, m.date), m.completed))
        .collect();

    let days: Vec<DailyCompletion> = dates
        .iter()
        .map(|&date| {
            let eligible: Vec<&TaskRecord> = tasks.iter().filter(|t| t.created <= date).collect();
            let completed = eligible
                .iter()
                .filter(|t| marks.get(&(t.id, date)).copied().unwrap_or(false))
                .count() as u32;
            let eligible = eligible.len() as u32;

            DailyCompletion {
                date,
                eligible,
                completed,
                percentage: percent(completed, eligible),
            }
        })
        .collect();

    let aggregate_percentage = if days.is_empty() {
        0
    } else {
        let sum: u32 = days.iter().map(|d| d.percentage).sum();
        (sum as f64 / days.len() as f64).round() as u32
    };

    CompletionSeries {
        days,
        aggregate_percentage,
    }
}
