use crate::core::calculator::breakdown;
use crate::core::calculator::streak::{DayTotals, aggregate_by_day};
use crate::core::calculator::{compute_completion_series, compute_stats};
use crate::db::completions::{load_completions, load_habits, load_tasks};
use crate::db::pool::DbPool;
use crate::db::queries::{load_activity, load_sessions, load_subjects};
use crate::errors::AppResult;
use crate::models::completion::{CompletionKind, CompletionMark};
use crate::models::stats::{ChartBar, CompletionSeries, StatsResult};
use crate::models::task::TaskRecord;
use chrono::NaiveDate;

/// Loads records from the database and feeds them to the calculators.
pub struct Core;

impl Core {
    /// Totals and streaks over every recorded session.
    pub fn session_stats(pool: &DbPool, today: NaiveDate) -> AppResult<StatsResult> {
        let records = load_activity(pool)?;
        compute_stats(&records, today)
    }

    /// Minutes per calendar day over every recorded session.
    pub fn day_totals(pool: &DbPool) -> AppResult<DayTotals> {
        let records = load_activity(pool)?;
        aggregate_by_day(&records)
    }

    /// Completion percentages of tasks or habits over `dates`.
    pub fn completion_series(
        pool: &DbPool,
        kind: CompletionKind,
        dates: &[NaiveDate],
    ) -> AppResult<CompletionSeries> {
        let items: Vec<TaskRecord> = match kind {
            CompletionKind::Task => load_tasks(pool)?.iter().map(TaskRecord::from).collect(),
            CompletionKind::Habit => load_habits(pool)?.iter().map(TaskRecord::from).collect(),
        };

        let bounds = match (dates.iter().min(), dates.iter().max()) {
            (Some(s), Some(e)) => Some((*s, *e)),
            _ => return Ok(compute_completion_series(&items, &[], dates)),
        };

        let marks: Vec<CompletionMark> = load_completions(pool, kind, bounds)?
            .iter()
            .map(|c| c.to_mark())
            .collect();

        Ok(compute_completion_series(&items, &marks, dates))
    }

    pub fn daily_chart(pool: &DbPool, day: NaiveDate) -> AppResult<Vec<ChartBar>> {
        let subjects = load_subjects(pool)?;
        let sessions = load_sessions(pool, Some((day, day)))?;
        Ok(breakdown::daily_by_subject(&sessions, &subjects, day))
    }

    pub fn subjects_chart(pool: &DbPool, top: usize) -> AppResult<Vec<ChartBar>> {
        let subjects = load_subjects(pool)?;
        let sessions = load_sessions(pool, None)?;
        Ok(breakdown::subject_breakdown(&sessions, &subjects, top))
    }
}
