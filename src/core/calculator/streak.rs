//! Totals, best day and streaks over daily activity.
//!
//! Dates are `NaiveDate` throughout: two days are consecutive when the later
//! one is exactly one calendar day after the earlier one, whatever the time
//! or timezone the underlying records were created in.

use crate::errors::{AppError, AppResult};
use crate::models::activity::ActivityRecord;
use crate::models::stats::StatsResult;
use crate::utils::date::format_date;
use chrono::NaiveDate;
use std::collections::BTreeMap;

/// Per-day sums, iterated in ascending date order.
pub type DayTotals = BTreeMap<NaiveDate, i64>;

/// Sum durations per calendar day. Negative durations are rejected, and so
/// are sums that do not fit in an `i64`.
pub fn aggregate_by_day(records: &[ActivityRecord]) -> AppResult<DayTotals> {
    let mut totals = DayTotals::new();

    for r in records {
        if r.duration_minutes < 0 {
            return Err(AppError::NegativeDuration(r.duration_minutes));
        }
        let day = totals.entry(r.date).or_insert(0);
        *day = day
            .checked_add(r.duration_minutes)
            .ok_or_else(|| AppError::DurationOverflow(format_date(&r.date)))?;
    }

    Ok(totals)
}

/// Compute totals and streaks for `records` as seen on `today`.
pub fn compute_stats(records: &[ActivityRecord], today: NaiveDate) -> AppResult<StatsResult> {
    let totals = aggregate_by_day(records)?;
    stats_from_totals(&totals, today)
}

/// Same as [`compute_stats`], for callers that already hold day totals.
pub fn stats_from_totals(totals: &DayTotals, today: NaiveDate) -> AppResult<StatsResult> {
    if totals.is_empty() {
        return Ok(StatsResult::default());
    }

    let total_minutes = totals
        .values()
        .try_fold(0i64, |acc, m| acc.checked_add(*m))
        .ok_or_else(|| AppError::DurationOverflow("all days".into()))?;

    // Ties keep the earliest day: only a strictly greater total replaces it.
    let mut best_date = None;
    let mut best_date_minutes = 0;
    for (date, minutes) in totals {
        if *minutes > best_date_minutes {
            best_date = Some(*date);
            best_date_minutes = *minutes;
        }
    }

    let dates: Vec<NaiveDate> = totals.keys().copied().collect();

    Ok(StatsResult {
        total_minutes,
        best_date,
        best_date_minutes,
        current_streak: current_streak(&dates, today),
        highest_streak: highest_streak(&dates),
    })
}

fn is_next_day(prev: NaiveDate, next: NaiveDate) -> bool {
    (next - prev).num_days() == 1
}

/// Longest run of consecutive days in `dates` (sorted ascending, distinct).
pub fn highest_streak(dates: &[NaiveDate]) -> u32 {
    if dates.is_empty() {
        return 0;
    }

    let mut best = 1;
    let mut run = 1;

    for w in dates.windows(2) {
        if is_next_day(w[0], w[1]) {
            run += 1;
            best = best.max(run);
        } else {
            run = 1;
        }
    }

    best
}

/// Run of consecutive days ending at the latest date, provided that date is
/// `today` or the day before. Otherwise the streak has lapsed and is 0.
pub fn current_streak(dates: &[NaiveDate], today: NaiveDate) -> u32 {
    let Some(&last) = dates.last() else {
        return 0;
    };

    let alive = last == today || today.pred_opt() == Some(last);
    if !alive {
        return 0;
    }

    let mut streak = 1;
    for w in dates.windows(2).rev() {
        if is_next_day(w[0], w[1]) {
            streak += 1;
        } else {
            break;
        }
    }

    streak
}
