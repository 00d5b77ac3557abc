//! Minute breakdowns behind the `chart` views.

use super::streak::DayTotals;
use crate::models::session::Session;
use crate::models::stats::ChartBar;
use crate::models::subject::{DELETED_SUBJECT, Subject};
use crate::utils::date::{last_n_days, short_weekday};
use chrono::{Days, NaiveDate};

fn minutes_on(totals: &DayTotals, d: &NaiveDate) -> i64 {
    totals.get(d).copied().unwrap_or(0)
}

/// Bucket session minutes by subject name. Every current subject gets a bar
/// (possibly 0); minutes of subjects that no longer exist go to `(Deleted)`.
fn by_subject<'a>(
    sessions: impl Iterator<Item = &'a Session>,
    subjects: &[Subject],
) -> Vec<ChartBar> {
    let mut bars: Vec<ChartBar> = subjects.iter().map(|s| ChartBar::new(&s.name, 0)).collect();
    let mut deleted = 0;
    let mut any_deleted = false;

    for s in sessions {
        match bars.iter_mut().find(|b| b.label == s.subject) {
            Some(bar) => bar.minutes += s.minutes,
            None => {
                deleted += s.minutes;
                any_deleted = true;
            }
        }
    }

    if any_deleted {
        bars.push(ChartBar::new(DELETED_SUBJECT, deleted));
    }
    bars
}

/// Minutes studied on `day`, per subject.
pub fn daily_by_subject(sessions: &[Session], subjects: &[Subject], day: NaiveDate) -> Vec<ChartBar> {
    by_subject(sessions.iter().filter(|s| s.date == day), subjects)
}

/// All-time minutes per subject, largest first, at most `top` bars.
/// Subjects without any minutes are left out.
pub fn subject_breakdown(sessions: &[Session], subjects: &[Subject], top: usize) -> Vec<ChartBar> {
    let mut bars: Vec<ChartBar> = by_subject(sessions.iter(), subjects)
        .into_iter()
        .filter(|b| b.minutes > 0)
        .collect();

    bars.sort_by(|a, b| b.minutes.cmp(&a.minutes).then_with(|| a.label.cmp(&b.label)));
    bars.truncate(top);
    bars
}

/// The seven days ending at `end`, labelled with the weekday.
pub fn weekly(totals: &DayTotals, end: NaiveDate) -> Vec<ChartBar> {
    last_n_days(end, 7)
        .iter()
        .map(|d| ChartBar::new(format!("{} {}", short_weekday(d), d.format("%m-%d")), minutes_on(totals, d)))
        .collect()
}

/// Four consecutive 7-day buckets ending at `today`, oldest first.
pub fn monthly(totals: &DayTotals, today: NaiveDate) -> Vec<ChartBar> {
    (0..4)
        .rev()
        .map(|week: u64| {
            let end = today.checked_sub_days(Days::new(week * 7)).unwrap_or(NaiveDate::MIN);
            let minutes = last_n_days(end, 7).iter().map(|d| minutes_on(totals, d)).sum();
            ChartBar::new(format!("Week {}", 4 - week), minutes)
        })
        .collect()
}

/// Heatmap intensity for a day: 0 (nothing) to 4 (over an hour).
pub fn intensity(minutes: i64) -> u8 {
    match minutes {
        m if m <= 0 => 0,
        m if m < 20 => 1,
        m if m < 40 => 2,
        m if m <= 60 => 3,
        _ => 4,
    }
}
