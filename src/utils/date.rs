use crate::errors::{AppError, AppResult};
use chrono::{Datelike, Days, NaiveDate, TimeDelta, Weekday};

pub const DATE_FMT: &str = "%Y-%m-%d";

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Parse a zero-padded `YYYY-MM-DD` calendar date. Surrounding whitespace
/// is ignored.
pub fn parse_date(s: &str) -> AppResult<NaiveDate> {
    let t = s.trim();
    if t.len() != 10 {
        return Err(AppError::InvalidDateFormat(s.to_string()));
    }
    NaiveDate::parse_from_str(t, DATE_FMT).map_err(|_| AppError::InvalidDateFormat(s.to_string()))
}

/// Parse an optional date argument, falling back to today.
pub fn parse_date_or_today(s: Option<&String>) -> AppResult<NaiveDate> {
    match s {
        Some(v) => parse_date(v),
        None => Ok(today()),
    }
}

pub fn format_date(d: &NaiveDate) -> String {
    d.format(DATE_FMT).to_string()
}

/// Inclusive list of days between two dates (empty if start > end).
pub fn days_between(start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
    start.iter_days().take_while(|d| *d <= end).collect()
}

pub fn all_days_of_month(year: i32, month: u32) -> AppResult<Vec<NaiveDate>> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or_else(|| AppError::InvalidPeriod(format!("{year:04}-{month:02}")))?;
    Ok(first.iter_days().take_while(|d| d.month() == month).collect())
}

/// Parse `YYYY-MM` into the list of its days.
pub fn month_days(s: &str) -> AppResult<Vec<NaiveDate>> {
    if s.trim().len() != 7 {
        return Err(AppError::InvalidPeriod(format!("{s} (expected YYYY-MM)")));
    }
    let (start, end) = parse_range(s)?;
    Ok(days_between(start, end))
}

/// Move `anchor` by `offset` whole weeks (negative goes back).
pub fn shift_weeks(anchor: NaiveDate, offset: i64) -> AppResult<NaiveDate> {
    offset
        .checked_mul(7)
        .and_then(TimeDelta::try_days)
        .and_then(|delta| anchor.checked_add_signed(delta))
        .ok_or_else(|| AppError::InvalidPeriod(format!("week offset {offset} is out of range")))
}

/// The seven days of the week containing `anchor`, shifted by `offset` weeks.
pub fn week_dates(anchor: NaiveDate, week_start: Weekday, offset: i64) -> AppResult<Vec<NaiveDate>> {
    let back = u64::from(anchor.weekday().days_since(week_start));
    let start = anchor
        .checked_sub_days(Days::new(back))
        .ok_or_else(|| AppError::InvalidPeriod(format_date(&anchor)))?;
    let start = shift_weeks(start, offset)?;
    Ok(start.iter_days().take(7).collect())
}

/// The `n` days ending at `end` (inclusive), oldest first.
pub fn last_n_days(end: NaiveDate, n: u64) -> Vec<NaiveDate> {
    let start = end
        .checked_sub_days(Days::new(n.saturating_sub(1)))
        .unwrap_or(NaiveDate::MIN);
    days_between(start, end)
}

/// Parse a period expression into inclusive bounds.
///
/// Supported:
/// - YYYY
/// - YYYY-MM
/// - YYYY-MM-DD
/// - YYYY:YYYY
/// - YYYY-MM:YYYY-MM
/// - YYYY-MM-DD:YYYY-MM-DD
pub fn parse_range(r: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    let r = r.trim();

    if let Some((start_raw, end_raw)) = r.split_once(':') {
        let start = start_raw.trim();
        let end = end_raw.trim();

        if start.len() != end.len() {
            return Err(AppError::InvalidPeriod(format!(
                "{r} (start and end must have the same format)"
            )));
        }

        let (d1, _) = single_bounds(start)?;
        let (_, d2) = single_bounds(end)?;

        if d1 > d2 {
            return Err(AppError::InvalidPeriod(format!("{r} (start after end)")));
        }
        Ok((d1, d2))
    } else {
        single_bounds(r)
    }
}

fn single_bounds(p: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    let invalid = || AppError::InvalidPeriod(p.to_string());

    match p.len() {
        // YYYY
        4 => {
            let y: i32 = p.parse().map_err(|_| invalid())?;
            let d1 = NaiveDate::from_ymd_opt(y, 1, 1).ok_or_else(invalid)?;
            let d2 = NaiveDate::from_ymd_opt(y, 12, 31).ok_or_else(invalid)?;
            Ok((d1, d2))
        }
        // YYYY-MM
        7 => {
            let d1 = NaiveDate::parse_from_str(&format!("{p}-01"), DATE_FMT)
                .map_err(|_| invalid())?;
            let next = d1
                .checked_add_months(chrono::Months::new(1))
                .ok_or_else(invalid)?;
            let d2 = next.pred_opt().ok_or_else(invalid)?;
            Ok((d1, d2))
        }
        // YYYY-MM-DD
        10 => {
            let d = parse_date(p)?;
            Ok((d, d))
        }
        _ => Err(invalid()),
    }
}

/// Resolve an optional `--period` argument into date bounds.
/// `None` and `"all"` both mean "no filtering".
pub fn resolve_bounds(period: Option<&String>) -> AppResult<Option<(NaiveDate, NaiveDate)>> {
    match period {
        None => Ok(None),
        Some(p) if p.eq_ignore_ascii_case("all") => Ok(None),
        Some(p) => parse_range(p).map(Some),
    }
}

pub fn parse_weekday(s: &str) -> AppResult<Weekday> {
    s.trim()
        .parse::<Weekday>()
        .map_err(|_| AppError::Config(format!("invalid week_start '{s}'")))
}

pub fn short_weekday(d: &NaiveDate) -> &'static str {
    match d.weekday() {
        Weekday::Mon => "Mon",
        Weekday::Tue => "Tue",
        Weekday::Wed => "Wed",
        Weekday::Thu => "Thu",
        Weekday::Fri => "Fri",
        Weekday::Sat => "Sat",
        Weekday::Sun => "Sun",
    }
}
