use chrono::{NaiveDate, Weekday};
use studylog::errors::AppError;
use studylog::utils::date::{
    month_days, parse_date, parse_range, resolve_bounds, shift_weeks, week_dates,
};

fn d(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

#[test]
fn test_parse_range_single_forms() {
    assert_eq!(parse_range("2024").unwrap(), (d("2024-01-01"), d("2024-12-31")));
    assert_eq!(parse_range("2024-02").unwrap(), (d("2024-02-01"), d("2024-02-29")));
    assert_eq!(parse_range("2024-02-10").unwrap(), (d("2024-02-10"), d("2024-02-10")));
}

#[test]
fn test_parse_range_pairs() {
    assert_eq!(
        parse_range("2023-11:2024-01").unwrap(),
        (d("2023-11-01"), d("2024-01-31"))
    );
    assert_eq!(
        parse_range("2024-01-05:2024-01-09").unwrap(),
        (d("2024-01-05"), d("2024-01-09"))
    );

    assert!(matches!(
        parse_range("2024:2024-05"),
        Err(AppError::InvalidPeriod(_))
    ));
    assert!(matches!(
        parse_range("2024-05:2024-01"),
        Err(AppError::InvalidPeriod(_))
    ));
}

#[test]
fn test_resolve_bounds_all_means_unfiltered() {
    assert_eq!(resolve_bounds(None).unwrap(), None);
    assert_eq!(resolve_bounds(Some(&"ALL".to_string())).unwrap(), None);
    assert!(resolve_bounds(Some(&"yesterday".to_string())).is_err());
}

#[test]
fn test_week_dates_follow_week_start() {
    // 2024-01-03 is a Wednesday
    let sunday = week_dates(d("2024-01-03"), Weekday::Sun, 0).unwrap();
    assert_eq!(sunday.first(), Some(&d("2023-12-31")));
    assert_eq!(sunday.last(), Some(&d("2024-01-06")));

    let monday = week_dates(d("2024-01-03"), Weekday::Mon, -1).unwrap();
    assert_eq!(monday.first(), Some(&d("2023-12-25")));
    assert_eq!(monday.len(), 7);
}

#[test]
fn test_week_offset_out_of_range_is_an_error() {
    for offset in [100_000_000, -100_000_000, i64::MAX, i64::MIN] {
        assert!(matches!(
            week_dates(d("2024-01-03"), Weekday::Sun, offset),
            Err(AppError::InvalidPeriod(_))
        ));
        assert!(shift_weeks(d("2024-01-03"), offset).is_err());
    }
    assert_eq!(shift_weeks(d("2024-01-03"), 2).unwrap(), d("2024-01-17"));
}

#[test]
fn test_parse_date_requires_zero_padding() {
    assert!(matches!(parse_date("2024-1-5"), Err(AppError::InvalidDateFormat(_))));
    assert_eq!(parse_date(" 2024-01-05\n").unwrap(), d("2024-01-05"));
}

#[test]
fn test_month_days() {
    assert_eq!(month_days("2023-02").unwrap().len(), 28);
    assert!(month_days("2023").is_err());
    assert!(month_days("2023-13").is_err());
}
