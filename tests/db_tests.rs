use chrono::NaiveDate;
use studylog::config::Config;
use studylog::core::calculator::breakdown;
use studylog::core::logic::Core;
use studylog::core::session::{MAX_SESSION_MINUTES, SessionLogic, SessionPatch};
use studylog::core::subject::SubjectLogic;
use studylog::core::tracker::{self, HabitLogic, TaskLogic};
use studylog::db::completions::{count_completed, load_completions, load_habits};
use studylog::db::migrate::{pending_migrations, run_pending_migrations};
use studylog::db::pool::DbPool;
use studylog::db::queries::{load_log, load_sessions, load_subjects};
use studylog::errors::AppError;
use studylog::models::completion::CompletionKind;
use studylog::models::subject::DELETED_SUBJECT;

fn d(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn test_config() -> Config {
    Config::default()
}

#[test]
fn test_migrations_are_applied_once() {
    let pool = DbPool::in_memory().unwrap();

    assert!(pending_migrations(&pool.conn).unwrap().is_empty());
    assert_eq!(run_pending_migrations(&pool.conn).unwrap(), 0);

    let applied = load_log(&pool)
        .unwrap()
        .iter()
        .filter(|e| e.operation == "migration_applied")
        .count();
    assert_eq!(applied, 3);
}

#[test]
fn test_subject_crud_and_validation() {
    let mut pool = DbPool::in_memory().unwrap();
    let cfg = test_config();

    let id = SubjectLogic::add(&mut pool, &cfg, "  Physics ", None).unwrap();
    let subjects = load_subjects(&pool).unwrap();
    assert_eq!(subjects.len(), 1);
    assert_eq!(subjects[0].name, "Physics");
    assert_eq!(subjects[0].color, "#c77541");

    let edited = SubjectLogic::edit(&mut pool, id, None, Some("#ABCDEF")).unwrap();
    assert_eq!(edited.color, "#abcdef");

    let err = SubjectLogic::add(&mut pool, &cfg, "Art", Some("blue")).unwrap_err();
    assert!(matches!(err, AppError::InvalidColor(_)));

    let err = SubjectLogic::add(&mut pool, &cfg, "   ", None).unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));

    let err = SubjectLogic::edit(&mut pool, 99, Some("X"), None).unwrap_err();
    assert!(matches!(err, AppError::SubjectNotFound(99)));

    SubjectLogic::delete(&mut pool, id).unwrap();
    assert!(load_subjects(&pool).unwrap().is_empty());
}

#[test]
fn test_session_validation_and_edit() {
    let mut pool = DbPool::in_memory().unwrap();

    let err = SessionLogic::add(&mut pool, "Math", -10, d("2024-01-01"), None).unwrap_err();
    assert!(matches!(err, AppError::NegativeDuration(-10)));

    let err = SessionLogic::add(&mut pool, "Math", 0, d("2024-01-01"), None).unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));

    let err = SessionLogic::add(&mut pool, "Math", i64::MAX, d("2024-01-01"), None).unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));
    let full_day = SessionLogic::add(&mut pool, "Math", MAX_SESSION_MINUTES, d("2024-01-01"), None).unwrap();
    SessionLogic::delete(&mut pool, full_day).unwrap();

    let id = SessionLogic::add(&mut pool, "Math", 40, d("2024-01-01"), Some("chapter 3")).unwrap();

    let patch = SessionPatch {
        minutes: Some(55),
        date: Some(d("2024-01-02")),
        ..Default::default()
    };
    let s = SessionLogic::edit(&mut pool, id, patch).unwrap();
    assert_eq!(s.minutes, 55);
    assert_eq!(s.date, d("2024-01-02"));
    assert_eq!(s.notes, "chapter 3");

    let err = SessionLogic::edit(&mut pool, 42, SessionPatch::default()).unwrap_err();
    assert!(matches!(err, AppError::SessionNotFound(42)));

    SessionLogic::delete(&mut pool, id).unwrap();
    assert!(load_sessions(&pool, None).unwrap().is_empty());
}

#[test]
fn test_sessions_feed_stats() {
    let mut pool = DbPool::in_memory().unwrap();

    SessionLogic::add(&mut pool, "Math", 30, d("2024-01-01"), None).unwrap();
    SessionLogic::add(&mut pool, "Math", 20, d("2024-01-02"), None).unwrap();
    SessionLogic::add(&mut pool, "Art", 25, d("2024-01-02"), None).unwrap();

    let stats = Core::session_stats(&pool, d("2024-01-02")).unwrap();
    assert_eq!(stats.total_minutes, 75);
    assert_eq!(stats.best_date, Some(d("2024-01-02")));
    assert_eq!(stats.best_date_minutes, 45);
    assert_eq!(stats.current_streak, 2);
    assert_eq!(stats.highest_streak, 2);
}

#[test]
fn test_corrupt_session_date_surfaces_as_invalid_date() {
    let pool = DbPool::in_memory().unwrap();
    pool.conn
        .execute(
            "INSERT INTO sessions (subject, minutes, date, notes, created_at)
             VALUES ('Math', 10, '02/01/2024', '', 'now')",
            [],
        )
        .unwrap();

    let err = Core::session_stats(&pool, d("2024-01-02")).unwrap_err();
    assert!(matches!(err, AppError::InvalidDateFormat(_)));
}

#[test]
fn test_oversized_stored_minutes_fail_instead_of_wrapping() {
    let pool = DbPool::in_memory().unwrap();
    for _ in 0..2 {
        pool.conn
            .execute(
                "INSERT INTO sessions (subject, minutes, date, notes, created_at)
                 VALUES ('Math', ?1, '2024-01-01', '', 'now')",
                [i64::MAX],
            )
            .unwrap();
    }

    let err = Core::session_stats(&pool, d("2024-01-01")).unwrap_err();
    assert!(matches!(err, AppError::DurationOverflow(_)));
}

#[test]
fn test_toggle_flips_and_counts() {
    let mut pool = DbPool::in_memory().unwrap();
    let id = TaskLogic::add(&mut pool, "Flashcards", d("2024-01-03")).unwrap();

    let c = tracker::toggle(&mut pool, CompletionKind::Task, id, d("2024-01-04")).unwrap();
    assert!(c.completed);
    let c = tracker::toggle(&mut pool, CompletionKind::Task, id, d("2024-01-04")).unwrap();
    assert!(!c.completed);
    let c = tracker::toggle(&mut pool, CompletionKind::Task, id, d("2024-01-04")).unwrap();
    assert!(c.completed);

    let marks = load_completions(&pool, CompletionKind::Task, None).unwrap();
    assert_eq!(marks.len(), 1);

    let n = count_completed(&pool.conn, CompletionKind::Task, id, d("2024-01-01"), d("2024-01-31")).unwrap();
    assert_eq!(n, 1);

    let err = tracker::toggle(&mut pool, CompletionKind::Task, 77, d("2024-01-04")).unwrap_err();
    assert!(matches!(err, AppError::TaskNotFound(77)));
}

#[test]
fn test_completion_series_from_database() {
    let mut pool = DbPool::in_memory().unwrap();
    let id = TaskLogic::add(&mut pool, "Read", d("2024-01-03")).unwrap();
    tracker::toggle(&mut pool, CompletionKind::Task, id, d("2024-01-04")).unwrap();

    let dates: Vec<NaiveDate> = d("2024-01-01").iter_days().take(5).collect();
    let series = Core::completion_series(&pool, CompletionKind::Task, &dates).unwrap();

    let pct: Vec<u32> = series.days.iter().map(|day| day.percentage).collect();
    assert_eq!(pct, vec![0, 0, 0, 100, 0]);
    assert_eq!(series.aggregate_percentage, 20);

    // habits are tracked separately
    let habits = Core::completion_series(&pool, CompletionKind::Habit, &dates).unwrap();
    assert_eq!(habits.aggregate_percentage, 0);
}

#[test]
fn test_delete_item_cascades() {
    let mut pool = DbPool::in_memory().unwrap();
    let cfg = test_config();

    let id = HabitLogic::add(&mut pool, &cfg, "Meditate", Some("🧘"), None, d("2024-01-01")).unwrap();
    assert_eq!(load_habits(&pool).unwrap()[0].goal, 30);

    tracker::toggle(&mut pool, CompletionKind::Habit, id, d("2024-01-01")).unwrap();
    tracker::toggle(&mut pool, CompletionKind::Habit, id, d("2024-01-02")).unwrap();

    tracker::delete(&mut pool, CompletionKind::Habit, id).unwrap();
    assert!(load_habits(&pool).unwrap().is_empty());
    assert!(load_completions(&pool, CompletionKind::Habit, None).unwrap().is_empty());

    let err = tracker::delete(&mut pool, CompletionKind::Habit, id).unwrap_err();
    assert!(matches!(err, AppError::HabitNotFound(_)));
}

#[test]
fn test_habit_goal_must_be_positive() {
    let mut pool = DbPool::in_memory().unwrap();
    let cfg = test_config();

    let err = HabitLogic::add(&mut pool, &cfg, "Run", None, Some(0), d("2024-01-01")).unwrap_err();
    assert!(matches!(err, AppError::InvalidGoal(0)));

    let id = HabitLogic::add(&mut pool, &cfg, "Run", None, Some(20), d("2024-01-01")).unwrap();
    let err = HabitLogic::edit(&mut pool, id, None, None, Some(-3)).unwrap_err();
    assert!(matches!(err, AppError::InvalidGoal(-3)));

    let h = HabitLogic::edit(&mut pool, id, Some("Jog"), Some("🏃"), Some(25)).unwrap();
    assert_eq!((h.name.as_str(), h.goal), ("Jog", 25));
}

#[test]
fn test_charts_group_by_subject() {
    let mut pool = DbPool::in_memory().unwrap();
    let cfg = test_config();

    SubjectLogic::add(&mut pool, &cfg, "Math", None).unwrap();
    SubjectLogic::add(&mut pool, &cfg, "History", None).unwrap();

    SessionLogic::add(&mut pool, "Math", 30, d("2024-01-02"), None).unwrap();
    SessionLogic::add(&mut pool, "Chemistry", 15, d("2024-01-02"), None).unwrap();
    SessionLogic::add(&mut pool, "Math", 10, d("2024-01-01"), None).unwrap();

    let daily = Core::daily_chart(&pool, d("2024-01-02")).unwrap();
    let daily: Vec<(&str, i64)> = daily.iter().map(|b| (b.label.as_str(), b.minutes)).collect();
    assert_eq!(daily, vec![("Math", 30), ("History", 0), (DELETED_SUBJECT, 15)]);

    let top = Core::subjects_chart(&pool, 5).unwrap();
    let top: Vec<(&str, i64)> = top.iter().map(|b| (b.label.as_str(), b.minutes)).collect();
    assert_eq!(top, vec![("Math", 40), (DELETED_SUBJECT, 15)]);

    let totals = Core::day_totals(&pool).unwrap();
    let week = breakdown::weekly(&totals, d("2024-01-02"));
    assert_eq!(week.len(), 7);
    assert_eq!(week[6].minutes, 45);
    assert_eq!(week[5].minutes, 10);

    let month = breakdown::monthly(&totals, d("2024-01-02"));
    assert_eq!(month.len(), 4);
    assert_eq!(month[3].label, "Week 4");
    assert_eq!(month[3].minutes, 55);
    assert_eq!(month[0].minutes, 0);
}

#[test]
fn test_heatmap_intensity_levels() {
    assert_eq!(breakdown::intensity(0), 0);
    assert_eq!(breakdown::intensity(19), 1);
    assert_eq!(breakdown::intensity(20), 2);
    assert_eq!(breakdown::intensity(39), 2);
    assert_eq!(breakdown::intensity(60), 3);
    assert_eq!(breakdown::intensity(61), 4);
}

#[test]
fn test_mutations_are_audited() {
    let mut pool = DbPool::in_memory().unwrap();
    let id = SessionLogic::add(&mut pool, "Math", 30, d("2024-01-01"), None).unwrap();
    SessionLogic::delete(&mut pool, id).unwrap();

    let ops: Vec<String> = load_log(&pool)
        .unwrap()
        .into_iter()
        .filter(|e| e.operation != "migration_applied")
        .map(|e| e.operation)
        .collect();
    assert_eq!(ops, vec!["add", "del"]);
}
