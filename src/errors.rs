//! Unified application error type.
//! All modules (db, core, cli, utils) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Database migration error: {0}")]
    Migration(String),

    // ---------------------------
    // Parsing / validation errors
    // ---------------------------
    #[error("Invalid date format: {0} (expected YYYY-MM-DD)")]
    InvalidDateFormat(String),

    #[error("Negative duration: {0} minutes")]
    NegativeDuration(i64),

    #[error("Duration overflow: total minutes for {0} are too large")]
    DurationOverflow(String),

    #[error("Invalid period: {0}")]
    InvalidPeriod(String),

    #[error("Invalid color '{0}': expected #RRGGBB")]
    InvalidColor(String),

    #[error("Invalid goal: {0} (must be a positive number of minutes)")]
    InvalidGoal(i64),

    #[error("Validation error: {0}")]
    Validation(String),

    // ---------------------------
    // Lookup errors
    // ---------------------------
    #[error("Subject #{0} not found")]
    SubjectNotFound(i64),

    #[error("Session #{0} not found")]
    SessionNotFound(i64),

    #[error("Task #{0} not found")]
    TaskNotFound(i64),

    #[error("Habit #{0} not found")]
    HabitNotFound(i64),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration: {0}")]
    ConfigLoad(String),

    #[error("Failed to save configuration")]
    ConfigSave,

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
