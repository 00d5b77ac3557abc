use crate::errors::{AppError, AppResult};
use serde::Serialize;

/// Label used for minutes whose subject no longer exists.
pub const DELETED_SUBJECT: &str = "(Deleted)";

#[derive(Debug, Clone, Serialize)]
pub struct Subject {
    pub id: i64,
    pub name: String,
    pub color: String,
    pub created_at: String,
}

/// Validate a `#RRGGBB` colour and normalise it to lowercase.
pub fn normalize_color(color: &str) -> AppResult<String> {
    let c = color.trim();
    let ok = c.len() == 7
        && c.starts_with('#')
        && c[1..].chars().all(|ch| ch.is_ascii_hexdigit());

    if ok {
        Ok(c.to_ascii_lowercase())
    } else {
        Err(AppError::InvalidColor(color.to_string()))
    }
}

/// Trimmed, non-empty name or a validation error naming `what`.
pub fn required_name(name: &str, what: &str) -> AppResult<String> {
    let n = name.trim();
    if n.is_empty() {
        return Err(AppError::Validation(format!("{what} name is required")));
    }
    Ok(n.to_string())
}
