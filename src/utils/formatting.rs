//! Formatting utilities used for CLI and export outputs.

pub fn pad_right(s: &str, width: usize) -> String {
    format!("{:<width$}", s, width = width)
}

/// Minutes as `HHh MMm`, e.g. `02h 25m`.
pub fn mins2readable(mins: i64) -> String {
    let abs_m = mins.abs();
    let sign = if mins < 0 { "-" } else { "" };
    format!("{}{:02}h {:02}m", sign, abs_m / 60, abs_m % 60)
}

/// Horizontal bar proportional to `value / max`, `width` cells wide at most.
pub fn bar(value: i64, max: i64, width: usize) -> String {
    if value <= 0 || max <= 0 {
        return String::new();
    }
    let cells = ((value as f64 / max as f64) * width as f64).round() as usize;
    "█".repeat(cells.clamp(1, width))
}

/// Truncate to `max` characters, appending "..." when cut.
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let mut out: String = s.chars().take(max.saturating_sub(3)).collect();
    out.push_str("...");
    out
}
