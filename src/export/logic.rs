// src/export/logic.rs

use crate::db::completions::{item_names, load_completions};
use crate::db::log::audit;
use crate::db::pool::DbPool;
use crate::db::queries::load_sessions;
use crate::errors::{AppError, AppResult};
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::{CompletionExport, SessionExport};
use crate::export::{ExportDataset, ExportFormat};
use crate::models::completion::CompletionKind;
use crate::ui::messages::warning;
use crate::utils::date::resolve_bounds;
use crate::utils::path::expand_tilde;
use chrono::NaiveDate;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// High level export entry point.
pub struct ExportLogic;

impl ExportLogic {
    /// Export one dataset to `file`.
    ///
    /// - `file`: absolute output path (`~/` is expanded first)
    /// - `range`: `None`, `"all"` or a period such as `YYYY`, `YYYY-MM`,
    ///   `YYYY-MM-DD`, or a `start:end` pair of either
    ///
    /// Returns the number of exported rows. Nothing is written when the
    /// selection is empty.
    pub fn export(
        pool: &mut DbPool,
        format: ExportFormat,
        dataset: ExportDataset,
        file: &str,
        range: Option<&String>,
        force: bool,
    ) -> AppResult<usize> {
        let path: PathBuf = expand_tilde(file);

        if !path.is_absolute() {
            return Err(AppError::Export(format!(
                "output file path must be absolute: {file}"
            )));
        }

        let bounds = resolve_bounds(range)?;

        let written = match dataset {
            ExportDataset::Sessions => {
                let rows: Vec<SessionExport> = load_sessions(pool, bounds)?
                    .iter()
                    .rev()
                    .map(SessionExport::from)
                    .collect();
                write_rows(&rows, format, &path, force)?
            }
            ExportDataset::Tasks => {
                let rows = load_completion_rows(pool, CompletionKind::Task, bounds)?;
                write_rows(&rows, format, &path, force)?
            }
            ExportDataset::Habits => {
                let rows = load_completion_rows(pool, CompletionKind::Habit, bounds)?;
                write_rows(&rows, format, &path, force)?
            }
        };

        if written > 0 {
            audit(
                &pool.conn,
                "export",
                &path.to_string_lossy(),
                &format!("{} {} rows as {}", written, dataset.as_str(), format.as_str()),
            );
        }
        Ok(written)
    }
}

fn write_rows<T: Serialize>(
    rows: &[T],
    format: ExportFormat,
    path: &Path,
    force: bool,
) -> AppResult<usize> {
    if rows.is_empty() {
        warning("No data found for the selected range.");
        return Ok(0);
    }

    ensure_writable(path, force)?;

    match format {
        ExportFormat::Csv => export_csv(rows, path)?,
        ExportFormat::Json => export_json(rows, path)?,
    }
    Ok(rows.len())
}

/// Completion marks joined with the name of their item, oldest first.
fn load_completion_rows(
    pool: &DbPool,
    kind: CompletionKind,
    bounds: Option<(NaiveDate, NaiveDate)>,
) -> AppResult<Vec<CompletionExport>> {
    let names = item_names(pool, kind)?;

    Ok(load_completions(pool, kind, bounds)?
        .iter()
        .map(|c| {
            let name = names.get(&c.item_id).map(String::as_str).unwrap_or("");
            CompletionExport::new(c, name)
        })
        .collect())
}
