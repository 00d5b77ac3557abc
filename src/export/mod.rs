// src/export/mod.rs

mod fs_utils;
mod json_csv;
pub mod logic;
mod model;

pub use logic::ExportLogic;
pub use model::{CompletionExport, SessionExport};

use crate::ui::messages::success;
use clap::ValueEnum;
use std::path::Path;

/// Shared completion message for every export.
pub(crate) fn notify_export_success(label: &str, rows: usize, path: &Path) {
    success(format!("{label} export completed ({rows} rows): {}", path.display()));
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}

/// What to export.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum ExportDataset {
    #[default]
    Sessions,
    Tasks,
    Habits,
}

impl ExportDataset {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportDataset::Sessions => "sessions",
            ExportDataset::Tasks => "tasks",
            ExportDataset::Habits => "habits",
        }
    }
}
