// src/export/fs_utils.rs

use crate::errors::{AppError, AppResult};
use crate::ui::messages::{confirm, info};
use std::path::Path;

/// Check that `path` may be created or overwritten.
///
/// A missing file or `force` passes straight through; otherwise the user is
/// asked, and a refusal aborts the export.
pub(crate) fn ensure_writable(path: &Path, force: bool) -> AppResult<()> {
    if !path.exists() || force {
        return Ok(());
    }

    if confirm(&format!("The file '{}' already exists. Overwrite?", path.display())) {
        info("Existing file will be overwritten.");
        Ok(())
    } else {
        Err(AppError::Export(
            "cancelled, existing file not overwritten".into(),
        ))
    }
}
