use crate::config::Config;
use crate::db::log::audit;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{confirm, info, success, warning};
use crate::utils::path::expand_tilde;
use std::fs;
use std::path::{Path, PathBuf};
use zip::ZipWriter;
use zip::write::FileOptions;

pub struct BackupLogic;

impl BackupLogic {
    /// Copy the database file to `dest_file`, optionally zipped.
    ///
    /// Returns the path actually written, or `None` when the user declined
    /// to overwrite an existing file.
    pub fn backup(
        pool: &mut DbPool,
        cfg: &Config,
        dest_file: &str,
        compress: bool,
    ) -> AppResult<Option<PathBuf>> {
        let src = Path::new(&cfg.database);
        let dest = expand_tilde(dest_file);

        if !src.exists() {
            return Err(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("Database not found: {}", src.display()),
            )
            .into());
        }

        if let Some(parent) = dest.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let target = if compress { dest.with_extension("zip") } else { dest.clone() };
        if target.exists()
            && !confirm(&format!(
                "The file '{}' already exists. Overwrite it?",
                target.display()
            ))
        {
            info("Backup cancelled.");
            return Ok(None);
        }

        fs::copy(src, &dest)?;
        success(format!("Backup created: {}", dest.display()));

        let final_path = if compress {
            let zipped = compress_backup(&dest)?;
            if zipped != dest {
                match fs::remove_file(&dest) {
                    Ok(()) => info(format!("Removed uncompressed backup: {}", dest.display())),
                    Err(e) => warning(format!("Failed to remove uncompressed backup: {e}")),
                }
            }
            zipped
        } else {
            dest
        };

        audit(
            &pool.conn,
            "backup",
            &final_path.to_string_lossy(),
            if compress {
                "Backup created and compressed"
            } else {
                "Backup created"
            },
        );

        Ok(Some(final_path))
    }
}

/// Compress a backup into a sibling `.zip` archive.
fn compress_backup(path: &Path) -> AppResult<PathBuf> {
    let zip_path = path.with_extension("zip");
    let entry = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .ok_or_else(|| AppError::Other(format!("Invalid backup path: {}", path.display())))?;

    let file = fs::File::create(&zip_path)?;
    let mut zip = ZipWriter::new(file);

    let options: FileOptions<'_, ()> =
        FileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    let mut f = fs::File::open(path)?;
    zip.start_file(entry, options).map_err(std::io::Error::other)?;

    std::io::copy(&mut f, &mut zip)?;
    zip.finish().map_err(std::io::Error::other)?;

    success(format!("Compressed: {}", zip_path.display()));
    Ok(zip_path)
}
