use crate::errors::AppResult;
use crate::store::DailyLog;
use crate::ui::messages::{ask_confirmation, info, success, warning};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;
use zip::ZipWriter;
use zip::write::FileOptions;

pub struct BackupLogic;

impl BackupLogic {
    /// Copy the daily log to `dest_file`, optionally zipping it.
    /// Returns the final backup path, or `None` when the user declined to
    /// overwrite an existing file.
    pub fn backup(log: &DailyLog, dest_file: &str, compress: bool) -> AppResult<Option<PathBuf>> {
        let src = log.path();
        let dest = Path::new(dest_file);

        // 1️⃣ Check log exists
        if !src.exists() {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("Daily log not found: {}", src.display()),
            )
            .into());
        }

        // 2️⃣ Ensure destination folder exists
        if let Some(parent) = dest.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        // 3️⃣ If destination file exists → ask confirmation
        if dest.exists()
            && !ask_confirmation(&format!(
                "The file '{}' already exists. Overwrite it?",
                dest.display()
            ))
        {
            info("Backup cancelled by user.");
            return Ok(None);
        }

        // 4️⃣ Copy
        fs::copy(src, dest)?;
        success(format!("Backup created: {}", dest.display()));

        // 5️⃣ Optional compression
        if !compress {
            return Ok(Some(dest.to_path_buf()));
        }

        let compressed = compress_backup(dest)?;
        if let Err(e) = fs::remove_file(dest) {
            warning(format!("Failed to remove uncompressed backup: {}", e));
        }
        Ok(Some(compressed))
    }
}

/// Compress a backup using .zip
fn compress_backup(path: &Path) -> AppResult<PathBuf> {
    let zip_path = path.with_extension("zip");
    let file = fs::File::create(&zip_path)?;
    let mut zip = ZipWriter::new(file);

    let options: FileOptions<'_, ()> =
        FileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    let entry_name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| "water_log.txt".to_string());

    let mut f = fs::File::open(path)?;
    zip.start_file(entry_name, options)
        .map_err(io::Error::other)?;

    io::copy(&mut f, &mut zip)?;
    zip.finish().map_err(io::Error::other)?;

    debug!(path = %zip_path.display(), "backup compressed");
    success(format!("Compressed: {}", zip_path.display()));

    Ok(zip_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn backup_copies_the_log() {
        let dir = TempDir::new().unwrap();
        let log = DailyLog::new(dir.path().join("water_log.txt"));
        fs::write(log.path(), "2024-03-01,500,2200\n").unwrap();

        let dest = dir.path().join("out").join("copy.txt");
        let written = BackupLogic::backup(&log, dest.to_str().unwrap(), false)
            .unwrap()
            .unwrap();

        assert_eq!(written, dest);
        assert_eq!(fs::read_to_string(&dest).unwrap(), "2024-03-01,500,2200\n");
    }

    #[test]
    fn compressed_backup_replaces_the_copy() {
        let dir = TempDir::new().unwrap();
        let log = DailyLog::new(dir.path().join("water_log.txt"));
        fs::write(log.path(), "2024-03-01,500,2200\n").unwrap();

        let dest = dir.path().join("copy.txt");
        let written = BackupLogic::backup(&log, dest.to_str().unwrap(), true)
            .unwrap()
            .unwrap();

        assert_eq!(written, dir.path().join("copy.zip"));
        assert!(written.exists());
        assert!(!dest.exists());
    }

    #[test]
    fn missing_log_is_an_error() {
        let dir = TempDir::new().unwrap();
        let log = DailyLog::new(dir.path().join("nope.txt"));
        let dest = dir.path().join("copy.txt");
        assert!(BackupLogic::backup(&log, dest.to_str().unwrap(), false).is_err());
    }
}
