use crate::config::Config;
use crate::db::log::audit;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success, warning};
use crate::ui::prompt::ask_confirmation;
use chrono::Local;
use rusqlite::Connection;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use zip::ZipWriter;
use zip::write::FileOptions;

pub struct BackupLogic;

impl BackupLogic {
    /// Copy the configured database to `dest_file`, zipping it on request.
    /// Returns the path of the file actually written, or `None` when the
    /// user declined to overwrite an existing file.
    pub fn backup(
        cfg: &Config,
        dest_file: &str,
        compress: bool,
        force: bool,
    ) -> AppResult<Option<PathBuf>> {
        let src = Path::new(&cfg.database);
        let dest = Path::new(dest_file);

        // 1️⃣ Check DB exists
        if !src.exists() {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("Database not found: {}", src.display()),
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
            && !force
            && !ask_confirmation(&format!("The file '{}' already exists. Overwrite it?", dest.display()))
        {
            info("Backup cancelled by user.");
            return Ok(None);
        }

        // 4️⃣ Copy database
        fs::copy(src, dest)?;
        success(format!("Backup created: {}", dest.display()));

        // 5️⃣ Optional compression
        let final_path = if compress {
            let mut zip_path = dest.with_extension("zip");
            if zip_path == dest {
                zip_path = PathBuf::from(format!("{}.zip", dest.display()));
            }
            let compressed = compress_into(dest, &zip_path)?;
            if let Err(e) = fs::remove_file(dest) {
                warning(format!("Failed to remove uncompressed backup: {}", e));
            }
            compressed
        } else {
            dest.to_path_buf()
        };

        // 6️⃣ Log in DB
        if let Ok(conn) = Connection::open(src) {
            audit(
                &conn,
                "backup",
                &final_path.to_string_lossy(),
                if compress {
                    "Backup created and compressed"
                } else {
                    "Backup created"
                },
            );
        }

        Ok(Some(final_path))
    }
}

/// Zip `path` into `zip_path` (deflate).
fn compress_into(path: &Path, zip_path: &Path) -> AppResult<PathBuf> {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .ok_or_else(|| AppError::Other(format!("Not a file: {}", path.display())))?;

    let file = fs::File::create(zip_path)?;
    let mut zip = ZipWriter::new(file);

    let options: FileOptions<'_, ()> =
        FileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    let mut f = fs::File::open(path)?;
    zip.start_file(name, options).map_err(io::Error::other)?;

    io::copy(&mut f, &mut zip)?;
    zip.finish().map_err(io::Error::other)?;

    info(format!("Compressed: {}", zip_path.display()));

    Ok(zip_path.to_path_buf())
}

/// Safety copy next to `path`, named `<timestamp>-<label>.zip`.
pub fn zip_file(path: &Path, label: &str) -> AppResult<PathBuf> {
    let backup_name = format!("{}-{}.zip", Local::now().format("%Y%m%d_%H%M%S"), label);
    let zip_path = path
        .parent()
        .map(|p| p.join(&backup_name))
        .unwrap_or_else(|| PathBuf::from(&backup_name));

    let written = compress_into(path, &zip_path)?;
    success(format!("📦 Backup created: {}", written.display()));
    Ok(written)
}
