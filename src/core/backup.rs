use crate::config::Config;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use std::fs;
use std::path::{Path, PathBuf};
use zip::ZipWriter;
use zip::write::FileOptions;

pub struct BackupLogic;

impl BackupLogic {
    pub fn backup(
        _pool: &mut DbPool,
        cfg: &Config,
        dest_file: &str,
        compress: bool,
    ) -> AppResult<()> {
        let src = Path::new(&cfg.database);
        let dest = Path::new(dest_file);

        // 1. Check DB exists
        if !src.exists() {
            return Err(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("Database not found: {}", src.display()),
            )
            .into());
        }

        // 2. Ensure destination folder exists
        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent)?;
        }

        // 2.5 If destination file exists → ask confirmation
        if dest.exists() {
            println!(
                "⚠️  The file '{}' already exists.\nDo you want to overwrite it? [y/N]: ",
                dest.display()
            );

            use std::io::{Write, stdin, stdout};

            let mut answer = String::new();
            print!("> ");
            stdout().flush().ok();

            stdin().read_line(&mut answer)?;

            let answer = answer.trim().to_lowercase();

            if !(answer == "y" || answer == "yes") {
                println!("❌ Backup cancelled by user.");
                return Ok(());
            }
            println!();
        }

        // 3. Copy database
        fs::copy(src, dest)?;
        println!("✅ Backup created: {}", dest.display());

        // 4. Optional compression
        if compress {
            let compressed = compress_backup(dest)?;

            if compressed != dest.to_path_buf() {
                fs::remove_file(dest)?;
                println!("🗜️  Compressed backup: {}", compressed.display());
            }
        }

        Ok(())
    }
}

/// Zip the copied database next to itself (`backup.sqlite` → `backup.sqlite.zip`).
fn compress_backup(dest: &Path) -> AppResult<PathBuf> {
    let zip_path = PathBuf::from(format!("{}.zip", dest.display()));

    let file = fs::File::create(&zip_path)?;
    let mut zip = ZipWriter::new(file);

    let options: FileOptions<'_, ()> =
        FileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    let name = dest
        .file_name()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| "backup.sqlite".to_string());

    zip.start_file(name, options)
        .map_err(|e| std::io::Error::other(format!("zip error: {e}")))?;

    let data = fs::read(dest)?;
    use std::io::Write;
    zip.write_all(&data)?;
    zip.finish()
        .map_err(|e| std::io::Error::other(format!("zip error: {e}")))?;

    Ok(zip_path)
}
