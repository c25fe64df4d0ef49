//! Snapshot the `MemoryCards` tree before converting

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use console::style;
use walkdir::WalkDir;

use crate::error::{IoContext, RenamerError, Result};
use crate::layout::MEMORY_CARDS_DIR;

const BACKUP_NAME: &str = "MemoryCards.backup";

#[derive(Debug, Clone)]
pub struct BackupOptions {
    pub backup_dir: PathBuf,
    /// Replace an existing backup of the same name.
    pub force: bool,
    pub dry_run: bool,
    /// Append a `-YYYYMMDD-HHMMSS` suffix so repeated runs never collide.
    pub timestamped: bool,
}

/// Where the backup lands inside `backup_dir`.
pub fn backup_path(backup_dir: &Path, timestamp: Option<DateTime<Local>>) -> PathBuf {
    match timestamp {
        Some(ts) => backup_dir.join(format!("{}-{}", BACKUP_NAME, ts.format("%Y%m%d-%H%M%S"))),
        None => backup_dir.join(BACKUP_NAME),
    }
}

/// Copy `{sd_root}/MemoryCards` into the backup directory.
///
/// Returns the backup destination. In dry-run mode nothing is created.
pub fn run_backup(sd_root: &Path, options: &BackupOptions) -> Result<PathBuf> {
    let src = sd_root.join(MEMORY_CARDS_DIR);
    let timestamp = options.timestamped.then(Local::now);
    let dst = backup_path(&options.backup_dir, timestamp);

    if options.dry_run {
        println!(
            "{} Would backup {} -> {}",
            style("[DRY-RUN]").magenta().bold(),
            src.display(),
            dst.display()
        );
        return Ok(dst);
    }

    if !src.is_dir() {
        return Err(RenamerError::SourceMissing(src));
    }

    // Copying into the walked tree would make the walk recurse into its own output
    if resolve_existing_prefix(&dst).starts_with(resolve_existing_prefix(&src)) {
        return Err(RenamerError::BackupInsideSource {
            backup: dst,
            source_dir: src,
        });
    }

    fs::create_dir_all(&options.backup_dir)
        .on_path("Failed to create directory", &options.backup_dir)?;

    if fs::symlink_metadata(&dst).is_ok() {
        if !options.force {
            return Err(RenamerError::BackupExists(dst));
        }
        if dst.is_dir() {
            fs::remove_dir_all(&dst).on_path("Failed to remove", &dst)?;
        } else {
            fs::remove_file(&dst).on_path("Failed to remove", &dst)?;
        }
    }

    println!(
        "{} Backing up {} -> {}",
        style("◆").cyan().bold(),
        src.display(),
        dst.display()
    );
    let files = copy_tree(&src, &dst)?;
    tracing::debug!(files, dst = %dst.display(), "Backup complete");

    Ok(dst)
}

/// Canonicalize the longest existing ancestor of `path` and re-append the rest.
fn resolve_existing_prefix(path: &Path) -> PathBuf {
    let absolute = std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf());
    let mut missing = Vec::new();
    let mut current = absolute.as_path();
    loop {
        if let Ok(canonical) = current.canonicalize() {
            return missing.iter().rev().fold(canonical, |acc, part| acc.join(part));
        }
        match (current.parent(), current.file_name()) {
            (Some(parent), Some(name)) => {
                missing.push(name.to_os_string());
                current = parent;
            }
            _ => return absolute.clone(),
        }
    }
}

/// Recursively copy `src` into `dst`, returning the number of files copied.
fn copy_tree(src: &Path, dst: &Path) -> Result<usize> {
    let mut files = 0;
    for entry in WalkDir::new(src).follow_links(false) {
        let entry = entry.map_err(|e| {
            let path = e.path().unwrap_or(src).to_path_buf();
            RenamerError::io("Failed to walk", &path, e.into())
        })?;

        // WalkDir only yields paths below `src`
        let rel = entry.path().strip_prefix(src).unwrap_or(entry.path());
        let target = dst.join(rel);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&target).on_path("Failed to create directory", &target)?;
        } else {
            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent).on_path("Failed to create directory", parent)?;
            }
            fs::copy(entry.path(), &target).on_path("Failed to copy", entry.path())?;
            files += 1;
        }
    }
    Ok(files)
}
