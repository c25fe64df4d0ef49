//! Apply a plan to the filesystem
//!
//! Items are applied strictly in order. A failure stops execution: items
//! already applied stay applied, the rest are left untouched.

use std::fs;
use std::path::Path;

use console::style;

use crate::error::{IoContext, RenamerError, Result};
use crate::utils::create_progress_bar;

use super::plan::{Action, PlanItem};

#[derive(Debug, Clone, Copy, Default)]
pub struct ExecuteOptions {
    /// Replace existing destinations instead of failing.
    pub force: bool,
    /// Print what would happen without touching the filesystem.
    pub dry_run: bool,
}

/// Counts of what [`execute_plan`] did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExecutionReport {
    pub moved: usize,
    pub copied: usize,
    pub skipped_dry_run: usize,
    pub overwritten: usize,
    pub removed_dirs: usize,
}

impl ExecutionReport {
    pub fn total(&self) -> usize {
        self.moved + self.copied + self.skipped_dry_run
    }
}

/// Execute every plan item in order.
pub fn execute_plan(plan: &[PlanItem], options: ExecuteOptions) -> Result<ExecutionReport> {
    let mut report = ExecutionReport::default();

    if options.dry_run {
        for item in plan {
            println!(
                "{} {} {} -> {}",
                style("[DRY-RUN]").magenta().bold(),
                item.action,
                item.src_file.display(),
                item.dst_file.display()
            );
            report.skipped_dry_run += 1;
        }
        return Ok(report);
    }

    let pb = create_progress_bar(plan.len() as u64, "Converting");
    for item in plan {
        pb.set_message(item.reason.clone());
        if let Err(e) = execute_item(item, options, &mut report) {
            pb.abandon();
            return Err(e);
        }
        tracing::debug!(
            "OK: {} {} -> {}",
            item.action,
            item.src_file.display(),
            item.dst_file.display()
        );
        pb.inc(1);
    }
    pb.finish_and_clear();

    Ok(report)
}

fn execute_item(item: &PlanItem, options: ExecuteOptions, report: &mut ExecutionReport) -> Result<()> {
    if let Some(parent) = item.dst_file.parent() {
        fs::create_dir_all(parent).on_path("Failed to create directory", parent)?;
    }

    if clear_destination(&item.dst_file, options.force)? {
        report.overwritten += 1;
    }

    match item.action {
        Action::Copy => {
            fs::copy(&item.src_file, &item.dst_file).on_path("Failed to copy", &item.src_file)?;
            report.copied += 1;
        }
        Action::Move => {
            move_file(&item.src_file, &item.dst_file)?;
            report.moved += 1;
            if remove_dir_if_empty(&item.src_dir) {
                report.removed_dirs += 1;
            }
        }
    }

    Ok(())
}

/// Make room for `dst`. Returns whether something was removed.
fn clear_destination(dst: &Path, force: bool) -> Result<bool> {
    // symlink_metadata so a dangling link still counts as occupied
    let Ok(meta) = fs::symlink_metadata(dst) else {
        return Ok(false);
    };

    if !force {
        return Err(RenamerError::DestinationExists(dst.to_path_buf()));
    }

    if meta.is_dir() {
        fs::remove_dir_all(dst).on_path("Failed to remove", dst)?;
    } else {
        fs::remove_file(dst).on_path("Failed to remove", dst)?;
    }
    tracing::debug!(path = %dst.display(), "Removed existing destination");
    Ok(true)
}

/// Rename `src` to `dst`, falling back to copy+remove across filesystems.
fn move_file(src: &Path, dst: &Path) -> Result<()> {
    match fs::rename(src, dst) {
        Ok(()) => Ok(()),
        Err(e) => {
            tracing::warn!(error = %e, src = %src.display(), "Rename failed, falling back to copy+remove");
            copy_then_remove(src, dst)
        }
    }
}

/// Move by copying, then deleting the original. `src` is kept if the copy fails.
fn copy_then_remove(src: &Path, dst: &Path) -> Result<()> {
    fs::copy(src, dst).on_path("Failed to copy", src)?;
    fs::remove_file(src).on_path("Failed to remove", src)?;
    Ok(())
}

/// Remove `dir` if it has no entries left. Failures are ignored.
fn remove_dir_if_empty(dir: &Path) -> bool {
    let is_empty = fs::read_dir(dir)
        .map(|mut entries| entries.next().is_none())
        .unwrap_or(false);
    if !is_empty {
        return false;
    }

    match fs::remove_dir(dir) {
        Ok(()) => {
            tracing::debug!(dir = %dir.display(), "Removed empty source directory");
            true
        }
        Err(e) => {
            tracing::debug!(dir = %dir.display(), error = %e, "Could not remove source directory");
            false
        }
    }
}
