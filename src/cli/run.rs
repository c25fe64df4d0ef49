//! Orchestrates a conversion run from parsed arguments

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use console::style;

use crate::convert::{
    build_plan, execute_plan, print_plan, run_backup, Action, BackupOptions, ExecuteOptions,
    PlanRequest,
};
use crate::error::RenamerError;
use crate::layout::{RegionMap, MEMORY_CARDS_DIR};
use crate::report::ConversionSummary;
use crate::utils::{print_banner, print_completion, print_config, print_info, print_success};

use super::args::Cli;
use super::prompts::confirm_apply;

/// Run the conversion described by `cli`.
///
/// Order: source check, region map, backup, plan, preview, execute.
pub fn run_rename(cli: &Cli) -> Result<()> {
    let sd_root = resolve_root(&cli.sd_root)?;
    let memory_cards = sd_root.join(MEMORY_CARDS_DIR);
    if !memory_cards.is_dir() {
        return Err(RenamerError::SourceMissing(memory_cards).into());
    }

    let out_root = resolve_root(cli.output_root())?;
    let direction = cli.direction();
    let action = Action::for_roots(&sd_root, &out_root);

    let regions = RegionMap::load(cli.region_map_json.as_deref())?;

    print_banner(env!("CARGO_PKG_VERSION"));
    print_config(
        &sd_root,
        &out_root,
        &direction.to_string(),
        cli.backup_dir.as_deref(),
        cli.dry_run,
    );

    let backup = match &cli.backup_dir {
        Some(dir) => {
            let options = BackupOptions {
                backup_dir: resolve_root(dir)?,
                force: cli.force,
                dry_run: cli.dry_run,
                timestamped: cli.timestamped_backup,
            };
            let dst = run_backup(&sd_root, &options)?;
            if !cli.dry_run {
                print_success(&format!("Backup written to {}", dst.display()));
            }
            Some(dst)
        }
        None => None,
    };

    let request = PlanRequest {
        sd_root: sd_root.clone(),
        out_root: out_root.clone(),
        direction,
        force: cli.force,
    };
    let plan = build_plan(&request, &regions)?;

    if plan.is_empty() {
        print_info("No convertible entries found. Check source layout and flags.");
        return Ok(());
    }

    print_plan(&plan);
    if cli.verbose {
        println!(
            "{}",
            style(format!(
                "Execute: overwrite={} dry_run={} mode={}",
                cli.force, cli.dry_run, action
            ))
            .dim()
        );
    }

    if cli.confirm && !cli.dry_run && !confirm_apply(plan.len(), &action.to_string())? {
        println!("Cancelled by user.");
        return Ok(());
    }

    let report = execute_plan(
        &plan,
        ExecuteOptions {
            force: cli.force,
            dry_run: cli.dry_run,
        },
    )?;

    let mut summary = ConversionSummary::new(direction, plan.len(), cli.dry_run);
    if let Some(dst) = backup.filter(|_| !cli.dry_run) {
        summary.set_backup(dst);
    }
    summary.set_report(report);
    summary.display();

    print_completion();
    Ok(())
}

/// Make a root path absolute, resolving symlinks when it already exists.
pub fn resolve_root(path: &Path) -> Result<PathBuf> {
    if let Ok(canonical) = path.canonicalize() {
        return Ok(canonical);
    }
    std::path::absolute(path)
        .with_context(|| format!("Failed to resolve path: {}", path.display()))
}
