//! Build the list of filesystem operations for a conversion
//!
//! Planning never touches the filesystem beyond reading directory listings, so
//! a plan can always be previewed before anything is moved.

use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};

use console::style;

use crate::error::{RenamerError, Result};
use crate::layout::{
    gcmce_dir_name, mcgcp_dir_name, region_letter, save_file_name, scan_gcmce, scan_mcgcp,
    RegionMap, FALLBACK_REGION, GC_DIR, MEMORY_CARDS_DIR,
};

/// Which way to convert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// MCGCP -> GCMCE
    ToGcmce,
    /// GCMCE -> MCGCP
    ToMcgcp,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::ToGcmce => write!(f, "MCGCP→GCMCE"),
            Direction::ToMcgcp => write!(f, "GCMCE→MCGCP"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Move,
    Copy,
}

impl Action {
    /// Move when converting in place, copy when writing to another root.
    pub fn for_roots(sd_root: &Path, out_root: &Path) -> Self {
        if sd_root == out_root {
            Action::Move
        } else {
            Action::Copy
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Move => write!(f, "MOVE"),
            Action::Copy => write!(f, "COPY"),
        }
    }
}

/// One save file to relocate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanItem {
    pub src_dir: PathBuf,
    pub src_file: PathBuf,
    pub dst_dir: PathBuf,
    pub dst_file: PathBuf,
    pub action: Action,
    pub reason: String,
}

/// Inputs to [`build_plan`].
#[derive(Debug, Clone)]
pub struct PlanRequest {
    pub sd_root: PathBuf,
    pub out_root: PathBuf,
    pub direction: Direction,
    /// Allow several items to share a destination; the later item wins.
    pub force: bool,
}

/// Scan the source layout and compute a destination for every entry found.
pub fn build_plan(request: &PlanRequest, regions: &RegionMap) -> Result<Vec<PlanItem>> {
    let action = Action::for_roots(&request.sd_root, &request.out_root);
    let plan = match request.direction {
        Direction::ToGcmce => plan_to_gcmce(&request.sd_root, &request.out_root, regions, action)?,
        Direction::ToMcgcp => plan_to_mcgcp(&request.sd_root, &request.out_root, action)?,
    };

    if !request.force {
        check_unique_destinations(&plan)?;
    }

    tracing::debug!(items = plan.len(), direction = %request.direction, "Plan built");
    Ok(plan)
}

fn plan_to_gcmce(
    sd_root: &Path,
    out_root: &Path,
    regions: &RegionMap,
    action: Action,
) -> Result<Vec<PlanItem>> {
    let src_root = sd_root.join(MEMORY_CARDS_DIR);
    let dst_root = out_root.join(MEMORY_CARDS_DIR).join(GC_DIR);

    let plan = scan_mcgcp(&src_root)?
        .into_iter()
        .map(|entry| {
            let region = region_letter(&entry.game_id)
                .map(|letter| regions.region_for_letter(letter))
                .unwrap_or_else(|| FALLBACK_REGION.to_string());
            let dst_dir_name = gcmce_dir_name(&entry.game_id, &region);
            let dst_dir = dst_root.join(&dst_dir_name);
            let dst_file = dst_dir.join(save_file_name(&dst_dir_name));
            PlanItem {
                reason: format!(
                    "{} {} -> {}",
                    Direction::ToGcmce,
                    entry.game_id,
                    dst_dir_name
                ),
                src_dir: entry.dir,
                src_file: entry.file,
                dst_dir,
                dst_file,
                action,
            }
        })
        .collect();

    Ok(plan)
}

fn plan_to_mcgcp(sd_root: &Path, out_root: &Path, action: Action) -> Result<Vec<PlanItem>> {
    let src_root = sd_root.join(MEMORY_CARDS_DIR).join(GC_DIR);
    let dst_root = out_root.join(MEMORY_CARDS_DIR);

    // The game id already carries the region letter, so it is used as-is.
    let plan = scan_gcmce(&src_root)?
        .into_iter()
        .map(|entry| {
            let dst_dir_name = mcgcp_dir_name(&entry.game_id);
            let dst_dir = dst_root.join(&dst_dir_name);
            let dst_file = dst_dir.join(save_file_name(&dst_dir_name));
            PlanItem {
                reason: format!(
                    "{} {} -> {}",
                    Direction::ToMcgcp,
                    gcmce_dir_name(&entry.game_id, &entry.region),
                    dst_dir_name
                ),
                src_dir: entry.dir,
                src_file: entry.file,
                dst_dir,
                dst_file,
                action,
            }
        })
        .collect();

    Ok(plan)
}

fn check_unique_destinations(plan: &[PlanItem]) -> Result<()> {
    let mut seen: HashMap<&Path, &Path> = HashMap::new();
    for item in plan {
        if let Some(first) = seen.insert(&item.dst_file, &item.src_file) {
            return Err(RenamerError::DuplicateDestination {
                destination: item.dst_file.clone(),
                first: first.to_path_buf(),
                second: item.src_file.clone(),
            });
        }
    }
    Ok(())
}

/// Print the planned operations.
pub fn print_plan(plan: &[PlanItem]) {
    println!("{}", style("Planned operations:").cyan().bold());
    for item in plan {
        println!(
            "  {}: {}  ->  {}   {}",
            style(item.action).yellow(),
            item.src_file.display(),
            item.dst_file.display(),
            style(format!("({})", item.reason)).dim()
        );
    }
    println!("Total items: {}", style(plan.len()).yellow().bold());
}
