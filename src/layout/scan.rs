//! Enumerate memory card directories that follow a known layout

use std::path::{Path, PathBuf};

use crate::error::{IoContext, Result};

use super::naming::{parse_gcmce_dir_name, parse_mcgcp_dir_name, save_file_name};

/// A `{GAMEID}0100` card directory and its save file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct McgcpEntry {
    pub dir: PathBuf,
    pub file: PathBuf,
    pub game_id: String,
}

/// A `DL-DOL-{GAMEID}-{REGION3}` card directory and its save file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GcmceEntry {
    pub dir: PathBuf,
    pub file: PathBuf,
    pub game_id: String,
    pub region: String,
}

/// List MCGCP entries directly under `memory_cards_dir`.
///
/// Directories whose name does not match, or whose `-1.raw` file is missing,
/// are skipped. A missing root yields an empty list.
pub fn scan_mcgcp(memory_cards_dir: &Path) -> Result<Vec<McgcpEntry>> {
    let mut entries = Vec::new();
    for (dir, name) in card_directories(memory_cards_dir)? {
        let Some(game_id) = parse_mcgcp_dir_name(&name) else {
            continue;
        };
        let file = dir.join(save_file_name(&name));
        if !file.exists() {
            tracing::debug!(dir = %dir.display(), "Skipping card directory without save file");
            continue;
        }
        entries.push(McgcpEntry {
            game_id: game_id.to_string(),
            dir,
            file,
        });
    }
    Ok(entries)
}

/// List GCMCE entries directly under `gc_dir`.
pub fn scan_gcmce(gc_dir: &Path) -> Result<Vec<GcmceEntry>> {
    let mut entries = Vec::new();
    for (dir, name) in card_directories(gc_dir)? {
        let Some((game_id, region)) = parse_gcmce_dir_name(&name) else {
            continue;
        };
        let file = dir.join(save_file_name(&name));
        if !file.exists() {
            tracing::debug!(dir = %dir.display(), "Skipping card directory without save file");
            continue;
        }
        entries.push(GcmceEntry {
            game_id: game_id.to_string(),
            region: region.to_string(),
            dir,
            file,
        });
    }
    Ok(entries)
}

/// Immediate subdirectories of `root` with UTF-8 names, sorted by name.
fn card_directories(root: &Path) -> Result<Vec<(PathBuf, String)>> {
    if !root.exists() {
        return Ok(Vec::new());
    }

    let mut dirs = Vec::new();
    for entry in std::fs::read_dir(root).on_path("Failed to list", root)? {
        let entry = entry.on_path("Failed to list", root)?;
        let path = entry.path();
        if !path.is_dir() {
            continue;
        }
        let Some(name) = entry.file_name().to_str().map(str::to_string) else {
            tracing::debug!(path = %path.display(), "Skipping non UTF-8 directory name");
            continue;
        };
        dirs.push((path, name));
    }

    dirs.sort_by(|a, b| a.1.cmp(&b.1));
    Ok(dirs)
}
