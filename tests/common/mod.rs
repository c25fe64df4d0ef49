//! Shared test utilities and SD card fixture builders

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Bytes written into every fixture save file
pub const SAVE_BYTES: &[u8] = b"\x00GCN-RAW-SAVE\xff";

/// Create an empty SD root with a `MemoryCards` folder
pub fn create_sd_root() -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let sd_root = temp_dir.path().join("sd");
    fs::create_dir_all(sd_root.join("MemoryCards")).unwrap();
    (temp_dir, sd_root)
}

/// Add `MemoryCards/{GAMEID}0100/{GAMEID}0100-1.raw`
pub fn add_mcgcp_card(sd_root: &Path, game_id: &str) -> PathBuf {
    let dir_name = format!("{}0100", game_id);
    let dir = sd_root.join("MemoryCards").join(&dir_name);
    fs::create_dir_all(&dir).unwrap();
    let file = dir.join(format!("{}-1.raw", dir_name));
    fs::write(&file, SAVE_BYTES).unwrap();
    file
}

/// Add `MemoryCards/GC/DL-DOL-{GAMEID}-{REGION3}/DL-DOL-{GAMEID}-{REGION3}-1.raw`
pub fn add_gcmce_card(sd_root: &Path, game_id: &str, region: &str) -> PathBuf {
    let dir_name = format!("DL-DOL-{}-{}", game_id, region);
    let dir = sd_root.join("MemoryCards").join("GC").join(&dir_name);
    fs::create_dir_all(&dir).unwrap();
    let file = dir.join(format!("{}-1.raw", dir_name));
    fs::write(&file, SAVE_BYTES).unwrap();
    file
}

/// Collect every path under `root` (relative, sorted) as a snapshot of the tree
pub fn snapshot_tree(root: &Path) -> Vec<(PathBuf, Option<Vec<u8>>)> {
    let mut entries: Vec<(PathBuf, Option<Vec<u8>>)> = walkdir::WalkDir::new(root)
        .into_iter()
        .map(|e| e.unwrap())
        .map(|e| {
            let rel = e.path().strip_prefix(root).unwrap().to_path_buf();
            let contents = if e.file_type().is_file() {
                Some(fs::read(e.path()).unwrap())
            } else {
                None
            };
            (rel, contents)
        })
        .collect();
    entries.sort();
    entries
}

/// Assert that a save file exists and holds the fixture bytes
pub fn assert_save_file(path: &Path) {
    assert!(path.is_file(), "Expected save file at {}", path.display());
    assert_eq!(
        fs::read(path).unwrap(),
        SAVE_BYTES,
        "Save contents changed at {}",
        path.display()
    );
}
