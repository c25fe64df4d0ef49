//! Command-line argument definitions using clap

use clap::{Args, Parser};
use std::path::{Path, PathBuf};

use crate::convert::Direction;

/// VMC Renamer - convert GameCube memory card naming between MCGCP and GCMCE
#[derive(Parser, Debug)]
#[command(name = "vmc-renamer")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the SD root (containing MemoryCards/)
    #[arg(long)]
    pub sd_root: PathBuf,

    #[command(flatten)]
    pub mode: ModeArgs,

    /// Write to this root instead (copy mode).
    /// If omitted, entries are converted in place (move mode).
    #[arg(long)]
    pub output_sd_root: Option<PathBuf>,

    /// Back up {sd-root}/MemoryCards into this directory first
    #[arg(long)]
    pub backup_dir: Option<PathBuf>,

    /// Name the backup MemoryCards.backup-YYYYMMDD-HHMMSS instead of MemoryCards.backup
    #[arg(long, requires = "backup_dir")]
    pub timestamped_backup: bool,

    /// JSON file with {letter_to_region3, region3_to_letter} overrides
    #[arg(long)]
    pub region_map_json: Option<PathBuf>,

    /// Overwrite existing destination files/dirs
    #[arg(long)]
    pub force: bool,

    /// Plan only; do not modify the filesystem
    #[arg(long)]
    pub dry_run: bool,

    /// Ask for confirmation before applying the plan
    #[arg(long)]
    pub confirm: bool,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Conversion direction flags; exactly one is required.
#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
pub struct ModeArgs {
    /// Convert MCGCP -> GCMCE
    #[arg(long)]
    pub rename_to_gcmce: bool,

    /// Convert GCMCE -> MCGCP
    #[arg(long)]
    pub rename_to_mcgcp: bool,
}

impl Cli {
    pub fn direction(&self) -> Direction {
        if self.mode.rename_to_gcmce {
            Direction::ToGcmce
        } else {
            Direction::ToMcgcp
        }
    }

    /// Output root as given, defaulting to the SD root.
    pub fn output_root(&self) -> &Path {
        self.output_sd_root.as_deref().unwrap_or(&self.sd_root)
    }
}
