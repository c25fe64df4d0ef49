//! Error types for scanning, planning, and executing layout conversions.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors that can occur while converting a memory card layout.
#[derive(Error, Debug)]
pub enum RenamerError {
    /// The `MemoryCards` folder under the SD root does not exist.
    #[error("{} not found", .0.display())]
    SourceMissing(PathBuf),

    /// A plan item would overwrite an existing file and `--force` was not given.
    #[error("Destination exists: {} (use --force to overwrite)", .0.display())]
    DestinationExists(PathBuf),

    /// Two source entries map onto the same destination file.
    #[error(
        "Multiple entries map to {}: {} and {} (use --force to let the later one win)",
        .destination.display(),
        .first.display(),
        .second.display()
    )]
    DuplicateDestination {
        destination: PathBuf,
        first: PathBuf,
        second: PathBuf,
    },

    /// The backup destination already exists and `--force` was not given.
    #[error("Backup destination exists: {} (use --force to replace it)", .0.display())]
    BackupExists(PathBuf),

    /// The backup destination lies inside the tree being backed up.
    #[error(
        "Backup destination {} is inside {}; choose a directory outside MemoryCards",
        .backup.display(),
        .source_dir.display()
    )]
    BackupInsideSource { backup: PathBuf, source_dir: PathBuf },

    /// The region map override file is not valid JSON.
    #[error("Failed to parse region map JSON")]
    RegionMapParse(#[from] serde_json::Error),

    /// The region map override file parsed, but holds an unusable entry.
    #[error("Invalid region map: {message}")]
    InvalidRegionMap { message: String },

    /// An I/O operation failed on a specific path.
    #[error("{action} {}", .path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl RenamerError {
    /// Wrap an I/O error with the path and the operation that failed.
    pub fn io(action: &'static str, path: &Path, source: std::io::Error) -> Self {
        RenamerError::Io {
            action,
            path: path.to_path_buf(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, RenamerError>;

/// Attach path context to `std::io::Result` values.
pub(crate) trait IoContext<T> {
    fn on_path(self, action: &'static str, path: &Path) -> Result<T>;
}

impl<T> IoContext<T> for std::io::Result<T> {
    fn on_path(self, action: &'static str, path: &Path) -> Result<T> {
        self.map_err(|e| RenamerError::io(action, path, e))
    }
}
